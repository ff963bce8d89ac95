use glam::{Quat, Vec2, Vec3};

use crate::transform::Transform;

/// Procedural mesh shapes the host factory can build.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshDesc {
    Plane {
        size: Vec2,
        segments: Vec2,
        normal: Vec3,
    },
    Ground {
        size: Vec3,
        segments: Vec2,
    },
    #[allow(dead_code)]
    Text {
        text: String,
        size: f32,
    },
}

impl MeshDesc {
    pub fn kind(&self) -> &'static str {
        match self {
            MeshDesc::Plane { .. } => "plane",
            MeshDesc::Ground { .. } => "ground",
            MeshDesc::Text { .. } => "text",
        }
    }
}

/// Opaque handle to a mesh resource owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) u32);

/// Initial transform fields for a freshly built model.
#[derive(Debug, Clone)]
pub struct ModelInit {
    pub translate: Vec3,
    pub scale: Vec3,
    pub rotate: Quat,
}

impl Default for ModelInit {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            scale: Vec3::ONE,
            rotate: Quat::IDENTITY,
        }
    }
}

/// A mesh resource together with the transform its owning scene animates.
/// The transform belongs to exactly one scene; nothing else mutates it.
#[derive(Debug)]
pub struct Model {
    pub name: String,
    pub mesh: MeshHandle,
    pub transform: Transform,
}
