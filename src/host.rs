use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;
use thiserror::Error;

use crate::model::{MeshDesc, MeshHandle, Model, ModelInit};
use crate::transform::Transform;

#[derive(Debug, Error)]
pub enum HostError {
    /// The factory cannot produce the described resource.
    #[error("missing asset: {0}")]
    MissingAsset(String),
    #[error("no entity named \"{0}\"")]
    NoSuchEntity(String),
    #[error("entity name must not be empty")]
    EmptyName,
}

/// Shared handle to an entity the host owns (a camera, a light). The
/// transform is shared with the host through the handle; an active scene
/// may move it. Single-threaded per the scheduling model.
#[derive(Clone)]
pub struct HostEntity {
    name: String,
    transform: Rc<RefCell<Transform>>,
}

impl HostEntity {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Rc::new(RefCell::new(Transform::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(dead_code)]
    pub fn transform(&self) -> Ref<'_, Transform> {
        self.transform.borrow()
    }

    pub fn transform_mut(&self) -> RefMut<'_, Transform> {
        self.transform.borrow_mut()
    }
}

/// Collaborator surface the host engine exposes to scenes. Handed into
/// `Scene::initialize`; never reached through globals.
pub trait Host {
    /// Builds a mesh resource and wraps it in a model owning a fresh
    /// transform seeded from `init`.
    fn create_model(&mut self, mesh: MeshDesc, init: ModelInit) -> Result<Model, HostError>;

    /// By-name lookup of a pre-existing host entity.
    fn get_entity(&self, name: &str) -> Result<HostEntity, HostError>;

    /// By-name lookup that creates the entity when it does not exist yet.
    fn create_entity(&mut self, name: &str) -> Result<HostEntity, HostError>;
}

/// In-process host used by the demo runner and the tests: a registry of
/// named entities (pre-seeded with the camera) and a mesh factory for the
/// procedural shapes. Text resources need font assets it does not have.
pub struct HeadlessHost {
    entities: HashMap<String, HostEntity>,
    next_mesh: u32,
}

impl HeadlessHost {
    pub fn new() -> Self {
        let mut host = Self {
            entities: HashMap::new(),
            next_mesh: 0,
        };
        host.insert("camera");
        host
    }

    fn insert(&mut self, name: &str) -> HostEntity {
        let entity = HostEntity::new(name);
        self.entities.insert(name.to_string(), entity.clone());
        entity
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for HeadlessHost {
    fn create_model(&mut self, mesh: MeshDesc, init: ModelInit) -> Result<Model, HostError> {
        if let MeshDesc::Text { text, .. } = &mesh {
            return Err(HostError::MissingAsset(format!(
                "font for text resource \"{text}\""
            )));
        }

        let handle = MeshHandle(self.next_mesh);
        self.next_mesh += 1;
        debug!("built {} mesh #{}", mesh.kind(), handle.0);

        Ok(Model {
            name: mesh.kind().to_string(),
            mesh: handle,
            transform: Transform {
                translate: init.translate,
                scale: init.scale,
                rotate: init.rotate,
            },
        })
    }

    fn get_entity(&self, name: &str) -> Result<HostEntity, HostError> {
        if name.is_empty() {
            return Err(HostError::EmptyName);
        }
        self.entities
            .get(name)
            .cloned()
            .ok_or_else(|| HostError::NoSuchEntity(name.to_string()))
    }

    fn create_entity(&mut self, name: &str) -> Result<HostEntity, HostError> {
        if name.is_empty() {
            return Err(HostError::EmptyName);
        }
        match self.entities.get(name) {
            Some(entity) => Ok(entity.clone()),
            None => {
                debug!("created entity \"{name}\"");
                Ok(self.insert(name))
            }
        }
    }
}
