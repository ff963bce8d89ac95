use glam::{Vec2, Vec3};
use log::debug;

use crate::animation::{past, spin_angle, wave};
use crate::host::{Host, HostEntity};
use crate::model::{MeshDesc, Model, ModelInit};
use crate::scene::{Scene, SceneError, SlotList};

/// The opening scene: one screen-sized plane pulsing around its anchor.
pub struct PulseScene {
    name: String,
    plane: Option<Model>,
}

impl PulseScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plane: None,
        }
    }
}

impl Scene for PulseScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, host: &mut dyn Host, time: f32) -> Result<(), SceneError> {
        debug!("{}: initialize at t={time}", self.name);
        let plane = host.create_model(
            MeshDesc::Plane {
                size: Vec2::splat(256.0),
                segments: Vec2::ONE,
                normal: Vec3::NEG_Z,
            },
            ModelInit {
                translate: Vec3::new(640.0, 360.0, 0.0),
                ..ModelInit::default()
            },
        )?;
        debug!("{}: created \"{}\" model", self.name, plane.name);
        self.plane = Some(plane);
        Ok(())
    }

    fn enter(&mut self) {
        debug!("{}: enter", self.name);
    }

    fn update(&mut self, time: f32, _delta: f32) -> Result<(), SceneError> {
        let plane = self
            .plane
            .as_mut()
            .ok_or_else(|| SceneError::Update("plane model missing".to_string()))?;
        plane.transform.set_scale_uniform(wave(time, 2.0, 1.5, 2.0));
        Ok(())
    }

    fn leave(&mut self) {
        debug!("{}: leave", self.name);
    }
}

/// How long the bobbing prop lives before its slot is cleared.
const BOBBER_LIFETIME: f32 = 10.0;

/// Ground slab with a prop spinning over it and another bobbing until it
/// is removed past [`BOBBER_LIFETIME`]. Also dollies the host camera, so
/// the by-name lookup path gets exercised.
pub struct OrbitScene {
    name: String,
    models: SlotList<Model>,
    spinner: usize,
    bobber: usize,
    camera: Option<HostEntity>,
    sun: Option<HostEntity>,
}

impl OrbitScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            models: SlotList::new(),
            spinner: 0,
            bobber: 0,
            camera: None,
            sun: None,
        }
    }
}

impl Scene for OrbitScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, host: &mut dyn Host, time: f32) -> Result<(), SceneError> {
        debug!("{}: initialize at t={time}", self.name);

        let ground = host.create_model(
            MeshDesc::Ground {
                size: Vec3::new(16.0, 16.0, 0.2),
                segments: Vec2::splat(32.0),
            },
            ModelInit {
                translate: Vec3::new(0.0, -0.5, 0.0),
                ..ModelInit::default()
            },
        )?;
        self.models.push(ground);

        let spinner = host.create_model(
            MeshDesc::Plane {
                size: Vec2::splat(2.0),
                segments: Vec2::ONE,
                normal: Vec3::Y,
            },
            ModelInit {
                translate: Vec3::new(0.0, 1.0, 0.0),
                ..ModelInit::default()
            },
        )?;
        self.spinner = self.models.push(spinner);

        let bobber = host.create_model(
            MeshDesc::Plane {
                size: Vec2::ONE,
                segments: Vec2::ONE,
                normal: Vec3::Y,
            },
            ModelInit {
                translate: Vec3::new(3.0, 1.0, 0.0),
                ..ModelInit::default()
            },
        )?;
        self.bobber = self.models.push(bobber);

        let camera = host.get_entity("camera")?;
        let sun = host.create_entity("sun")?;
        debug!(
            "{}: tracking \"{}\" and \"{}\"",
            self.name,
            camera.name(),
            sun.name()
        );
        self.camera = Some(camera);
        self.sun = Some(sun);
        Ok(())
    }

    fn enter(&mut self) {
        debug!("{}: enter", self.name);
    }

    fn update(&mut self, time: f32, _delta: f32) -> Result<(), SceneError> {
        if let Some(spinner) = self.models.get_mut(self.spinner) {
            spinner
                .transform
                .rotate_from_angle_axis(spin_angle(time, 50.0), Vec3::Z);
        }

        if past(time, BOBBER_LIFETIME) {
            // clear() on an already empty slot is a no-op.
            if self.models.clear(self.bobber).is_some() {
                debug!("{}: bobber retired at t={time}", self.name);
            }
        } else if let Some(bobber) = self.models.get_mut(self.bobber) {
            bobber.transform.translate.z = wave(time, 0.0, 2.0, 2.0);
        }

        if let Some(camera) = &self.camera {
            camera
                .transform_mut()
                .set_translate(Vec3::new(0.0, 4.0, wave(time, -6.0, 0.5, 0.5)));
        }
        if let Some(sun) = &self.sun {
            sun.transform_mut()
                .rotate_from_angle_axis(spin_angle(time, 10.0), Vec3::X);
        }

        Ok(())
    }

    fn leave(&mut self) {
        debug!(
            "{}: leave ({} props still live)",
            self.name,
            self.models.iter().count()
        );
    }
}
