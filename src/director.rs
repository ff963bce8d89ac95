use log::{debug, error, info};
use thiserror::Error;

use crate::host::Host;
use crate::scene::{Scene, SceneError, SceneState};

#[derive(Debug, Error)]
pub enum DirectorError {
    #[error("a scene named \"{0}\" is already registered")]
    DuplicateScene(String),
    #[error("no scene named \"{0}\" is registered")]
    UnknownScene(String),
    #[error("scene \"{name}\" cannot be activated from {state:?}")]
    SceneUnusable { name: String, state: SceneState },
    #[error("scene \"{name}\" failed to initialize: {source}")]
    Initialization {
        name: String,
        #[source]
        source: SceneError,
    },
}

#[derive(Debug, Clone)]
pub struct DirectorConfig {
    /// Reject `register_scene` when the name collides with an existing
    /// registration. With this off, duplicates are admitted and
    /// `activate` resolves to the first match.
    pub unique_names: bool,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self { unique_names: true }
    }
}

struct SceneSlot {
    scene: Box<dyn Scene>,
    state: SceneState,
}

/// Scene registry and scheduler. Owns every registered scene, enforces the
/// lifecycle state machine and delivers per-step updates to the single
/// active scene.
pub struct Director {
    config: DirectorConfig,
    scenes: Vec<SceneSlot>,
    active: Option<usize>,
}

impl Director {
    pub fn new() -> Self {
        Self::with_config(DirectorConfig::default())
    }

    pub fn with_config(config: DirectorConfig) -> Self {
        Self {
            config,
            scenes: Vec::new(),
            active: None,
        }
    }

    /// Appends a scene to the registry. Never activates it.
    pub fn register_scene(&mut self, scene: Box<dyn Scene>) -> Result<(), DirectorError> {
        if self.config.unique_names
            && self
                .scenes
                .iter()
                .any(|slot| slot.scene.name() == scene.name())
        {
            return Err(DirectorError::DuplicateScene(scene.name().to_string()));
        }
        debug!("registered scene \"{}\"", scene.name());
        self.scenes.push(SceneSlot {
            scene,
            state: SceneState::Constructed,
        });
        Ok(())
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Name of the scene currently holding the active slot, if any.
    pub fn active_scene(&self) -> Option<&str> {
        self.active.map(|index| self.scenes[index].scene.name())
    }

    #[allow(dead_code)]
    pub fn scene_state(&self, name: &str) -> Option<SceneState> {
        self.find(name).map(|index| self.scenes[index].state)
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.scenes
            .iter()
            .position(|slot| slot.scene.name() == name)
    }

    /// Runs the named scene up to `Active`: `initialize(time)` on first
    /// activation, then `enter()`. The previously active scene receives
    /// `leave()` only after the incoming scene's initialization has
    /// succeeded, so a failed initialization leaves it untouched.
    /// Activating the scene that is already active is a no-op.
    pub fn activate(
        &mut self,
        name: &str,
        host: &mut dyn Host,
        time: f32,
    ) -> Result<(), DirectorError> {
        let index = self
            .find(name)
            .ok_or_else(|| DirectorError::UnknownScene(name.to_string()))?;
        if self.active == Some(index) {
            return Ok(());
        }

        match self.scenes[index].state {
            SceneState::Constructed => {
                info!("initializing scene \"{name}\" at t={time}");
                if let Err(source) = self.scenes[index].scene.initialize(host, time) {
                    error!("scene \"{name}\" failed to initialize: {source}");
                    return Err(DirectorError::Initialization {
                        name: name.to_string(),
                        source,
                    });
                }
                self.scenes[index].state = SceneState::Initialized;
            }
            SceneState::Initialized | SceneState::Inactive => {}
            state @ (SceneState::Active | SceneState::Faulted) => {
                return Err(DirectorError::SceneUnusable {
                    name: name.to_string(),
                    state,
                });
            }
        }

        self.deactivate();

        info!("entering scene \"{name}\"");
        self.scenes[index].scene.enter();
        self.scenes[index].state = SceneState::Active;
        self.active = Some(index);
        Ok(())
    }

    /// Delivers `leave()` to the active scene, if any. This is the only
    /// cancellation primitive: after it, no scene receives `update` until
    /// the next `activate`.
    pub fn deactivate(&mut self) {
        if let Some(index) = self.active.take() {
            let slot = &mut self.scenes[index];
            info!("leaving scene \"{}\"", slot.scene.name());
            slot.scene.leave();
            // A faulted scene still gets leave() but stays terminal.
            if slot.state == SceneState::Active {
                slot.state = SceneState::Inactive;
            }
        }
    }

    /// Delivers one `update(time, delta)` to the active scene. No-op when
    /// nothing is active. A failing update is logged and freezes the
    /// scene out of all further steps; the run continues.
    pub fn step(&mut self, time: f32, delta: f32) {
        let Some(index) = self.active else {
            return;
        };
        let slot = &mut self.scenes[index];
        if slot.state != SceneState::Active {
            return;
        }
        if let Err(err) = slot.scene.update(time, delta) {
            error!("scene \"{}\" faulted at t={time}: {err}", slot.scene.name());
            slot.state = SceneState::Faulted;
        }
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}
