use thiserror::Error;

use crate::host::{Host, HostError};

#[derive(Debug, Error)]
pub enum SceneError {
    /// A required resource or named entity could not be produced during
    /// `initialize`. The scene stays unusable and must not be activated.
    #[error("initialization failed: {0}")]
    Initialization(String),
    /// A per-step failure inside `update`. The director degrades the scene
    /// to `Faulted` instead of stopping the run.
    #[error("update failed: {0}")]
    Update(String),
}

impl From<HostError> for SceneError {
    fn from(err: HostError) -> Self {
        SceneError::Initialization(err.to_string())
    }
}

/// Where a registered scene sits in its lifecycle. Owned by the director;
/// scene implementations never store their own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    Constructed,
    Initialized,
    Active,
    Inactive,
    /// Terminal: an `update` failed and the scene is frozen out of
    /// stepping.
    Faulted,
}

/// Lifecycle capability set of a scene. The director guarantees the call
/// order: `initialize` exactly once, then any number of
/// `enter` / `update`* / `leave` rounds.
pub trait Scene {
    /// Immutable after construction.
    fn name(&self) -> &str;

    /// One-time setup: build or look up owned entities through the host.
    fn initialize(&mut self, host: &mut dyn Host, time: f32) -> Result<(), SceneError>;

    /// The scene starts receiving `update` calls.
    fn enter(&mut self) {}

    /// Per-step animation: recompute owned transforms from absolute
    /// `time`. Must not touch anything outside the scene's own entities.
    fn update(&mut self, time: f32, delta: f32) -> Result<(), SceneError>;

    /// The scene stops receiving `update` calls until the next `enter`.
    fn leave(&mut self) {}
}

/// Ordered entity slots with stable indices. A slot can be cleared to mark
/// its entity as removed without shifting the others, so "absent" is a
/// checked state rather than a dangling index.
pub struct SlotList<T> {
    slots: Vec<Option<T>>,
}

impl<T> SlotList<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Appends and returns the slot index, stable for the list's lifetime.
    pub fn push(&mut self, value: T) -> usize {
        self.slots.push(Some(value));
        self.slots.len() - 1
    }

    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Empties the slot, keeping the index valid. Clearing an already
    /// empty or out-of-range slot is a no-op.
    pub fn clear(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    #[allow(dead_code)]
    pub fn occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    #[allow(dead_code)]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|value| (index, value)))
    }
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_stable_across_clear() {
        let mut slots = SlotList::new();
        let a = slots.push("ground");
        let b = slots.push("spinner");
        let c = slots.push("bobber");

        assert_eq!(slots.clear(b), Some("spinner"));
        assert_eq!(slots.get(a), Some(&"ground"));
        assert_eq!(slots.get(b), None);
        assert_eq!(slots.get(c), Some(&"bobber"));
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut slots = SlotList::new();
        let index = slots.push(1);
        assert_eq!(slots.clear(index), Some(1));
        assert_eq!(slots.clear(index), None);
        assert_eq!(slots.clear(99), None);
        assert!(!slots.occupied(index));
    }

    #[test]
    fn iter_skips_cleared_slots() {
        let mut slots = SlotList::new();
        slots.push(10);
        let middle = slots.push(20);
        slots.push(30);
        slots.clear(middle);

        let seen: Vec<_> = slots.iter().collect();
        assert_eq!(seen, vec![(0, &10), (2, &30)]);
    }

    #[test]
    fn host_errors_become_initialization_errors() {
        let err: SceneError = HostError::NoSuchEntity("camera".to_string()).into();
        assert!(matches!(err, SceneError::Initialization(_)));
    }
}
