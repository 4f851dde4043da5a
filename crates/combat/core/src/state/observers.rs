use std::collections::BTreeSet;

use super::EntityId;

/// Subscription registry keyed by entity handle.
///
/// Holds no reference to the observed creatures; a notification for a handle
/// that is not registered is simply dropped.
#[derive(Clone, Debug, Default)]
pub struct ObserverRegistry {
    creatures: BTreeSet<EntityId>,
    world: bool,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a creature. Returns false if it was already observed.
    pub fn install(&mut self, entity: EntityId) -> bool {
        self.creatures.insert(entity)
    }

    /// Unregisters a creature. Returns false if it was not observed.
    pub fn uninstall(&mut self, entity: EntityId) -> bool {
        self.creatures.remove(&entity)
    }

    pub fn is_observing(&self, entity: EntityId) -> bool {
        self.creatures.contains(&entity)
    }

    pub fn is_watching_world(&self) -> bool {
        self.world
    }

    pub fn set_watching_world(&mut self, watching: bool) {
        self.world = watching;
    }
}
