//! World collaborator.

use crate::state::{EntityId, EntityKind, SimulationMode};

/// Entity classification, world mode switching, and the combat condition.
pub trait WorldOracle {
    /// Classifies a handle. Returns `None` for a handle the world does not know.
    fn entity_kind(&self, entity: EntityId) -> Option<EntityKind>;

    /// Handle of the player-controlled character.
    fn player(&self) -> EntityId;

    /// Externally computed predicate deciding whether combat should be active.
    fn combat_condition(&self) -> bool;

    fn set_simulation_mode(&self, mode: SimulationMode);

    /// Subscribes to (or unsubscribes from) entity-destruction notifications.
    fn watch_destruction(&self, watching: bool);
}
