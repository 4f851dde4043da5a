//! Creature collaborator.

use crate::state::{ActionPoints, AttributeId, EntityId, EquipmentSlot, ItemTypeId, ValueKind};

/// Per-creature stats and hooks consumed by the scheduler.
///
/// Every method receives the handle of the creature it concerns; the
/// scheduler never holds a reference to the creature itself.
pub trait CreatureOracle {
    fn health(&self, entity: EntityId, kind: ValueKind) -> i32;

    /// Points granted at the start of each of the creature's turns.
    fn action_points_budget(&self, entity: EntityId) -> ActionPoints;

    /// Whether `other` is within interaction range of `entity`.
    fn is_in_range(&self, entity: EntityId, other: EntityId) -> bool;

    fn attribute(&self, entity: EntityId, attribute: AttributeId, kind: ValueKind) -> i32;

    /// Type of the item equipped in `slot`, if any.
    fn equipped_item_type(&self, entity: EntityId, slot: EquipmentSlot) -> Option<ItemTypeId>;

    /// Hook invoked when the creature receives the turn.
    fn start_combat_turn(&self, entity: EntityId);

    /// Starts or stops routing the creature's death and action notifications
    /// to the scheduler.
    fn set_observed(&self, entity: EntityId, observed: bool);
}
