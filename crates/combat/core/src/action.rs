//! Actions a combatant reports as performed.

use crate::state::{AbilityId, EquipmentSlot};

/// Kinds of actions that can carry an action-point cost.
///
/// Base costs are looked up by kind in the rules database.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    // ========================================================================
    // Movement
    // ========================================================================
    /// One step along a path.
    Walk,
    /// Halting an ongoing movement.
    StopWalking,

    // ========================================================================
    // Inventory
    // ========================================================================
    PickUpItem,
    DropItem,
    UseItem,
    EquipItem,
    UnequipItem,

    // ========================================================================
    // Combat
    // ========================================================================
    /// Casting or using an ability; adds the ability's own cost.
    UseAbility,
    /// Hitting with the item in a hand slot; adds the item type's cost.
    Strike,

    // ========================================================================
    // World
    // ========================================================================
    /// Opening doors, pulling levers, talking.
    Interact,
}

impl ActionKind {
    /// Actions that never consume points.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, ActionKind::DropItem | ActionKind::StopWalking)
    }
}

/// Notification payload for an action a creature has just performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PerformedAction {
    Walk,
    StopWalking,
    PickUpItem,
    DropItem,
    UseItem,
    EquipItem,
    UnequipItem,
    UseAbility(AbilityId),
    Strike(EquipmentSlot),
    Interact,
}

impl PerformedAction {
    pub const fn kind(&self) -> ActionKind {
        match self {
            PerformedAction::Walk => ActionKind::Walk,
            PerformedAction::StopWalking => ActionKind::StopWalking,
            PerformedAction::PickUpItem => ActionKind::PickUpItem,
            PerformedAction::DropItem => ActionKind::DropItem,
            PerformedAction::UseItem => ActionKind::UseItem,
            PerformedAction::EquipItem => ActionKind::EquipItem,
            PerformedAction::UnequipItem => ActionKind::UnequipItem,
            PerformedAction::UseAbility(_) => ActionKind::UseAbility,
            PerformedAction::Strike(_) => ActionKind::Strike,
            PerformedAction::Interact => ActionKind::Interact,
        }
    }
}
