//! Rules database collaborator.

use crate::action::ActionKind;
use crate::state::{AbilityId, ActionPoints, ItemTypeId};

/// Action-point cost tables.
pub trait RulesOracle {
    /// Base cost of an action kind.
    fn action_cost(&self, kind: ActionKind) -> ActionPoints;

    /// Extra cost of using a specific ability.
    fn ability_cost(&self, ability: AbilityId) -> ActionPoints;

    /// Extra cost of striking with an item of the given type.
    fn item_type_cost(&self, item_type: ItemTypeId) -> ActionPoints;
}
