//! Action-point price list.

use std::collections::HashMap;

use combat_core::{AbilityId, ActionKind, ActionPoints, ItemTypeId, RulesOracle};

/// Rules database backed by in-memory price maps.
///
/// Anything not listed costs nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostTable {
    actions: HashMap<ActionKind, ActionPoints>,
    abilities: HashMap<AbilityId, ActionPoints>,
    item_types: HashMap<ItemTypeId, ActionPoints>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, kind: ActionKind, cost: ActionPoints) -> Self {
        self.actions.insert(kind, cost);
        self
    }

    pub fn with_ability(mut self, ability: AbilityId, cost: ActionPoints) -> Self {
        self.abilities.insert(ability, cost);
        self
    }

    pub fn with_item_type(mut self, item_type: ItemTypeId, cost: ActionPoints) -> Self {
        self.item_types.insert(item_type, cost);
        self
    }

    /// Returns the number of priced action kinds.
    pub fn priced_actions(&self) -> usize {
        self.actions.len()
    }
}

impl RulesOracle for CostTable {
    fn action_cost(&self, kind: ActionKind) -> ActionPoints {
        self.actions.get(&kind).copied().unwrap_or(0)
    }

    fn ability_cost(&self, ability: AbilityId) -> ActionPoints {
        self.abilities.get(&ability).copied().unwrap_or(0)
    }

    fn item_type_cost(&self, item_type: ItemTypeId) -> ActionPoints {
        self.item_types.get(&item_type).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_entries_are_free() {
        let table = CostTable::new()
            .with_action(ActionKind::Walk, 1)
            .with_ability(AbilityId(4), 6)
            .with_item_type(ItemTypeId(2), 3);

        assert_eq!(table.action_cost(ActionKind::Walk), 1);
        assert_eq!(table.action_cost(ActionKind::Strike), 0);
        assert_eq!(table.ability_cost(AbilityId(4)), 6);
        assert_eq!(table.ability_cost(AbilityId(5)), 0);
        assert_eq!(table.item_type_cost(ItemTypeId(2)), 3);
        assert_eq!(table.item_type_cost(ItemTypeId(9)), 0);
    }

    #[test]
    fn later_prices_replace_earlier_ones() {
        let table = CostTable::new()
            .with_action(ActionKind::Strike, 3)
            .with_action(ActionKind::Strike, 4);

        assert_eq!(table.action_cost(ActionKind::Strike), 4);
        assert_eq!(table.priced_actions(), 1);
    }
}
