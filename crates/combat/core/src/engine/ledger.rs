//! Action-point accounting for the turn holder.

use tracing::{debug, trace};

use super::CombatEngine;
use crate::action::PerformedAction;
use crate::env::UiScreen;
use crate::events::CombatEvent;
use crate::state::{ActionPoints, EntityId, EntityKind};

impl CombatEngine<'_> {
    /// Charges the turn holder for an action it performed.
    ///
    /// Ignored while spending is blocked or when `entity` does not hold the
    /// turn. Once the counter reaches exactly 0 the turn passes on, except
    /// for the player while the profile screen is open.
    ///
    /// # Panics
    ///
    /// Panics if the cost exceeds the remaining points.
    pub fn on_action_performed(&mut self, entity: EntityId, action: PerformedAction) {
        if !self.state.active
            || self.state.ledger.is_blocked()
            || self.state.turns.holder() != Some(entity)
        {
            trace!(target: "combat::ledger", entity = %entity, ?action, "action not charged");
            return;
        }

        let kind = action.kind();
        if kind.is_free() {
            return;
        }

        let cost = self.action_cost(entity, action);
        let remaining = self.state.ledger.spend(cost);
        self.env.ui().show_action_points(Some(remaining));
        self.state.record(CombatEvent::ActionPointsSpent {
            entity,
            cost,
            remaining,
        });
        debug!(
            target: "combat::ledger",
            entity = %entity,
            action = %kind,
            cost,
            remaining,
            "action points spent"
        );

        if remaining > 0 {
            return;
        }
        if self.combatant_kind(entity) == EntityKind::Player
            && self.env.ui().current_screen() == UiScreen::PlayerProfile
        {
            debug!(target: "combat::ledger", "player out of points on profile screen; turn kept");
            return;
        }
        self.next_turn(entity);
    }

    /// Handles a holder that tried an action it cannot afford.
    ///
    /// Creatures pass the turn; the player gets a console warning instead.
    pub fn on_insufficient_action_points(&mut self, entity: EntityId) {
        if !self.state.active || self.state.turns.holder() != Some(entity) {
            return;
        }

        if self.combatant_kind(entity) == EntityKind::Player {
            let message = self.state.config.insufficient_points_message.as_str();
            self.env.ui().console_write(message);
        } else {
            debug!(target: "combat::ledger", entity = %entity, "out of points; passing turn");
            self.next_turn(entity);
        }
    }

    fn action_cost(&self, entity: EntityId, action: PerformedAction) -> ActionPoints {
        let rules = self.env.rules();
        let base = rules.action_cost(action.kind());
        let extra = match action {
            PerformedAction::UseAbility(ability) => rules.ability_cost(ability),
            PerformedAction::Strike(slot) => self
                .env
                .creatures()
                .equipped_item_type(entity, slot)
                .map_or(0, |item_type| rules.item_type_cost(item_type)),
            _ => 0,
        };
        base + extra
    }
}
