use tracing::{debug, info, trace};

use super::CombatEngine;
use crate::config::OrderingPolicy;
use crate::events::CombatEvent;
use crate::state::{Advance, EntityId, QueueKind, ValueKind};

/// Turn advancement and round-boundary reconciliation.
impl CombatEngine<'_> {
    /// Passes the turn on from `entity`. No-op unless `entity` holds it.
    ///
    /// Entries marked as leaving are skipped. When the end of the queue is
    /// reached the round closes: leavers are dropped, late joiners are merged
    /// in, and the combat condition is checked again before the head of the
    /// queue receives the turn.
    pub fn next_turn(&mut self, entity: EntityId) {
        self.assert_initialized();
        if !self.state.active || self.state.turns.holder() != Some(entity) {
            trace!(target: "combat::turns", entity = %entity, "next_turn ignored: not the holder");
            return;
        }

        self.env.ui().set_turn_marker(entity, false);
        self.state.ledger.set_blocked(true);

        if self.state.turns.advance() == Advance::Wrapped && !self.close_round() {
            return;
        }
        self.activate_holder();
    }

    /// Removes an entity's entry, searching the waiting queue first.
    ///
    /// # Panics
    ///
    /// Panics if the entity is in neither queue.
    pub fn remove_from_turn_list(&mut self, entity: EntityId) {
        let removed = self.state.turns.remove(entity);
        assert!(
            removed.is_some(),
            "entity {entity} expected in the turn or waiting queue"
        );
        self.state.record(CombatEvent::Dequeued { entity });
    }

    /// Enables or disables action-point deduction.
    pub fn block_action_point_spend(&mut self, blocked: bool) {
        self.state.ledger.set_blocked(blocked);
    }

    /// Inserts into the turn queue following the configured policy.
    pub(super) fn enqueue(&mut self, entity: EntityId) {
        let policy = self.state.config.ordering;
        let creatures = self.env.creatures();
        let index = self.state.turns.enqueue(entity, policy, |candidate| match policy {
            OrderingPolicy::ByRankedAttribute(attribute) => {
                creatures.attribute(candidate, attribute, ValueKind::Current)
            }
            OrderingPolicy::ByInclusion => 0,
        });
        trace!(target: "combat::turns", entity = %entity, index, "queued");
    }

    /// Runs the cycle-boundary reconciliation.
    ///
    /// Returns false if the combat ended as a result.
    fn close_round(&mut self) -> bool {
        let round = self.state.turns.round();

        for entity in self.state.turns.take_leaving() {
            self.remove_from_turn_list(entity);
        }
        for entity in self.state.turns.take_waiting() {
            self.enqueue(entity);
            self.state.record(CombatEvent::Enqueued {
                entity,
                queue: QueueKind::Turn,
            });
        }
        self.state.record(CombatEvent::RoundCompleted { round });
        debug!(
            target: "combat::turns",
            round,
            combatants = self.state.turns.queue_len(),
            "round completed"
        );

        if self.state.turns.queue_len() == 0 || !self.env.world().combat_condition() {
            self.finish_combat(true);
            return false;
        }
        self.state.turns.rewind();
        true
    }

    /// Hands the turn to the entry under the cursor.
    pub(super) fn activate_holder(&mut self) {
        let Some(entity) = self.state.turns.holder() else {
            return;
        };
        let creatures = self.env.creatures();

        // A dead holder's death notification is already on its way.
        let points = if creatures.health(entity, ValueKind::Current) <= 0 {
            0
        } else {
            creatures.action_points_budget(entity)
        };
        self.state.ledger.reload(points);

        let ui = self.env.ui();
        ui.show_turn_holder(Some(entity));
        ui.show_action_points(Some(points));
        ui.set_turn_marker(entity, true);
        self.state.ledger.set_blocked(false);

        let round = self.state.turns.round();
        self.state.record(CombatEvent::TurnStarted {
            entity,
            round,
            action_points: points,
        });
        info!(target: "combat::turns", entity = %entity, round, points, "turn started");

        creatures.start_combat_turn(entity);
    }
}
