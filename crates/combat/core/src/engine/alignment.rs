//! Faction membership changes.

use tracing::{debug, info, trace};

use super::{AlignmentError, CombatEngine};
use crate::events::CombatEvent;
use crate::state::{Alignment, EntityId, EntityKind, QueueKind};

impl CombatEngine<'_> {
    /// Moves `entity` to `alignment`, or out of combat for `Alignment::None`.
    ///
    /// A creature other than the player can only join if some other aligned
    /// combatant is within its interaction range; otherwise the request is
    /// refused with [`AlignmentError::NoAllyInRange`] and nothing changes.
    ///
    /// Joining out of combat places the entity in the turn queue; joining
    /// mid-combat places it in the waiting queue until the round ends.
    /// Leaving mid-combat only marks the entity; its queue entry is dropped
    /// at the round boundary. If it holds the turn, the turn passes on.
    ///
    /// # Panics
    ///
    /// Panics if the scheduler is not initialized or the handle is not a
    /// player or creature.
    pub fn set_alignment(
        &mut self,
        entity: EntityId,
        alignment: Alignment,
    ) -> Result<(), AlignmentError> {
        self.assert_initialized();
        let kind = self.combatant_kind(entity);
        let previous = self.state.alignments.alignment(entity);

        if previous == alignment {
            trace!(target: "combat::alignment", entity = %entity, %alignment, "alignment unchanged");
            return Ok(());
        }

        if alignment.is_none() {
            self.leave(entity, previous);
            return Ok(());
        }

        if kind != EntityKind::Player && !self.has_aligned_in_range(entity) {
            debug!(
                target: "combat::alignment",
                entity = %entity,
                %alignment,
                "alignment refused: nobody aligned in range"
            );
            return Err(AlignmentError::NoAllyInRange { entity });
        }

        if !previous.is_none() {
            self.state.alignments.remove(entity);
        }
        self.state.alignments.insert(entity, alignment);
        self.env.ui().set_combat_selector(entity, alignment);
        self.state.record(CombatEvent::AlignmentChanged {
            entity,
            from: previous,
            to: alignment,
        });
        info!(
            target: "combat::alignment",
            entity = %entity,
            from = %previous,
            to = %alignment,
            "alignment changed"
        );

        if previous.is_none() {
            self.install_observer(entity);
            self.join_queue(entity);
        }
        Ok(())
    }

    /// Aligns `entity` with the side `friend` is on.
    pub fn set_alignment_with(
        &mut self,
        entity: EntityId,
        friend: EntityId,
    ) -> Result<(), AlignmentError> {
        let alignment = self.state.alignments.alignment(friend);
        if alignment.is_none() {
            return Err(AlignmentError::ReferenceUnaligned { reference: friend });
        }
        self.set_alignment(entity, alignment)
    }

    /// Aligns `entity` against the side `enemy` is on.
    pub fn set_alignment_against(
        &mut self,
        entity: EntityId,
        enemy: EntityId,
    ) -> Result<(), AlignmentError> {
        let alignment = self.state.alignments.alignment(enemy);
        if alignment.is_none() {
            return Err(AlignmentError::ReferenceUnaligned { reference: enemy });
        }
        self.set_alignment(entity, alignment.opposite())
    }

    fn has_aligned_in_range(&self, entity: EntityId) -> bool {
        let creatures = self.env.creatures();
        self.state
            .alignments
            .members()
            .into_iter()
            .any(|(other, _)| other != entity && creatures.is_in_range(entity, other))
    }

    /// Queues a freshly aligned entity.
    fn join_queue(&mut self, entity: EntityId) {
        // Rejoining before the round closed: the old entry is still in place.
        if self.state.turns.unmark_leaving(entity) {
            debug!(target: "combat::turns", entity = %entity, "pending removal cancelled");
            return;
        }

        let queue = if self.state.active {
            self.state.turns.enqueue_waiting(entity);
            QueueKind::Waiting
        } else {
            self.enqueue(entity);
            QueueKind::Turn
        };
        self.state.record(CombatEvent::Enqueued { entity, queue });
    }

    pub(super) fn leave(&mut self, entity: EntityId, previous: Alignment) {
        if previous.is_none() {
            trace!(target: "combat::alignment", entity = %entity, "already unaligned");
            return;
        }

        self.state.alignments.remove(entity);
        self.forget(entity, previous);
        info!(
            target: "combat::alignment",
            entity = %entity,
            from = %previous,
            "left combat"
        );

        if !self.state.active {
            self.remove_from_turn_list(entity);
            return;
        }

        self.state.turns.mark_leaving(entity);
        if self.state.turns.holder() == Some(entity) {
            self.next_turn(entity);
        }
    }
}
