//! Entry points for notifications from the world, creatures, and scripts.

use tracing::{debug, trace};

use super::CombatEngine;
use crate::action::PerformedAction;
use crate::env::ScriptEvent;
use crate::state::{Alignment, EntityId, EntityKind};

/// Notifications published by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    EntityDestroyed(EntityId),
}

/// Notifications published by an observed creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreatureEvent {
    Died,
    ActionPerformed(PerformedAction),
    InsufficientActionPoints,
}

impl CombatEngine<'_> {
    /// Routes a world notification. A destroyed combatant leaves combat as
    /// if it had been unaligned, whether or not the world still knows it.
    pub fn on_world_event(&mut self, event: WorldEvent) {
        if !self.state.observers.is_watching_world() {
            trace!(target: "combat::observer", ?event, "world observer not installed");
            return;
        }

        match event {
            WorldEvent::EntityDestroyed(entity) => {
                // The world may have forgotten the handle already; only
                // combatants were ever aligned.
                let alignment = self.state.alignments.alignment(entity);
                if !alignment.is_none() {
                    debug!(target: "combat::observer", entity = %entity, "aligned entity destroyed");
                    self.leave(entity, alignment);
                }
            }
        }
    }

    /// Routes a notification from a creature the scheduler observes.
    ///
    /// Notifications from creatures that are not observed are dropped.
    pub fn on_creature_event(&mut self, entity: EntityId, event: CreatureEvent) {
        if !self.state.observers.is_observing(entity) {
            trace!(target: "combat::observer", entity = %entity, ?event, "creature not observed");
            return;
        }

        match event {
            CreatureEvent::Died => self.on_death(entity),
            CreatureEvent::ActionPerformed(action) => self.on_action_performed(entity, action),
            CreatureEvent::InsufficientActionPoints => self.on_insufficient_action_points(entity),
        }
    }

    /// Accepts completion of a combat script. No scheduler-side effect.
    pub fn on_script_event(&mut self, event: ScriptEvent) {
        trace!(target: "combat::observer", %event, "combat script finished");
    }

    fn on_death(&mut self, entity: EntityId) {
        debug!(target: "combat::observer", entity = %entity, "combatant died");
        if self.state.active && self.combatant_kind(entity) == EntityKind::Player {
            self.finish_combat(false);
            return;
        }
        let _ = self.set_alignment(entity, Alignment::None);
    }
}
