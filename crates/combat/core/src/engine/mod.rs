//! Combat scheduling: alignment, turn order, action points, and lifecycle.
//!
//! [`CombatEngine`] is the only writer of [`CombatState`]. It borrows the
//! state together with the collaborators for the duration of one call from
//! the host (a tick, a notification), so nothing is global and nothing
//! outlives the call. Operations call each other freely: clearing an
//! alignment can end the holder's turn, which can close the round, which can
//! end the combat, which restores the player's alignment. Every such nested
//! call sees consistent state because the turn cursor is an index and queue
//! removals wait for the round boundary.

mod alignment;
mod errors;
mod ledger;
mod lifecycle;
mod observer;
mod turns;

pub use errors::{AlignmentError, TurnError};
pub use observer::{CreatureEvent, WorldEvent};

use tracing::debug;

use crate::env::CombatEnv;
use crate::events::CombatEvent;
use crate::state::{ActionPoints, Alignment, CombatState, EntityId, EntityKind};

/// Scheduler facade over borrowed state and collaborators.
pub struct CombatEngine<'a> {
    state: &'a mut CombatState,
    env: CombatEnv<'a>,
}

impl<'a> CombatEngine<'a> {
    /// Creates an engine over the given state and collaborators.
    pub fn new(state: &'a mut CombatState, env: CombatEnv<'a>) -> Self {
        Self { state, env }
    }

    /// Installs the world observer. Must run once before any other mutation.
    pub fn init(&mut self) {
        if self.state.initialized {
            return;
        }
        self.env.world().watch_destruction(true);
        self.state.observers.set_watching_world(true);
        self.state.initialized = true;
        debug!(target: "combat::lifecycle", "scheduler initialized");
    }

    /// Ends any running combat, strips every alignment, and removes the
    /// world observer.
    pub fn shutdown(&mut self) {
        if !self.state.initialized {
            return;
        }
        if self.state.active {
            self.finish_combat(false);
        }
        for (entity, alignment) in self.state.alignments.drain() {
            self.forget(entity, alignment);
        }
        self.state.turns.clear();
        self.env.world().watch_destruction(false);
        self.state.observers.set_watching_world(false);
        self.state.initialized = false;
        debug!(target: "combat::lifecycle", "scheduler shut down");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether a combat is running.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Current round, starting at 1. Zero outside combat.
    pub fn round(&self) -> u32 {
        self.state.turns.round()
    }

    /// Side the entity fights for. `Alignment::None` for unaligned or
    /// unknown handles.
    pub fn alignment(&self, entity: EntityId) -> Alignment {
        self.state.alignments.alignment(entity)
    }

    /// Size of a faction while combat is active; 0 otherwise.
    pub fn number_of_combatants(&self, alignment: Alignment) -> usize {
        if self.state.active {
            self.state.alignments.len(alignment)
        } else {
            0
        }
    }

    /// The `position`-th (1-based) entry of the turn queue aligned to
    /// `alignment`.
    pub fn combatant(&self, alignment: Alignment, position: usize) -> Option<EntityId> {
        if position == 0 {
            return None;
        }
        self.state
            .turns
            .order()
            .filter(|&entity| self.state.alignments.alignment(entity) == alignment)
            .nth(position - 1)
    }

    /// Entity holding the turn, if combat is active.
    pub fn creature_in_turn(&self) -> Option<EntityId> {
        if self.state.active {
            self.state.turns.holder()
        } else {
            None
        }
    }

    /// Remaining points of the turn holder; 0 outside combat.
    pub fn action_points(&self) -> ActionPoints {
        if self.state.active {
            self.state.ledger.points()
        } else {
            0
        }
    }

    /// Turn queue in order, including entries pending removal.
    pub fn turn_order(&self) -> Vec<EntityId> {
        self.state.turns.order().collect()
    }

    /// Combatants that joined during the current round.
    pub fn waiting(&self) -> Vec<EntityId> {
        self.state.turns.waiting().collect()
    }

    /// Whether the entity will be dropped from the queue at the round boundary.
    pub fn is_leaving(&self, entity: EntityId) -> bool {
        self.state.turns.is_leaving(entity)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Classifies a handle that must be a combatant.
    ///
    /// # Panics
    ///
    /// Panics on a handle the world does not know, or one that is neither the
    /// player nor a creature.
    fn combatant_kind(&self, entity: EntityId) -> EntityKind {
        match self.env.world().entity_kind(entity) {
            Some(kind) if kind.is_combatant() => kind,
            Some(kind) => panic!("entity {entity} of kind {kind} cannot take part in combat"),
            None => panic!("unknown entity handle {entity}"),
        }
    }

    fn assert_initialized(&self) {
        assert!(
            self.state.initialized,
            "combat scheduler used before init()"
        );
    }

    fn install_observer(&mut self, entity: EntityId) {
        if self.state.observers.install(entity) {
            self.env.creatures().set_observed(entity, true);
        }
    }

    fn uninstall_observer(&mut self, entity: EntityId) {
        if self.state.observers.uninstall(entity) {
            self.env.creatures().set_observed(entity, false);
        }
    }

    /// Drops the visible and observable traces of a destroyed record.
    fn forget(&mut self, entity: EntityId, alignment: Alignment) {
        self.env
            .ui()
            .set_combat_selector(entity, Alignment::None);
        self.uninstall_observer(entity);
        self.state.record(CombatEvent::AlignmentChanged {
            entity,
            from: alignment,
            to: Alignment::None,
        });
    }
}
