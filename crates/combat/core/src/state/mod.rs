//! Scheduler-owned combat state.
//!
//! [`CombatState`] holds the faction mappings, turn queues, ledger, and
//! observer registry. It is owned by the composition root and mutated only
//! through [`crate::engine::CombatEngine`].
mod alignment;
mod ledger;
mod observers;
mod turn;
mod types;

pub use alignment::AlignmentStore;
pub use ledger::ActionPointLedger;
pub use observers::ObserverRegistry;
pub use turn::{Advance, QueueKind, TurnEntry, TurnQueues};
pub use types::{
    AbilityId, ActionPoints, Alignment, AttributeId, EntityId, EntityKind, EquipmentSlot,
    ItemTypeId, SimulationMode, ValueKind,
};

use crate::config::CombatConfig;
use crate::events::CombatEvent;

/// Complete state of the combat scheduler.
#[derive(Clone, Debug)]
pub struct CombatState {
    /// Configuration, read once at construction.
    pub(crate) config: CombatConfig,
    pub(crate) initialized: bool,
    pub(crate) active: bool,
    pub(crate) alignments: AlignmentStore,
    pub(crate) turns: TurnQueues,
    pub(crate) ledger: ActionPointLedger,
    pub(crate) observers: ObserverRegistry,
    pub(crate) events: Vec<CombatEvent>,
}

impl CombatState {
    pub fn new(config: CombatConfig) -> Self {
        Self {
            config,
            initialized: false,
            active: false,
            alignments: AlignmentStore::new(),
            turns: TurnQueues::new(),
            ledger: ActionPointLedger::new(),
            observers: ObserverRegistry::new(),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn alignments(&self) -> &AlignmentStore {
        &self.alignments
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Takes every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn record(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new(CombatConfig::default())
    }
}
