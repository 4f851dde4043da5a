//! Turn-based combat scheduler.
//!
//! `combat-core` decides which side an entity fights for, keeps the order in
//! which combatants act, enforces each turn's action-point budget, and moves
//! the world between real-time and turn-based modes. All state lives in
//! [`state::CombatState`] and is mutated exclusively through
//! [`engine::CombatEngine`]; the world, creatures, rules, interface, and
//! scripts are reached through the traits in [`env`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod state;

pub use action::{ActionKind, PerformedAction};
pub use config::{CombatConfig, OrderingPolicy};
pub use engine::{AlignmentError, CombatEngine, CreatureEvent, TurnError, WorldEvent};
pub use env::{
    CombatEnv, CreatureOracle, RulesOracle, ScriptEvent, ScriptOracle, UiOracle, UiScreen,
    WorldOracle,
};
pub use error::{CombatError, ErrorSeverity};
pub use events::CombatEvent;
pub use state::{
    AbilityId, ActionPoints, Alignment, AttributeId, CombatState, EntityId, EntityKind,
    EquipmentSlot, ItemTypeId, QueueKind, SimulationMode, ValueKind,
};
