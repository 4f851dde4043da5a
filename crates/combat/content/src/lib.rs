//! Data-driven combat rules and configuration.
//!
//! This crate provides the rules database consumed by the combat scheduler
//! and loaders for its data files:
//! - Scheduler configuration (data-driven via TOML)
//! - Action, ability, and item-type prices (data-driven via RON)
//!
//! Content is consumed through `combat_core::RulesOracle` and never appears
//! in combat state.

pub mod costs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use costs::CostTable;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, CostLoader, LoadResult};
