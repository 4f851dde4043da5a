//! Simulation settings read from the environment.

use std::env;
use std::path::PathBuf;

/// Settings for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Directory holding `config.toml` and `costs.ron`. Bundled data when unset.
    pub data_dir: Option<PathBuf>,
    /// Directory for the log file. Logs go to stderr only when unset.
    pub log_dir: Option<PathBuf>,
    /// Upper bound on world ticks before the run is abandoned.
    pub max_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_dir: None,
            max_ticks: Self::DEFAULT_MAX_TICKS,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_MAX_TICKS: u32 = 200;

    /// Create configuration from environment variables.
    ///
    /// Reads `COMBAT_DATA_DIR`, `COMBAT_LOG_DIR`, and `COMBAT_MAX_TICKS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("COMBAT_DATA_DIR").ok().map(PathBuf::from);
        config.log_dir = env::var("COMBAT_LOG_DIR").ok().map(PathBuf::from);

        if let Some(ticks) = read_env::<u32>("COMBAT_MAX_TICKS") {
            config.max_ticks = ticks.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
