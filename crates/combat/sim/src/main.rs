//! Headless combat simulation.
//!
//! Composition root that assembles:
//! 1. Content (configuration and price list) via `ContentFactory`
//! 2. An in-memory world, creature, interface, and script host
//! 3. The combat scheduler, driven tick by tick through a scripted skirmish
//!
//! # Environment
//!
//! - `COMBAT_DATA_DIR`: directory with `config.toml` and `costs.ron`
//! - `COMBAT_LOG_DIR`: also write logs to `combat-sim.log` in this directory
//! - `COMBAT_MAX_TICKS`: tick budget for the run
//! - `RUST_LOG`: log filter, `info` by default

mod config;
mod host;
mod skirmish;

use anyhow::Result;
use combat_content::ContentFactory;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::SimConfig;
use crate::skirmish::Skirmish;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = SimConfig::from_env();
    let _guard = setup_logging(&config)?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir.clone()),
        None => ContentFactory::bundled(),
    };
    tracing::info!("Loading content from {}", factory.data_dir().display());
    let combat_config = factory.load_config()?;
    let costs = factory.load_costs()?;

    let mut skirmish = Skirmish::new(combat_config, costs);
    let outcome = skirmish.run(config.max_ticks)?;

    match outcome.rounds {
        Some(rounds) => tracing::info!(
            ticks = outcome.ticks,
            rounds,
            player_alive = outcome.player_alive,
            survivors = outcome.survivors.len(),
            "Skirmish finished"
        ),
        None => tracing::warn!(
            ticks = outcome.ticks,
            "Skirmish did not finish within the tick budget"
        ),
    }

    Ok(())
}

/// Setup logging to stderr and, when a log directory is configured, to a file.
///
/// The returned guard flushes the file writer when dropped.
fn setup_logging(config: &SimConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "combat-sim.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = &config.log_dir {
        tracing::info!("Log file: {}/combat-sim.log", dir.display());
    }

    Ok(guard)
}
