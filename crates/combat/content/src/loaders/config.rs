//! Scheduler configuration loader.

use std::path::Path;

use combat_core::CombatConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for scheduler configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`CombatConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        debug!(
            target: "combat::content",
            path = %path.display(),
            ordering = ?config.ordering,
            "combat config loaded"
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use combat_core::{AttributeId, OrderingPolicy};

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, CombatConfig::default());
    }

    #[test]
    fn ranked_ordering_names_its_attribute() {
        let config = ConfigLoader::parse(
            r#"
            ordering = { by_ranked_attribute = 3 }
            start_script = "scripts/start.lua"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.ordering,
            OrderingPolicy::ByRankedAttribute(AttributeId(3))
        );
        assert_eq!(config.start_script.as_deref(), Some("scripts/start.lua"));
        assert_eq!(config.end_script, None);
        assert_eq!(
            config.insufficient_points_message,
            CombatConfig::DEFAULT_INSUFFICIENT_POINTS_MESSAGE
        );
    }

    #[test]
    fn inclusion_ordering_is_a_bare_string() {
        let config = ConfigLoader::parse(r#"ordering = "by_inclusion""#).unwrap();
        assert_eq!(config.ordering, OrderingPolicy::ByInclusion);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"insufficient_points_message = "Too tired.""#).unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.insufficient_points_message, "Too tired.");
    }

    #[test]
    fn reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let error = ConfigLoader::load(&dir.path().join("config.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));
    }

    #[test]
    fn rejects_unknown_policies() {
        let error = ConfigLoader::parse(r#"ordering = "by_luck""#).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }
}
