//! Cost table loader.
//!
//! Loads action, ability, and item-type prices from RON data files.

use std::collections::HashSet;
use std::path::Path;

use combat_core::{AbilityId, ActionKind, ActionPoints, ItemTypeId};
use serde::Deserialize;
use tracing::debug;

use crate::costs::CostTable;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct CostsFile {
    #[serde(default)]
    actions: Vec<ActionPrice>,
    #[serde(default)]
    abilities: Vec<IdPrice>,
    #[serde(default)]
    item_types: Vec<IdPrice>,
}

#[derive(Debug, Deserialize)]
struct ActionPrice {
    kind: ActionKind,
    cost: ActionPoints,
}

#[derive(Debug, Deserialize)]
struct IdPrice {
    id: u16,
    cost: ActionPoints,
}

/// Loader for the price list from RON files.
pub struct CostLoader;

impl CostLoader {
    /// Load a cost table from a RON file.
    ///
    /// Each action kind, ability, and item type may be priced at most once.
    pub fn load(path: &Path) -> LoadResult<CostTable> {
        let content = read_file(path)?;
        let table = Self::parse(&content)?;
        debug!(
            target: "combat::content",
            path = %path.display(),
            actions = table.priced_actions(),
            "cost table loaded"
        );
        Ok(table)
    }

    pub fn parse(content: &str) -> LoadResult<CostTable> {
        let file: CostsFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse costs RON: {}", e))?;

        let mut table = CostTable::new();

        let mut seen = HashSet::new();
        for price in file.actions {
            if !seen.insert(price.kind) {
                anyhow::bail!("Action {} is priced twice", price.kind);
            }
            table = table.with_action(price.kind, price.cost);
        }

        let mut seen = HashSet::new();
        for price in file.abilities {
            if !seen.insert(price.id) {
                anyhow::bail!("Ability {} is priced twice", price.id);
            }
            table = table.with_ability(AbilityId(price.id), price.cost);
        }

        let mut seen = HashSet::new();
        for price in file.item_types {
            if !seen.insert(price.id) {
                anyhow::bail!("Item type {} is priced twice", price.id);
            }
            table = table.with_item_type(ItemTypeId(price.id), price.cost);
        }

        Ok(table)
    }
}
