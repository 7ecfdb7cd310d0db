//! Content factory for loading arena content from a data directory.

use std::path::{Path, PathBuf};

use battle_core::Combatant;

use crate::loaders::{
    ArenaRules, LoadResult, OpponentLoader, PartCatalog, PartLoader, RulesLoader,
};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── arena.toml
/// ├── parts.ron
/// └── opponents.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load arena rules from `arena.toml`.
    pub fn load_rules(&self) -> LoadResult<ArenaRules> {
        RulesLoader::load(&self.data_dir.join("arena.toml"))
    }

    /// Load the part catalog from `parts.ron`.
    pub fn load_parts(&self) -> LoadResult<PartCatalog> {
        PartLoader::load(&self.data_dir.join("parts.ron"))
    }

    /// Load and assemble the opponent roster from `opponents.ron`.
    pub fn load_opponents(&self, catalog: &PartCatalog) -> LoadResult<Vec<Combatant>> {
        OpponentLoader::load(&self.data_dir.join("opponents.ron"), catalog)
    }

    /// Assemble the player's starting robot described in `arena.toml`.
    pub fn load_player(&self, rules: &ArenaRules, catalog: &PartCatalog) -> LoadResult<Combatant> {
        rules.player.assemble(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
