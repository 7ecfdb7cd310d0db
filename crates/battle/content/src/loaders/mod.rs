//! Content loaders for reading arena data from files.
//!
//! Each loader reads one RON/TOML file into battle-core types. The
//! [`ContentFactory`] ties them to a data directory.

pub mod factory;
pub mod opponents;
pub mod parts;
pub mod rules;

pub use factory::ContentFactory;
pub use opponents::{OpponentLoader, RobotSpec};
pub use parts::{PartCatalog, PartLoader};
pub use rules::{ArenaRules, RulesLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
