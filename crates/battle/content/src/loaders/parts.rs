//! Part catalog loader.

use std::path::Path;

use battle_core::{Component, SlotType};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Every component that can appear in the arena, keyed by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartCatalog {
    pub parts: Vec<Component>,
}

impl PartCatalog {
    pub fn find(&self, name: &str) -> Option<&Component> {
        self.parts.iter().find(|part| part.name() == name)
    }

    pub fn for_slot(&self, slot: SlotType) -> impl Iterator<Item = &Component> {
        self.parts.iter().filter(move |part| part.slot() == slot)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Loader for the part catalog from RON files.
pub struct PartLoader;

impl PartLoader {
    /// Load the part catalog from a RON file.
    ///
    /// Part names must be unique; a duplicate is rejected rather than
    /// shadowed.
    pub fn load(path: &Path) -> LoadResult<PartCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PartCatalog> {
        let catalog: PartCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse part catalog RON: {}", e))?;

        for (index, part) in catalog.parts.iter().enumerate() {
            if catalog.parts[..index]
                .iter()
                .any(|earlier| earlier.name() == part.name())
            {
                anyhow::bail!("Duplicate part name in catalog: {}", part.name());
            }
        }

        Ok(catalog)
    }
}
