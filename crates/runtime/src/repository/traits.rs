//! Repository contracts for saving and loading run progress.

use super::error::Result;
use super::types::SaveData;

/// Repository for save-game persistence.
///
/// Saves are keyed by a slot name (usually the session id). A missing slot
/// loads as `None` rather than an error.
pub trait SaveRepository: Send + Sync {
    /// Save (or overwrite) a slot
    fn save(&self, slot: &str, data: &SaveData) -> Result<()>;

    /// Load a slot
    fn load(&self, slot: &str) -> Result<Option<SaveData>>;

    /// Check if a slot exists
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slots, sorted by name
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
