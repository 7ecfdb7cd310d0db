//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during play: the player's robot
//! (debuffs and salvaged parts included) and run progress. Static arena
//! content is loaded by `battle-content`, not stored here.

mod error;
mod traits;
mod types;

pub mod file;
pub mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepo;
pub use traits::SaveRepository;
pub use types::{RunProgress, SaveData};
