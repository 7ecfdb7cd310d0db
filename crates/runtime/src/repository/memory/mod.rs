//! In-memory repository implementations for testing and development.

mod save;

pub use save::InMemorySaveRepo;
