//! Data-driven arena content and loaders.
//!
//! This crate houses the static content of the arena and the loaders for its
//! RON/TOML data files:
//! - Part catalog (`parts.ron`)
//! - Opponent roster (`opponents.ron`), assembled from catalog parts
//! - Arena rules and the player's starting robot (`arena.toml`)
//!
//! All loaders deserialize straight into battle-core types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ArenaRules, ContentFactory, OpponentLoader, PartCatalog, PartLoader, RobotSpec, RulesLoader,
};
