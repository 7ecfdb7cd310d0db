//! Async runtime for arena battles.
//!
//! This crate wraps the synchronous [`battle_core::BattleController`] in a
//! tokio session worker and adds what a running game needs around it: the
//! enemy "thinking" delay as a cancellable timer, a topic event bus, save
//! repositories, and post-battle rewards. Consumers embed [`Runtime`] to run
//! one battle and drive it through [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus and the observer bridge
//! - [`repository`] persists the player's robot and run progress
//! - [`arena`] and [`rewards`] carry results from one battle to the next
//! - `workers` keeps the session task internal to the crate
pub mod api;
pub mod arena;
pub mod events;
pub mod repository;
pub mod rewards;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, SessionHandle};
pub use arena::{ArenaRun, BattleRecord};
pub use events::{BattleEvent, Event, EventBridge, EventBus, LogEvent, SessionEvent, Topic};
pub use repository::{
    FileSaveRepository, InMemorySaveRepo, RepositoryError, RunProgress, SaveData, SaveRepository,
};
pub use rewards::salvage;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
