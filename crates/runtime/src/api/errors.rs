//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the session worker, repositories, and content loading
//! so clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("battle session was abandoned")]
    SessionAbandoned,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires both combatants before building")]
    MissingCombatants,

    /// Content loading failed; the message carries the offending file.
    #[error(transparent)]
    Content(anyhow::Error),

    #[error("arena run has no opponent named {0}")]
    UnknownOpponent(String),
}
