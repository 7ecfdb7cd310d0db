//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors live next to the code that raises them:
//! [`CombatError`](crate::combat::CombatError) in the resolver and
//! [`CommandError`](crate::battle::CommandError) in the battle controller.
//! This module provides the shared classification both implement.
//!
//! No error raised by the core is fatal. The controller turns every error into
//! a [`CommandOutcome`](crate::battle::CommandOutcome) according to its
//! severity, so callers never see an `Err` from a battle command.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the turn is not consumed and the player may try
    /// something else.
    ///
    /// Examples: not enough energy for a special, item subsystem unavailable
    Recoverable,

    /// Validation error - the input makes no sense in the current phase and is
    /// absorbed without a log entry.
    ///
    /// Examples: `Cancel` outside a menu, any command after the battle ended
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - battle state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the error should be absorbed without user feedback.
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all battle-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
