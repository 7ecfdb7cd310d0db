//! Controller inputs and outcomes.

use crate::combat::{AttackResult, CombatError, SpecialOutcome};
use crate::error::{BattleFault, ErrorSeverity};

use super::item::ItemResult;
use super::phase::{ActionKind, Phase, Side};

/// Discrete navigation input from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum NavCommand {
    Up,
    Down,
    Confirm,
    Cancel,
}

/// What a resolved action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolvedAction {
    Attack {
        result: AttackResult,
        /// Damage actually applied, after defend mitigation.
        damage: u32,
        mitigated: bool,
    },
    /// A basic attack voided by the target's pending evasion.
    Evaded,
    Defend,
    Special(SpecialOutcome),
}

/// A completed turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub actor: Side,
    pub action: ResolvedAction,
    /// Set when this action ended the battle.
    pub winner: Option<Side>,
}

/// Result of feeding one input to the controller.
///
/// Commands never fail from the caller's point of view; every error the
/// controller hits is folded into one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    /// Input made no sense in the current phase and was absorbed silently.
    Ignored,
    /// Cursor or menu state changed; no turn was spent.
    Navigated,
    /// An action resolved and the turn passed (or the battle ended).
    Resolved(Resolution),
    /// The action was refused; logged, turn not spent.
    Rejected(CombatError),
    /// The action has nothing behind it; logged, turn not spent.
    Unavailable(ActionKind),
    /// An item request went through the item subsystem; turn not spent.
    ItemUsed(ItemResult),
}

impl CommandOutcome {
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            Self::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }

    /// True when the input spent the acting side's turn.
    pub fn consumed_turn(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Errors raised while handling a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("input not valid during {phase}")]
    InvalidNavigation { phase: Phase },

    #[error("{kind} is not available")]
    UnavailableAction { kind: ActionKind },

    #[error("battle has already ended")]
    BattleEnded,

    #[error(transparent)]
    Rejected(#[from] CombatError),
}

impl BattleFault for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidNavigation { .. } | Self::BattleEnded => ErrorSeverity::Validation,
            Self::UnavailableAction { .. } => ErrorSeverity::Recoverable,
            Self::Rejected(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidNavigation { .. } => "COMMAND_INVALID_NAVIGATION",
            Self::UnavailableAction { .. } => "COMMAND_UNAVAILABLE_ACTION",
            Self::BattleEnded => "COMMAND_BATTLE_ENDED",
            Self::Rejected(err) => err.error_code(),
        }
    }
}

impl From<CommandError> for CommandOutcome {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidNavigation { .. } | CommandError::BattleEnded => Self::Ignored,
            CommandError::UnavailableAction { kind } => Self::Unavailable(kind),
            CommandError::Rejected(err) => Self::Rejected(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_errors_are_silent() {
        let err = CommandError::InvalidNavigation {
            phase: Phase::AwaitingAction,
        };
        assert!(err.severity().is_silent());
        assert_eq!(CommandOutcome::from(err), CommandOutcome::Ignored);
        assert_eq!(
            CommandOutcome::from(CommandError::BattleEnded),
            CommandOutcome::Ignored
        );
    }

    #[test]
    fn resource_errors_are_recoverable() {
        let err = CommandError::from(CombatError::InsufficientEnergy {
            required: 20,
            available: 10,
        });
        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "COMBAT_INSUFFICIENT_ENERGY");
        assert!(matches!(
            CommandOutcome::from(err),
            CommandOutcome::Rejected(CombatError::InsufficientEnergy { .. })
        ));
    }
}
