//! Sides, phases and the action bar.

/// One of the two parties in a battle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Position of this side in per-side arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Battle state machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Waiting for the controlled side to pick an action.
    AwaitingAction,
    /// Ability menu is open; the turn has not been spent yet.
    AbilityMenuOpen,
    /// An action is being applied.
    Resolving,
    /// The enemy's turn is due once the thinking delay elapses.
    EnemyThinking,
    /// Terminal. Every further input is absorbed.
    Ended,
}

/// Entries of the action bar, in display order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ActionKind {
    #[default]
    Attack,
    Defend,
    Special,
    Item,
}

impl ActionKind {
    pub const ALL: [Self; 4] = [Self::Attack, Self::Defend, Self::Special, Self::Item];

    /// Entry above this one, clamped at the top.
    pub const fn previous(self) -> Self {
        match self {
            Self::Attack | Self::Defend => Self::Attack,
            Self::Special => Self::Defend,
            Self::Item => Self::Special,
        }
    }

    /// Entry below this one, clamped at the bottom.
    pub const fn next(self) -> Self {
        match self {
            Self::Attack => Self::Defend,
            Self::Defend => Self::Special,
            Self::Special | Self::Item => Self::Item,
        }
    }
}
