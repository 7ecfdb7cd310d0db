//! Combat resolution.
//!
//! Basic attacks are resolved by pure functions that take their d100 rolls
//! as arguments and return the outcome without touching either combatant;
//! the battle controller applies the damage (after defend mitigation).
//! Specials spend energy and apply damage and side effects directly, since
//! they have no caller-side mitigation step.
//!
//! # Core Functions
//!
//! - `resolve_basic_attack`: hit check + critical check + damage
//! - `resolve_special`: energy check, elemental damage and side effect
//! - `calculate_hit_chance`: accuracy vs evasion ratio
//! - `calculate_damage`: attack scaled by critical and defense

pub mod damage;
pub mod hit;
pub mod result;
pub mod special;

pub use damage::{apply_damage, calculate_damage, mitigate_defending, round_damage};
pub use hit::{calculate_hit_chance, check_critical, check_hit};
pub use result::{AttackOutcome, AttackResult, AttackRolls, resolve_basic_attack};
pub use special::{SideEffect, SpecialOutcome, resolve_special};

use crate::error::{BattleFault, ErrorSeverity};

/// Errors raised while resolving an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("not enough energy: {required} required, {available} available")]
    InsufficientEnergy { required: u32, available: u32 },
}

impl BattleFault for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientEnergy { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientEnergy { .. } => "COMBAT_INSUFFICIENT_ENERGY",
        }
    }
}
