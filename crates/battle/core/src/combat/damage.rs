//! Damage calculation and application.

use crate::config::BattleConfig;

/// Round a raw damage value to whole points, flooring at 0.
pub fn round_damage(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX for oversized values.
    raw.round() as u32
}

/// Calculate basic attack damage.
///
/// # Formula
///
/// ```text
/// damage = round(attack × (critical ? 1.5 : 1.0) × (1 − defense / 100))
/// floored at 0
/// ```
///
/// Defense above 100 turns the factor negative, which floors to 0.
pub fn calculate_damage(attack: i32, defense: i32, is_critical: bool) -> u32 {
    let multiplier = if is_critical {
        BattleConfig::CRIT_MULTIPLIER
    } else {
        1.0
    };
    let reduction = 1.0 - f64::from(defense) / 100.0;
    round_damage(f64::from(attack) * multiplier * reduction)
}

/// Halve damage against a defending target (integer floor).
pub const fn mitigate_defending(damage: u32) -> u32 {
    damage / 2
}

/// Apply damage to current health.
///
/// Returns the new health value, clamped to 0.
pub const fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}
