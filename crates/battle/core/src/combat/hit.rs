//! Hit chance and critical checks.

/// Calculate hit chance from the attacker's accuracy and the defender's
/// evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = floor(100 × accuracy / (accuracy + evasion))
/// clamped to [0, 100]
/// ```
///
/// When `accuracy + evasion ≤ 0` the ratio is undefined; any positive
/// accuracy then always hits and anything else never does.
pub fn calculate_hit_chance(accuracy: i32, evasion: i32) -> u32 {
    let accuracy = i64::from(accuracy);
    let total = accuracy + i64::from(evasion);

    if total <= 0 {
        return if accuracy > 0 { 100 } else { 0 };
    }

    (100 * accuracy).div_euclid(total).clamp(0, 100) as u32
}

/// Check if an attack hits.
///
/// # Arguments
///
/// * `accuracy` - Attacker's accuracy stat
/// * `evasion` - Defender's evasion stat
/// * `roll` - d100 roll (1-100)
pub fn check_hit(accuracy: i32, evasion: i32, roll: u32) -> bool {
    roll <= calculate_hit_chance(accuracy, evasion)
}

/// Check if a landed hit is critical. A non-positive crit chance never crits.
pub fn check_critical(crit_chance: i32, roll: u32) -> bool {
    crit_chance > 0 && i64::from(roll) <= i64::from(crit_chance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_chance_is_accuracy_ratio() {
        assert_eq!(calculate_hit_chance(10, 10), 50);
        assert_eq!(calculate_hit_chance(100, 0), 100);
        assert_eq!(calculate_hit_chance(20, 10), 66);
        assert_eq!(calculate_hit_chance(0, 10), 0);
    }

    #[test]
    fn degenerate_stats_are_clamped() {
        assert_eq!(calculate_hit_chance(0, 0), 0);
        assert_eq!(calculate_hit_chance(5, -5), 100);
        assert_eq!(calculate_hit_chance(15, -5), 100);
        assert_eq!(calculate_hit_chance(-5, 20), 0);
    }

    #[test]
    fn roll_must_not_exceed_chance() {
        assert!(check_hit(10, 10, 50));
        assert!(!check_hit(10, 10, 51));
        assert!(check_hit(100, 0, 100));
    }

    #[test]
    fn critical_needs_positive_chance() {
        assert!(check_critical(5, 5));
        assert!(!check_critical(5, 6));
        assert!(!check_critical(0, 1));
        assert!(!check_critical(-3, 1));
    }
}
