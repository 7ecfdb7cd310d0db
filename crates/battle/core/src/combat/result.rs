//! Basic attack resolution.

use crate::combatant::Combatant;

use super::damage::calculate_damage;
use super::hit::{check_critical, check_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Attack hit and rolled a critical.
    Critical,
}

/// The two d100 rolls a basic attack consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackRolls {
    pub hit: u32,
    pub critical: u32,
}

impl AttackRolls {
    pub const fn new(hit: u32, critical: u32) -> Self {
        Self { hit, critical }
    }
}

/// Result of a basic attack resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Damage before defend mitigation (0 on a miss).
    pub damage: u32,
}

impl AttackResult {
    pub const MISS: Self = Self {
        outcome: AttackOutcome::Miss,
        damage: 0,
    };

    pub fn is_hit(&self) -> bool {
        !matches!(self.outcome, AttackOutcome::Miss)
    }

    pub fn is_critical(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Critical)
    }
}

/// Resolve a basic attack (hit check, critical check, damage).
///
/// Neither combatant is mutated. The caller applies `damage`, halving it
/// first when the defender is defending.
///
/// # Arguments
///
/// * `attacker` - Acting combatant
/// * `defender` - Target combatant
/// * `rolls` - d100 rolls for the hit and critical checks
pub fn resolve_basic_attack(
    attacker: &Combatant,
    defender: &Combatant,
    rolls: AttackRolls,
) -> AttackResult {
    let attack = attacker.stats();
    let defense = defender.stats();

    // 1. Check if attack hits
    if !check_hit(attack.accuracy, defense.evasion, rolls.hit) {
        return AttackResult::MISS;
    }

    // 2. Critical roll only happens on a hit
    let critical = check_critical(attack.crit_chance, rolls.critical);

    // 3. Calculate damage
    let damage = calculate_damage(attack.attack, defense.defense, critical);

    AttackResult {
        outcome: if critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, SlotType};
    use crate::stats::StatName;

    fn striker() -> Combatant {
        Combatant::new("Striker").with_components([Component::builder("Piston Arm", SlotType::RightArm)
            .delta(StatName::Attack, 20)
            .delta(StatName::Accuracy, 90)
            .build()])
    }

    fn target() -> Combatant {
        Combatant::new("Target").with_components([Component::builder("Paper Torso", SlotType::Torso)
            .delta(StatName::Defense, -10)
            .delta(StatName::Evasion, -10)
            .build()])
    }

    #[test]
    fn certain_hit_without_crit() {
        let result = resolve_basic_attack(&striker(), &target(), AttackRolls::new(100, 50));
        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, 30);
    }

    #[test]
    fn crit_multiplies_damage() {
        let result = resolve_basic_attack(&striker(), &target(), AttackRolls::new(1, 1));
        assert!(result.is_critical());
        assert_eq!(result.damage, 45);
    }

    #[test]
    fn miss_deals_nothing() {
        let attacker = Combatant::new("A");
        let defender = Combatant::new("B");
        // 10 vs 10 → 50% hit chance
        let result = resolve_basic_attack(&attacker, &defender, AttackRolls::new(51, 1));
        assert_eq!(result, AttackResult::MISS);
        assert!(!result.is_hit());
    }

    #[test]
    fn resolution_does_not_mutate() {
        let attacker = striker();
        let defender = target();
        let before = defender.clone();
        resolve_basic_attack(&attacker, &defender, AttackRolls::new(1, 1));
        assert_eq!(defender, before);
    }
}
