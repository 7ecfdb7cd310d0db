//! Derived combat stats.

use super::{StatDeltas, StatName};
use crate::config::BattleConfig;

/// The six combat-relevant stats of a combatant.
///
/// Values are signed: a loadout of poor components can push a stat below
/// its base, and the formulas in [`crate::combat`] clamp where it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub accuracy: i32,
    pub evasion: i32,
    pub crit_chance: i32,
}

impl CombatStats {
    /// Stats of a combatant with nothing equipped.
    pub const BASE: Self = Self {
        attack: BattleConfig::BASE_ATTACK,
        defense: BattleConfig::BASE_DEFENSE,
        speed: BattleConfig::BASE_SPEED,
        accuracy: BattleConfig::BASE_ACCURACY,
        evasion: BattleConfig::BASE_EVASION,
        crit_chance: BattleConfig::BASE_CRIT_CHANCE,
    };

    /// Base stats plus the combat portion of `deltas`.
    ///
    /// `Health` and `EnergyRegen` entries are ignored here; they belong to the
    /// resource maximums.
    pub fn derive(deltas: &StatDeltas) -> Self {
        let mut stats = Self::BASE;
        for (stat, amount) in deltas.non_zero() {
            if let Some(slot) = stats.slot_mut(stat) {
                *slot = slot.saturating_add(amount);
            }
        }
        stats
    }

    /// Value of a combat stat, `None` for resource stats.
    pub fn get(&self, stat: StatName) -> Option<i32> {
        match stat {
            StatName::Attack => Some(self.attack),
            StatName::Defense => Some(self.defense),
            StatName::Speed => Some(self.speed),
            StatName::Accuracy => Some(self.accuracy),
            StatName::Evasion => Some(self.evasion),
            StatName::CritChance => Some(self.crit_chance),
            StatName::Health | StatName::EnergyRegen => None,
        }
    }

    fn slot_mut(&mut self, stat: StatName) -> Option<&mut i32> {
        match stat {
            StatName::Attack => Some(&mut self.attack),
            StatName::Defense => Some(&mut self.defense),
            StatName::Speed => Some(&mut self.speed),
            StatName::Accuracy => Some(&mut self.accuracy),
            StatName::Evasion => Some(&mut self.evasion),
            StatName::CritChance => Some(&mut self.crit_chance),
            StatName::Health | StatName::EnergyRegen => None,
        }
    }

    /// Adds a flat amount to a combat stat. Returns false for resource stats.
    pub fn adjust(&mut self, stat: StatName, amount: i32) -> bool {
        match self.slot_mut(stat) {
            Some(slot) => {
                *slot = slot.saturating_add(amount);
                true
            }
            None => false,
        }
    }

    /// Multiplies a combat stat by `factor`, rounding to the nearest integer.
    ///
    /// Returns the new value, or `None` for resource stats.
    pub fn scale(&mut self, stat: StatName, factor: f64) -> Option<i32> {
        let slot = self.slot_mut(stat)?;
        *slot = (*slot as f64 * factor).round() as i32;
        Some(*slot)
    }
}

impl Default for CombatStats {
    fn default() -> Self {
        Self::BASE
    }
}
