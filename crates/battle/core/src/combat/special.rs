//! Special ability resolution.
//!
//! Every special deals `attack × power` scaled per element; defense does not
//! apply. The element then decides the side effect:
//!
//! | Element   | Damage                         | Side effect                      |
//! |-----------|--------------------------------|----------------------------------|
//! | Fire      | `round(base × 1.2)`            | none                             |
//! | Ice       | `round(base)`                  | target speed × 0.7 (stacking)    |
//! | Lightning | `round(base × 2.0)` on 40% roll | none                            |
//! | Acid      | `round(base)`                  | target defense × 0.8 (stacking)  |
//! | Shadow    | `round(base)`                  | attacker evades the next attack  |

use crate::ability::AbilityDescriptor;
use crate::combatant::Combatant;
use crate::component::Element;
use crate::config::BattleConfig;
use crate::stats::StatName;

use super::CombatError;
use super::damage::round_damage;

/// Lasting effect of a special beyond its damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideEffect {
    /// Target speed was scaled down to the given value.
    Slowed { speed: i32 },
    /// Target defense was scaled down to the given value.
    Corroded { defense: i32 },
    /// Attacker will evade the next basic attack against it.
    Evasion,
}

/// Result of a successful special.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialOutcome {
    pub ability: AbilityDescriptor,
    pub damage: u32,
    /// Lightning surge landed.
    pub critical: bool,
    pub side_effect: Option<SideEffect>,
    pub message: String,
}

/// Resolve a special ability.
///
/// On success the attacker's energy is reduced by the ability cost, damage
/// is applied to the defender, and the element's side effect is applied.
/// On failure neither combatant is touched.
///
/// # Arguments
///
/// * `lightning_roll` - d100 roll for the Lightning surge; ignored by other
///   elements
pub fn resolve_special(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    ability: &AbilityDescriptor,
    lightning_roll: u32,
) -> Result<SpecialOutcome, CombatError> {
    attacker.spend_energy(ability.energy_cost)?;

    let base = f64::from(attacker.stats().attack) * ability.power_multiplier();
    let mut critical = false;
    let mut side_effect = None;

    let damage = match ability.element {
        Element::Fire => round_damage(base * BattleConfig::FIRE_MULTIPLIER),
        Element::Ice => {
            let speed = defender.scale_stat(StatName::Speed, BattleConfig::ICE_SPEED_FACTOR);
            side_effect = speed.map(|speed| SideEffect::Slowed { speed });
            round_damage(base)
        }
        Element::Lightning => {
            critical = lightning_roll <= BattleConfig::LIGHTNING_CRIT_PERCENT;
            let multiplier = if critical {
                BattleConfig::LIGHTNING_CRIT_MULTIPLIER
            } else {
                1.0
            };
            round_damage(base * multiplier)
        }
        Element::Acid => {
            let defense = defender.scale_stat(StatName::Defense, BattleConfig::ACID_DEFENSE_FACTOR);
            side_effect = defense.map(|defense| SideEffect::Corroded { defense });
            round_damage(base)
        }
        Element::Shadow => {
            attacker.set_will_evade_next(true);
            side_effect = Some(SideEffect::Evasion);
            round_damage(base)
        }
    };

    defender.take_damage(damage);

    let message = describe(attacker.name(), defender.name(), ability, damage, critical, side_effect);

    Ok(SpecialOutcome {
        ability: *ability,
        damage,
        critical,
        side_effect,
        message,
    })
}

fn describe(
    attacker: &str,
    defender: &str,
    ability: &AbilityDescriptor,
    damage: u32,
    critical: bool,
    side_effect: Option<SideEffect>,
) -> String {
    let mut message = format!("{attacker} uses {} on {defender} for {damage} damage", ability.name());
    if critical {
        message.push_str(" (surge!)");
    }
    match side_effect {
        Some(SideEffect::Slowed { .. }) => message.push_str(", slowing it"),
        Some(SideEffect::Corroded { .. }) => message.push_str(", corroding its armor"),
        Some(SideEffect::Evasion) => message.push_str(" and fades into the shadows"),
        None => {}
    }
    message.push('.');
    message
}
