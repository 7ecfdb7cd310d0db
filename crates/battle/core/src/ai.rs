//! Enemy action policy.
//!
//! Stateless: one d100 roll in, one intent out. The controller draws the roll
//! and carries out the intent, including the evasion check against the
//! target.

use crate::ability::AbilityDescriptor;
use crate::combatant::Combatant;
use crate::config::BattleConfig;

/// What the enemy decided to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionIntent {
    Attack,
    Defend,
    /// Special with its cost already overridden to the policy cost.
    Special { ability: AbilityDescriptor },
}

/// Pick the enemy's action from a policy roll.
///
/// | Roll    | Intent                                                        |
/// |---------|---------------------------------------------------------------|
/// | 1-70    | Attack                                                        |
/// | 71-90   | Defend                                                        |
/// | 91-100  | Special with the first element in slot order, costing 20,     |
/// |         | if energy allows; otherwise Attack                            |
pub fn choose_enemy_action(actor: &Combatant, roll: u32) -> ActionIntent {
    if roll <= BattleConfig::AI_ATTACK_THRESHOLD {
        return ActionIntent::Attack;
    }
    if roll <= BattleConfig::AI_DEFEND_THRESHOLD {
        return ActionIntent::Defend;
    }

    if actor.energy() < BattleConfig::AI_SPECIAL_COST {
        return ActionIntent::Attack;
    }
    match actor.primary_element() {
        Some(element) => ActionIntent::Special {
            ability: AbilityDescriptor::for_element(element)
                .with_energy_cost(BattleConfig::AI_SPECIAL_COST),
        },
        None => ActionIntent::Attack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, Element, SlotType};

    fn elemental() -> Combatant {
        Combatant::new("Sparky").with_components([
            Component::builder("Coil Arm", SlotType::RightArm)
                .element(Element::Lightning)
                .build(),
            Component::builder("Fire Visor", SlotType::Head)
                .element(Element::Fire)
                .build(),
        ])
    }

    #[test]
    fn roll_bands() {
        let bot = elemental();
        assert_eq!(choose_enemy_action(&bot, 1), ActionIntent::Attack);
        assert_eq!(choose_enemy_action(&bot, 70), ActionIntent::Attack);
        assert_eq!(choose_enemy_action(&bot, 71), ActionIntent::Defend);
        assert_eq!(choose_enemy_action(&bot, 90), ActionIntent::Defend);
    }

    #[test]
    fn special_uses_first_element_at_fixed_cost() {
        let intent = choose_enemy_action(&elemental(), 95);
        let ActionIntent::Special { ability } = intent else {
            panic!("expected special, got {intent:?}");
        };
        // Head comes before RightArm in slot order.
        assert_eq!(ability.element, Element::Fire);
        assert_eq!(ability.energy_cost, 20);
    }

    #[test]
    fn special_falls_back_to_attack() {
        let plain = Combatant::new("Plain");
        assert_eq!(choose_enemy_action(&plain, 100), ActionIntent::Attack);

        let mut drained = elemental();
        drained.spend_energy(81).unwrap();
        assert_eq!(choose_enemy_action(&drained, 100), ActionIntent::Attack);
    }
}
