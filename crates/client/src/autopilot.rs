//! Navigation-level auto-pilot for the player side.
//!
//! Works only through [`NavCommand`]s, the same inputs a keyboard would
//! produce: move the cursor one step at a time, then confirm.

use std::cmp::Ordering;

use battle_core::{ActionKind, BattleSnapshot, NavCommand, Phase, Side};

/// Next input for `side`, or `None` when it is not that side's move.
///
/// Prefers the first special the side can afford and falls back to a basic
/// attack.
pub fn next_command(snapshot: &BattleSnapshot, side: Side) -> Option<NavCommand> {
    if snapshot.active_side != side {
        return None;
    }

    match snapshot.phase {
        Phase::AwaitingAction => {
            let target = if affordable_special(snapshot, side).is_some() {
                ActionKind::Special
            } else {
                ActionKind::Attack
            };
            Some(step_toward(
                action_position(snapshot.pending_action),
                action_position(target),
            ))
        }
        Phase::AbilityMenuOpen => match affordable_special(snapshot, side) {
            Some(position) => Some(step_toward(snapshot.selected_ability, position)),
            None => Some(NavCommand::Cancel),
        },
        Phase::Resolving | Phase::EnemyThinking | Phase::Ended => None,
    }
}

/// One-based menu position of the first special within the energy budget.
fn affordable_special(snapshot: &BattleSnapshot, side: Side) -> Option<usize> {
    let energy = snapshot.combatant(side).energy();
    snapshot
        .abilities
        .iter()
        .position(|ability| ability.energy_cost <= energy)
        .map(|index| index + 1)
}

fn action_position(kind: ActionKind) -> usize {
    ActionKind::ALL
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or_default()
}

fn step_toward(current: usize, target: usize) -> NavCommand {
    match current.cmp(&target) {
        Ordering::Less => NavCommand::Down,
        Ordering::Greater => NavCommand::Up,
        Ordering::Equal => NavCommand::Confirm,
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{
        BattleController, Combatant, Component, Element, FixedRoll, SlotType, StatName,
    };

    use super::*;

    fn pilot(battle: &mut BattleController) -> Vec<NavCommand> {
        let mut issued = Vec::new();
        while let Some(command) = next_command(&battle.snapshot(), Side::A) {
            issued.push(command);
            battle.handle(command);
            if issued.len() > 10 {
                break;
            }
        }
        issued
    }

    #[test]
    fn walks_the_cursor_to_an_affordable_special() {
        let caster = Combatant::new("Caster").with_components([Component::builder(
            "Ember Visor",
            SlotType::Head,
        )
        .element(Element::Fire)
        .build()]);
        let mut battle = BattleController::builder(caster, Combatant::new("Dummy"))
            .rng(FixedRoll(50))
            .build();

        let issued = pilot(&mut battle);

        assert_eq!(
            issued,
            vec![
                NavCommand::Down,
                NavCommand::Down,
                NavCommand::Confirm,
                NavCommand::Confirm
            ]
        );
        assert_eq!(battle.combatant(Side::A).energy(), 75);
        assert_eq!(battle.phase(), Phase::EnemyThinking);
    }

    #[test]
    fn attacks_when_no_special_is_affordable() {
        let drained = Combatant::new("Drained").with_components([Component::builder(
            "Cryo Core",
            SlotType::PowerCore,
        )
        .delta(StatName::EnergyRegen, -90)
        .element(Element::Fire)
        .build()]);
        let mut battle = BattleController::builder(drained, Combatant::new("Dummy"))
            .rng(FixedRoll(50))
            .build();

        assert_eq!(pilot(&mut battle), vec![NavCommand::Confirm]);
        assert_eq!(battle.phase(), Phase::EnemyThinking);
    }

    #[test]
    fn backs_out_of_a_menu_it_cannot_use() {
        let drained = Combatant::new("Drained").with_components([Component::builder(
            "Cryo Core",
            SlotType::PowerCore,
        )
        .delta(StatName::EnergyRegen, -90)
        .element(Element::Ice)
        .build()]);
        let mut battle = BattleController::builder(drained, Combatant::new("Dummy"))
            .rng(FixedRoll(50))
            .build();
        battle.open_special_menu();

        assert_eq!(next_command(&battle.snapshot(), Side::A), Some(NavCommand::Cancel));
    }

    #[test]
    fn waits_during_the_enemy_turn() {
        let mut battle = BattleController::builder(Combatant::new("A"), Combatant::new("B"))
            .rng(FixedRoll(50))
            .build();
        battle.defend();

        assert_eq!(next_command(&battle.snapshot(), Side::A), None);
    }
}
