//! Action resolution and turn upkeep for [`BattleController`].
//!
//! Within one resolution the order is fixed: resource and health mutation,
//! then the log line, then the end-of-battle check, then the turn flip and
//! energy regeneration.

use crate::ability::AbilityDescriptor;
use crate::ai::{ActionIntent, choose_enemy_action};
use crate::combat::{AttackOutcome, AttackRolls, mitigate_defending, resolve_basic_attack, resolve_special};
use crate::config::BattleConfig;
use crate::rng::RollContext;

use super::{
    BattleController, CommandError, CommandOutcome, Phase, Resolution, ResolvedAction, Side,
};

impl BattleController {
    pub(super) fn resolve_attack(&mut self, actor: Side) -> Result<CommandOutcome, CommandError> {
        self.phase = Phase::Resolving;
        let target = actor.opponent();

        let (attacker, defender) = self.pair_mut(actor);
        if defender.consume_evasion() {
            let line = format!(
                "{} slips into the shadows and evades {}'s attack!",
                defender.name(),
                attacker.name()
            );
            self.push_log(line);
            return Ok(self.complete(actor, ResolvedAction::Evaded));
        }

        let rolls = AttackRolls::new(
            self.roll(actor, RollContext::Hit),
            self.roll(actor, RollContext::Critical),
        );
        let result = resolve_basic_attack(
            self.combatant(actor),
            self.combatant(target),
            rolls,
        );

        let (attacker, defender) = self.pair_mut(actor);
        let mitigated = result.is_hit() && defender.is_defending();
        let damage = if mitigated {
            mitigate_defending(result.damage)
        } else {
            result.damage
        };
        defender.take_damage(damage);

        let line = match result.outcome {
            AttackOutcome::Miss => format!("{} attacks {} but misses.", attacker.name(), defender.name()),
            AttackOutcome::Hit => format!(
                "{} hits {} for {damage} damage.",
                attacker.name(),
                defender.name()
            ),
            AttackOutcome::Critical => format!(
                "Critical hit! {} strikes {} for {damage} damage.",
                attacker.name(),
                defender.name()
            ),
        };
        let guard_line = mitigated.then(|| {
            format!(
                "{} was defending and halved the damage from {}.",
                defender.name(),
                result.damage
            )
        });
        self.push_log(line);
        if let Some(guard_line) = guard_line {
            self.push_log(guard_line);
        }

        Ok(self.complete(
            actor,
            ResolvedAction::Attack {
                result,
                damage,
                mitigated,
            },
        ))
    }

    pub(super) fn resolve_defend(&mut self, actor: Side) -> Result<CommandOutcome, CommandError> {
        self.phase = Phase::Resolving;
        let combatant = &mut self.combatants[actor.index()];
        combatant.set_defending(true);
        let line = format!("{} braces for impact.", combatant.name());
        self.push_log(line);
        Ok(self.complete(actor, ResolvedAction::Defend))
    }

    /// Resolves a special. On failure nothing changes, the phase included,
    /// so a player keeps the ability menu open.
    pub(super) fn resolve_special_action(
        &mut self,
        actor: Side,
        ability: AbilityDescriptor,
    ) -> Result<CommandOutcome, CommandError> {
        let roll = self.roll(actor, RollContext::Lightning);
        let (attacker, defender) = self.pair_mut(actor);

        match resolve_special(attacker, defender, &ability, roll) {
            Ok(outcome) => {
                self.phase = Phase::Resolving;
                self.push_log(outcome.message.clone());
                Ok(self.complete(actor, ResolvedAction::Special(outcome)))
            }
            Err(err) => {
                let line = format!(
                    "{} lacks the energy for {} ({}/{}).",
                    attacker.name(),
                    ability.name(),
                    attacker.energy(),
                    ability.energy_cost
                );
                self.push_log(line);
                Err(err.into())
            }
        }
    }

    pub(super) fn resolve_enemy_turn(&mut self) -> Result<CommandOutcome, CommandError> {
        let actor = self.active_side;
        let roll = self.roll(actor, RollContext::Policy);

        match choose_enemy_action(self.combatant(actor), roll) {
            ActionIntent::Attack => self.resolve_attack(actor),
            ActionIntent::Defend => self.resolve_defend(actor),
            ActionIntent::Special { ability } => self
                .resolve_special_action(actor, ability)
                .or_else(|_| self.resolve_attack(actor)),
        }
    }

    /// Closes out a resolution: end-of-battle check, turn flip, observer
    /// notifications.
    fn complete(&mut self, actor: Side, action: ResolvedAction) -> CommandOutcome {
        self.nonce += 1;
        let target = actor.opponent();

        let winner = if self.combatant(target).is_defeated() {
            self.phase = Phase::Ended;
            self.winner = Some(actor);
            let line = format!(
                "{} is destroyed! {} wins the battle.",
                self.combatant(target).name(),
                self.combatant(actor).name()
            );
            self.push_log(line);
            Some(actor)
        } else {
            self.end_turn();
            None
        };

        let resolution = Resolution {
            actor,
            action,
            winner,
        };
        let snapshot = self.snapshot();
        self.observer.on_action_resolved(&resolution, &snapshot);
        if let Some(winner) = winner {
            self.observer
                .on_battle_ended(winner, &self.combatants[target.index()]);
        }

        CommandOutcome::Resolved(resolution)
    }

    /// Hands the turn to the other side.
    ///
    /// The incoming side regenerates energy and drops its own guard. The
    /// outgoing side keeps any guard it just raised until its next turn.
    fn end_turn(&mut self) {
        let next = self.active_side.opponent();
        self.active_side = next;

        let combatant = &mut self.combatants[next.index()];
        combatant.restore_energy(BattleConfig::energy_regen(combatant.max_energy()));
        combatant.set_defending(false);

        self.phase = if next == self.config.ai_side {
            Phase::EnemyThinking
        } else {
            Phase::AwaitingAction
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::super::{
        ActionKind, BattleObserver, BattleSnapshot, ItemResult, ItemService, NavCommand,
    };
    use super::*;
    use crate::combatant::Combatant;
    use crate::component::{Component, Element, SlotType};
    use crate::rng::FixedRoll;
    use crate::stats::StatName;

    fn player() -> Combatant {
        Combatant::new("Player").with_components([
            Component::builder("Ember Visor", SlotType::Head)
                .element(Element::Fire)
                .build(),
            Component::builder("Umbra Core", SlotType::PowerCore)
                .element(Element::Shadow)
                .build(),
        ])
    }

    fn controller(roll: u32) -> BattleController {
        BattleController::builder(player(), Combatant::new("Enemy"))
            .rng(FixedRoll(roll))
            .build()
    }

    #[derive(Clone, Default)]
    struct Recorder {
        lines: Arc<Mutex<Vec<String>>>,
        resolved: Arc<Mutex<Vec<Side>>>,
        ended: Arc<Mutex<Option<(Side, String)>>>,
    }

    impl BattleObserver for Recorder {
        fn on_log(&mut self, line: &str) {
            self.lines.lock().unwrap().push(line.to_owned());
        }

        fn on_action_resolved(&mut self, resolution: &Resolution, _snapshot: &BattleSnapshot) {
            self.resolved.lock().unwrap().push(resolution.actor);
        }

        fn on_battle_ended(&mut self, winner: Side, loser: &Combatant) {
            *self.ended.lock().unwrap() = Some((winner, loser.name().to_owned()));
        }
    }

    #[test]
    fn attack_hands_turn_to_enemy() {
        let mut battle = controller(50);
        let outcome = battle.attack();

        assert!(outcome.consumed_turn());
        assert_eq!(battle.active_side(), Side::B);
        assert_eq!(battle.phase(), Phase::EnemyThinking);
        // Inputs are absorbed while the enemy thinks.
        assert_eq!(battle.handle(NavCommand::Confirm), CommandOutcome::Ignored);
    }

    #[test]
    fn enemy_turn_only_runs_while_thinking() {
        let mut battle = controller(50);
        assert_eq!(battle.run_enemy_turn(), CommandOutcome::Ignored);

        battle.attack();
        assert!(battle.run_enemy_turn().consumed_turn());
        assert_eq!(battle.phase(), Phase::AwaitingAction);
        assert_eq!(battle.run_enemy_turn(), CommandOutcome::Ignored);
    }

    #[test]
    fn defending_halves_the_next_hit() {
        let mut battle = controller(1);
        battle.defend();
        // Roll 1 passes every check: the enemy attacks and crits for
        // 10 × 1.5 × 0.9 = 13.5 → 14, halved to 7.
        let outcome = battle.run_enemy_turn();

        let Some(Resolution {
            action:
                ResolvedAction::Attack {
                    damage, mitigated, ..
                },
            ..
        }) = outcome.resolution()
        else {
            panic!("expected an attack, got {outcome:?}");
        };
        assert!(*mitigated);
        assert_eq!(*damage, 7);
        assert_eq!(battle.combatant(Side::A).health(), 93);
        assert!(!battle.combatant(Side::A).is_defending());
    }

    #[test]
    fn action_bar_navigation() {
        let mut battle = controller(50);
        assert_eq!(battle.handle(NavCommand::Up), CommandOutcome::Navigated);
        assert_eq!(battle.pending_action(), ActionKind::Attack);
        for _ in 0..5 {
            battle.handle(NavCommand::Down);
        }
        assert_eq!(battle.pending_action(), ActionKind::Item);
        assert_eq!(battle.handle(NavCommand::Cancel), CommandOutcome::Ignored);

        assert_eq!(
            battle.handle(NavCommand::Confirm),
            CommandOutcome::Unavailable(ActionKind::Item)
        );
        assert_eq!(battle.phase(), Phase::AwaitingAction);
        assert_eq!(battle.active_side(), Side::A);
    }

    #[test]
    fn menu_cancel_returns_without_effect() {
        let mut battle = controller(50);
        assert_eq!(battle.open_special_menu(), CommandOutcome::Navigated);
        assert_eq!(battle.phase(), Phase::AbilityMenuOpen);
        assert_eq!(battle.selected_ability(), 1);

        assert_eq!(battle.handle(NavCommand::Cancel), CommandOutcome::Navigated);
        assert_eq!(battle.phase(), Phase::AwaitingAction);
        assert_eq!(battle.combatant(Side::A).energy(), 100);
    }

    #[test]
    fn special_without_elements_is_unavailable() {
        let mut battle = BattleController::builder(Combatant::new("Plain"), Combatant::new("Enemy"))
            .rng(FixedRoll(50))
            .build();

        assert_eq!(
            battle.open_special_menu(),
            CommandOutcome::Unavailable(ActionKind::Special)
        );
        assert_eq!(battle.phase(), Phase::AwaitingAction);
    }

    #[test]
    fn enemy_special_spends_policy_cost() {
        let enemy = Combatant::new("Enemy").with_components([Component::builder(
            "Acid Arm",
            SlotType::LeftArm,
        )
        .element(Element::Acid)
        .build()]);
        let mut battle = BattleController::builder(player(), enemy)
            .rng(FixedRoll(95))
            .build();

        battle.defend();
        let outcome = battle.run_enemy_turn();

        assert!(matches!(
            outcome.resolution().map(|r| &r.action),
            Some(ResolvedAction::Special(_))
        ));
        // 100 - 20 spent; regen happens on the enemy's next turn.
        assert_eq!(battle.combatant(Side::B).energy(), 80);
        assert_eq!(battle.combatant(Side::A).stats().defense, 8);
    }

    #[test]
    fn item_requests_go_through_the_service() {
        struct Repair;
        impl ItemService for Repair {
            fn use_item(&mut self, name: &str, target: &mut Combatant) -> ItemResult {
                let healed = target.heal(15);
                ItemResult::success(format!("{name} restores {healed} health."))
            }
        }

        let mut battle = BattleController::builder(player(), Combatant::new("Enemy"))
            .rng(FixedRoll(1))
            .item_service(Repair)
            .build();
        battle.attack();
        battle.run_enemy_turn();
        let damaged = battle.combatant(Side::A).health();

        let outcome = battle.use_item("Repair Kit", Side::A);

        assert!(matches!(outcome, CommandOutcome::ItemUsed(ItemResult { success: true, .. })));
        assert_eq!(battle.combatant(Side::A).health(), (damaged + 15).min(100));
        assert_eq!(battle.active_side(), Side::A);
        assert_eq!(battle.log().last(), Some("Repair Kit restores 14 health."));
    }

    #[test]
    fn item_without_service_is_unavailable() {
        let mut battle = controller(50);
        assert_eq!(
            battle.use_item("Repair Kit", Side::A),
            CommandOutcome::Unavailable(ActionKind::Item)
        );
        assert_eq!(battle.active_side(), Side::A);
    }

    #[test]
    fn observer_sees_log_resolutions_and_end() {
        let recorder = Recorder::default();
        let glass = Combatant::new("Glass").with_components([Component::builder(
            "Thin Shell",
            SlotType::Torso,
        )
        .delta(StatName::Health, -95)
        .build()]);
        let mut battle = BattleController::builder(player(), glass)
            .rng(FixedRoll(1))
            .observer(recorder.clone())
            .build();

        battle.attack();

        assert!(battle.is_ended());
        assert_eq!(*recorder.resolved.lock().unwrap(), vec![Side::A]);
        assert_eq!(
            *recorder.ended.lock().unwrap(),
            Some((Side::A, "Glass".to_owned()))
        );
        assert_eq!(recorder.lines.lock().unwrap().as_slice(), battle.log().entries());
    }

    #[test]
    fn ended_battle_absorbs_everything() {
        let glass = Combatant::new("Glass").with_components([Component::builder(
            "Thin Shell",
            SlotType::Torso,
        )
        .delta(StatName::Health, -95)
        .build()]);
        let mut battle = BattleController::builder(player(), glass)
            .rng(FixedRoll(1))
            .build();
        battle.attack();
        let log_len = battle.log().len();

        for command in [NavCommand::Up, NavCommand::Down, NavCommand::Confirm, NavCommand::Cancel] {
            assert_eq!(battle.handle(command), CommandOutcome::Ignored);
        }
        assert_eq!(battle.attack(), CommandOutcome::Ignored);
        assert_eq!(battle.run_enemy_turn(), CommandOutcome::Ignored);
        assert_eq!(battle.use_item("Repair Kit", Side::A), CommandOutcome::Ignored);
        assert_eq!(battle.log().len(), log_len);

        let report = battle.finish();
        assert_eq!(report.winner, Some(Side::A));
        assert_eq!(report.loser(), Some(Side::B));
    }
}
