//! Invariants checked over many generated loadouts and seeded battles.

use battle_core::combat::calculate_damage;
use battle_core::{
    AbilityDescriptor, AttackRolls, BattleConfig, BattleController, CombatStats, Combatant,
    Component, Element, NavCommand, PcgRng, RngOracle, RollContext, SlotType, StatName,
    compute_seed, resolve_basic_attack, resolve_special,
};

const SLOTS: [SlotType; 7] = [
    SlotType::Head,
    SlotType::Torso,
    SlotType::LeftArm,
    SlotType::RightArm,
    SlotType::LeftLeg,
    SlotType::RightLeg,
    SlotType::PowerCore,
];

const STATS: [StatName; 8] = [
    StatName::Health,
    StatName::EnergyRegen,
    StatName::Attack,
    StatName::Defense,
    StatName::Speed,
    StatName::Accuracy,
    StatName::Evasion,
    StatName::CritChance,
];

const ELEMENTS: [Element; 5] = [
    Element::Fire,
    Element::Ice,
    Element::Lightning,
    Element::Acid,
    Element::Shadow,
];

/// Small deterministic generator for test inputs.
struct Gen {
    seed: u64,
    nonce: u64,
}

impl Gen {
    fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.nonce += 1;
        PcgRng.next_u32(compute_seed(self.seed, self.nonce, 0, RollContext::Policy)) % bound
    }

    fn range(&mut self, low: i32, high: i32) -> i32 {
        low + self.below((high - low + 1) as u32) as i32
    }
}

fn random_loadout(rng: &mut Gen, name: &str) -> (Combatant, Vec<Component>) {
    let mut equipped = Vec::new();
    for slot in SLOTS {
        if rng.below(4) == 0 {
            continue;
        }
        let mut builder = Component::builder(format!("{name} {slot}"), slot);
        for stat in STATS {
            if rng.below(3) == 0 {
                builder = builder.delta(stat, rng.range(-30, 40));
            }
        }
        if rng.below(3) == 0 {
            builder = builder.element(ELEMENTS[rng.below(5) as usize]);
        }
        equipped.push(builder.build());
    }
    let combatant = Combatant::new(name).with_components(equipped.clone());
    (combatant, equipped)
}

fn assert_in_bounds(combatant: &Combatant) {
    assert!(combatant.health() <= combatant.max_health());
    assert!(combatant.energy() <= combatant.max_energy());
}

#[test]
fn derived_stats_equal_base_plus_deltas() {
    for seed in 0..200 {
        let mut rng = Gen::new(seed);
        let (combatant, equipped) = random_loadout(&mut rng, "Gen");

        let sum = |stat: StatName| -> i32 { equipped.iter().map(|c| c.delta(stat)).sum() };
        let stats = combatant.stats();

        assert_eq!(stats.attack, CombatStats::BASE.attack + sum(StatName::Attack));
        assert_eq!(stats.defense, CombatStats::BASE.defense + sum(StatName::Defense));
        assert_eq!(stats.speed, CombatStats::BASE.speed + sum(StatName::Speed));
        assert_eq!(stats.accuracy, CombatStats::BASE.accuracy + sum(StatName::Accuracy));
        assert_eq!(stats.evasion, CombatStats::BASE.evasion + sum(StatName::Evasion));
        assert_eq!(
            stats.crit_chance,
            CombatStats::BASE.crit_chance + sum(StatName::CritChance)
        );

        let max_health = (BattleConfig::BASE_HEALTH as i32 + sum(StatName::Health)).max(1);
        let max_energy = (BattleConfig::BASE_ENERGY as i32 + sum(StatName::EnergyRegen)).max(1);
        assert_eq!(combatant.max_health() as i32, max_health);
        assert_eq!(combatant.max_energy() as i32, max_energy);
        assert_in_bounds(&combatant);
    }
}

#[test]
fn damage_is_non_negative_and_crits_never_hurt_less() {
    for attack in (-20..=80).step_by(3) {
        for defense in (-40..=160).step_by(7) {
            let normal = calculate_damage(attack, defense, false);
            let critical = calculate_damage(attack, defense, true);
            assert!(critical >= normal, "attack {attack} defense {defense}");
        }
    }

    for seed in 0..100 {
        let mut rng = Gen::new(seed);
        let (attacker, _) = random_loadout(&mut rng, "Attacker");
        let (defender, _) = random_loadout(&mut rng, "Defender");

        let normal = resolve_basic_attack(&attacker, &defender, AttackRolls::new(1, 100));
        let critical = resolve_basic_attack(&attacker, &defender, AttackRolls::new(1, 1));
        if critical.is_critical() {
            assert!(critical.damage >= normal.damage);
        }
    }
}

#[test]
fn failed_special_never_touches_energy() {
    for seed in 0..100 {
        let mut rng = Gen::new(seed);
        let (mut attacker, _) = random_loadout(&mut rng, "Attacker");
        let (mut defender, _) = random_loadout(&mut rng, "Defender");
        let drain = attacker.energy().saturating_sub(rng.below(20));
        attacker
            .spend_energy(drain)
            .expect("draining at most current energy");

        for element in ELEMENTS {
            let ability = AbilityDescriptor::for_element(element);
            let before = attacker.energy();
            let defender_before = defender.clone();

            match resolve_special(&mut attacker, &mut defender, &ability, rng.range(1, 100) as u32) {
                Ok(_) => assert_eq!(attacker.energy(), before - ability.energy_cost),
                Err(_) => {
                    assert_eq!(attacker.energy(), before);
                    assert_eq!(defender, defender_before);
                }
            }
            assert_in_bounds(&attacker);
            assert_in_bounds(&defender);
        }
    }
}

/// Drives seeded battles with arbitrary navigation and checks resource
/// bounds and log capacity after every input.
#[test]
fn seeded_battles_hold_invariants() {
    const COMMANDS: [NavCommand; 4] = [
        NavCommand::Up,
        NavCommand::Down,
        NavCommand::Confirm,
        NavCommand::Cancel,
    ];

    let mut finished = 0;
    for seed in 0..60 {
        let mut rng = Gen::new(seed);
        let (a, _) = random_loadout(&mut rng, "Alpha");
        let (b, _) = random_loadout(&mut rng, "Beta");
        let mut battle = BattleController::builder(a, b).seed(seed).build();

        for _ in 0..600 {
            if battle.is_ended() {
                break;
            }
            if battle.is_enemy_turn() {
                battle.run_enemy_turn();
            } else {
                battle.handle(COMMANDS[rng.below(4) as usize]);
            }

            assert!(battle.log().len() <= BattleConfig::LOG_CAPACITY);
            assert_in_bounds(battle.combatant(battle_core::Side::A));
            assert_in_bounds(battle.combatant(battle_core::Side::B));
        }

        if battle.is_ended() {
            finished += 1;
            let winner = battle.winner().expect("ended battle has a winner");
            assert!(battle.combatant(winner.opponent()).is_defeated());
        }
    }
    assert!(finished > 0, "no seeded battle ran to completion");
}
