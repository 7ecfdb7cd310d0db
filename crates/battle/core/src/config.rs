use crate::battle::Side;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Base seed mixed into every roll of the battle (for replay/determinism).
    pub seed: u64,
    /// Side driven by the enemy policy. The other side waits for commands.
    pub ai_side: Side,
}

impl BattleConfig {
    // ===== capacities =====
    /// Battle log capacity; the oldest entry is evicted first.
    pub const LOG_CAPACITY: usize = 10;
    /// One ability per element at most.
    pub const MAX_ABILITIES: usize = 5;

    // ===== base stats before equipment =====
    pub const BASE_HEALTH: u32 = 100;
    pub const BASE_ENERGY: u32 = 100;
    pub const BASE_ATTACK: i32 = 10;
    pub const BASE_DEFENSE: i32 = 10;
    pub const BASE_SPEED: i32 = 10;
    pub const BASE_ACCURACY: i32 = 10;
    pub const BASE_EVASION: i32 = 10;
    pub const BASE_CRIT_CHANCE: i32 = 5;

    // ===== turn upkeep =====
    /// Flat energy regained by the side whose turn begins.
    pub const REGEN_FLAT: u32 = 5;
    /// Percentage of maximum energy regained on top of the flat amount.
    pub const REGEN_PERCENT: u32 = 5;

    // ===== combat formulas =====
    pub const CRIT_MULTIPLIER: f64 = 1.5;
    pub const FIRE_MULTIPLIER: f64 = 1.2;
    pub const LIGHTNING_CRIT_PERCENT: u32 = 40;
    pub const LIGHTNING_CRIT_MULTIPLIER: f64 = 2.0;
    pub const ICE_SPEED_FACTOR: f64 = 0.7;
    pub const ACID_DEFENSE_FACTOR: f64 = 0.8;

    // ===== enemy policy =====
    /// Policy rolls at or below this value attack.
    pub const AI_ATTACK_THRESHOLD: u32 = 70;
    /// Policy rolls above the attack threshold and at or below this value defend.
    pub const AI_DEFEND_THRESHOLD: u32 = 90;
    /// Energy the enemy spends on a special, regardless of the catalog cost.
    pub const AI_SPECIAL_COST: u32 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5EED_BA77_1E00_0001;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            ai_side: Side::B,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }

    /// The side that takes commands from the caller.
    pub fn player_side(&self) -> Side {
        self.ai_side.opponent()
    }

    /// Energy regained at the start of a turn for the given maximum.
    ///
    /// `REGEN_FLAT + max × REGEN_PERCENT / 100`, rounded down.
    pub const fn energy_regen(max_energy: u32) -> u32 {
        let percent = max_energy as u64 * Self::REGEN_PERCENT as u64 / 100;
        Self::REGEN_FLAT.saturating_add(percent as u32)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
