//! RNG oracle for deterministic battle rolls.
//!
//! Every random draw in a battle (hit check, critical check, lightning surge,
//! enemy policy) is a d100 derived from the battle seed, the resolution nonce,
//! the acting side and a [`RollContext`]. Given the same seed and the same
//! command sequence a battle replays identically.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }
}

/// Independent roll slots within one resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollContext {
    /// Basic attack hit check.
    Hit = 0,
    /// Basic attack critical check.
    Critical = 1,
    /// Lightning special surge check.
    Lightning = 2,
    /// Enemy policy decision.
    Policy = 3,
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: the seed is the state, so the oracle can be shared freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Oracle that always rolls the same d100 value.
///
/// Used to force outcomes in scripted battles: `FixedRoll(100)` misses every
/// check with less than 100% chance, `FixedRoll(1)` passes every check with a
/// non-zero chance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRoll(pub u32);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0.saturating_sub(1)
    }

    fn roll_d100(&self, _seed: u64) -> u32 {
        self.0.clamp(1, 100)
    }
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `battle_seed` - Base seed set when the battle is created
/// * `nonce` - Resolution sequence number (increments each resolution)
/// * `side` - Index of the acting side
/// * `context` - Which roll of the resolution this is
pub fn compute_seed(battle_seed: u64, nonce: u64, side: u32, context: RollContext) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (side as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
