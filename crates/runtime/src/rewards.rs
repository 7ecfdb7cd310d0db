//! Post-battle rewards.

use rand::Rng;
use rand::seq::SliceRandom;

use battle_core::{Combatant, Component, SlotType};

/// Strips one random equipped part off a defeated robot.
///
/// Returns `None` when the loser has nothing equipped. The loser's stats are
/// recomputed without the part.
pub fn salvage<R: Rng + ?Sized>(loser: &mut Combatant, rng: &mut R) -> Option<Component> {
    let slots: Vec<SlotType> = loser.loadout().iter().map(|(slot, _)| slot).collect();
    let slot = *slots.choose(rng)?;
    loser.unequip(slot)
}
