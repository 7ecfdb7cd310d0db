//! Battle participants.
//!
//! # Invariants
//!
//! - `0 ≤ health ≤ max_health` and `0 ≤ energy ≤ max_energy` at all times
//! - `stats` and both maximums equal the base constants plus the summed
//!   loadout deltas right after any [`Combatant::equip`] / [`Combatant::unequip`]
//! - combat debuffs scale `stats` in place and persist until the next
//!   recomputation, across battles

pub mod loadout;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use loadout::Loadout;
#[cfg(feature = "serde")]
pub use snapshot::{CombatantSnapshot, ComponentRecord};

use crate::ability::AbilityCatalog;
use crate::combat::CombatError;
use crate::component::{Component, Element, SlotType};
use crate::config::BattleConfig;
use crate::stats::{CombatStats, ResourceMeter, StatDeltas, StatName};

/// A battle participant: resources, derived stats and equipped components.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    description: String,
    health: ResourceMeter,
    energy: ResourceMeter,
    stats: CombatStats,
    loadout: Loadout,
    is_defending: bool,
    will_evade_next: bool,
}

impl Combatant {
    /// Creates a combatant with every slot empty and base stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            health: ResourceMeter::full(BattleConfig::BASE_HEALTH),
            energy: ResourceMeter::full(BattleConfig::BASE_ENERGY),
            stats: CombatStats::BASE,
            loadout: Loadout::new(),
            is_defending: false,
            will_evade_next: false,
        }
    }

    /// Sets the flavor description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Equips a list of components (builder pattern). Displaced components
    /// are dropped.
    #[must_use]
    pub fn with_components(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        for component in components {
            self.loadout.equip(component);
        }
        self.recompute_stats();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum()
    }

    pub fn energy(&self) -> u32 {
        self.energy.current()
    }

    pub fn max_energy(&self) -> u32 {
        self.energy.maximum()
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn is_defending(&self) -> bool {
        self.is_defending
    }

    pub fn will_evade_next(&self) -> bool {
        self.will_evade_next
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }

    // ------------------------------------------------------------------
    // Equipment
    // ------------------------------------------------------------------

    /// Equips `component` into its slot and recomputes stats.
    ///
    /// Returns the component previously in that slot; it is never dropped
    /// silently.
    pub fn equip(&mut self, component: Component) -> Option<Component> {
        let previous = self.loadout.equip(component);
        self.recompute_stats();
        previous
    }

    /// Removes the component in `slot` and recomputes stats.
    pub fn unequip(&mut self, slot: SlotType) -> Option<Component> {
        let removed = self.loadout.unequip(slot);
        if removed.is_some() {
            self.recompute_stats();
        }
        removed
    }

    /// Rebuilds derived stats from base constants plus loadout deltas.
    ///
    /// Maximums follow the `health` / `energyRegen` deltas and never drop
    /// below 1. Current health and energy are clamped down to the new
    /// maximums and never raised.
    pub fn recompute_stats(&mut self) {
        let totals = self.loadout.total_deltas();
        self.stats = CombatStats::derive(&totals);
        self.health
            .set_maximum(derived_maximum(BattleConfig::BASE_HEALTH, &totals, StatName::Health));
        self.energy.set_maximum(derived_maximum(
            BattleConfig::BASE_ENERGY,
            &totals,
            StatName::EnergyRegen,
        ));
    }

    /// Specials unlocked by the current loadout.
    pub fn abilities(&self) -> AbilityCatalog {
        AbilityCatalog::from_loadout(&self.loadout)
    }

    /// First elemental tag in slot order.
    pub fn primary_element(&self) -> Option<Element> {
        self.loadout.elements().next()
    }

    // ------------------------------------------------------------------
    // Combat effects
    // ------------------------------------------------------------------

    /// Removes health, returning the amount actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.drain(amount)
    }

    /// Restores health up to the maximum, returning the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.restore(amount)
    }

    /// Spends energy, or fails without touching it when there is not enough.
    pub fn spend_energy(&mut self, amount: u32) -> Result<(), CombatError> {
        let available = self.energy.current();
        if available < amount {
            return Err(CombatError::InsufficientEnergy {
                required: amount,
                available,
            });
        }
        self.energy.drain(amount);
        Ok(())
    }

    /// Restores energy up to the maximum, returning the amount restored.
    pub fn restore_energy(&mut self, amount: u32) -> u32 {
        self.energy.restore(amount)
    }

    /// Adds a flat amount to a combat stat (item effects).
    ///
    /// Returns false for `Health` / `EnergyRegen`, which only equipment may
    /// change.
    pub fn adjust_stat(&mut self, stat: StatName, amount: i32) -> bool {
        self.stats.adjust(stat, amount)
    }

    /// Multiplies a combat stat in place (Ice/Acid debuffs). Stacks with
    /// earlier applications and is only undone by a recomputation.
    pub fn scale_stat(&mut self, stat: StatName, factor: f64) -> Option<i32> {
        self.stats.scale(stat, factor)
    }

    pub(crate) fn set_defending(&mut self, defending: bool) {
        self.is_defending = defending;
    }

    pub(crate) fn set_will_evade_next(&mut self, evade: bool) {
        self.will_evade_next = evade;
    }

    /// Clears a pending evasion, returning whether one was pending.
    pub(crate) fn consume_evasion(&mut self) -> bool {
        core::mem::take(&mut self.will_evade_next)
    }

    /// Prepares for a fresh battle: full health and energy, transient flags
    /// cleared. Stat debuffs are left as they are.
    pub fn reset_for_battle(&mut self) {
        self.health.refill();
        self.energy.refill();
        self.is_defending = false;
        self.will_evade_next = false;
    }
}

fn derived_maximum(base: u32, totals: &StatDeltas, stat: StatName) -> u32 {
    let maximum = base as i64 + totals.get(stat) as i64;
    maximum.clamp(1, u32::MAX as i64) as u32
}
