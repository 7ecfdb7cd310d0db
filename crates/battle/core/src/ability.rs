//! Special abilities unlocked by elemental components.
//!
//! Abilities are never stored. A combatant's catalog is derived on demand from
//! the elemental tags present on its loadout, one descriptor per distinct
//! element in slot order.

use arrayvec::ArrayVec;

use crate::combatant::Loadout;
use crate::component::Element;
use crate::config::BattleConfig;

/// Static ability data for one element.
#[derive(Clone, Copy)]
struct AbilitySpec {
    name: &'static str,
    description: &'static str,
    energy_cost: u32,
    power_percent: u32,
}

// Element order follows `Element` declaration order.
static ABILITY_TABLE: [AbilitySpec; 5] = [
    // Fire
    AbilitySpec {
        name: "Inferno Blast",
        description: "A searing blast dealing 20% bonus damage.",
        energy_cost: 25,
        power_percent: 150,
    },
    // Ice
    AbilitySpec {
        name: "Frost Lance",
        description: "A freezing strike that slows the target.",
        energy_cost: 20,
        power_percent: 120,
    },
    // Lightning
    AbilitySpec {
        name: "Arc Surge",
        description: "An unstable discharge with a 40% chance to deal double damage.",
        energy_cost: 30,
        power_percent: 130,
    },
    // Acid
    AbilitySpec {
        name: "Corrosive Spray",
        description: "Caustic spray that eats away the target's armor.",
        energy_cost: 20,
        power_percent: 110,
    },
    // Shadow
    AbilitySpec {
        name: "Umbral Strike",
        description: "A strike from the shadows; evades the next incoming attack.",
        energy_cost: 15,
        power_percent: 100,
    },
];

fn spec(element: Element) -> &'static AbilitySpec {
    &ABILITY_TABLE[element as usize]
}

/// A usable special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDescriptor {
    pub element: Element,
    pub energy_cost: u32,
    /// Power multiplier ×100 (150 = 1.5× attack).
    pub power_percent: u32,
}

impl AbilityDescriptor {
    /// The catalog entry for an element.
    pub fn for_element(element: Element) -> Self {
        let spec = spec(element);
        Self {
            element,
            energy_cost: spec.energy_cost,
            power_percent: spec.power_percent,
        }
    }

    /// Same ability with a different energy cost.
    #[must_use]
    pub const fn with_energy_cost(mut self, energy_cost: u32) -> Self {
        self.energy_cost = energy_cost;
        self
    }

    pub fn name(&self) -> &'static str {
        spec(self.element).name
    }

    pub fn description(&self) -> &'static str {
        spec(self.element).description
    }

    pub fn power_multiplier(&self) -> f64 {
        self.power_percent as f64 / 100.0
    }
}

/// The specials available to one combatant, deduplicated by element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityCatalog {
    abilities: ArrayVec<AbilityDescriptor, { BattleConfig::MAX_ABILITIES }>,
}

impl AbilityCatalog {
    /// Derives the catalog from the elemental tags on a loadout.
    pub fn from_loadout(loadout: &Loadout) -> Self {
        let mut abilities = ArrayVec::new();
        for element in loadout.elements() {
            let known = abilities
                .iter()
                .any(|ability: &AbilityDescriptor| ability.element == element);
            if !known {
                // At most one entry per element, so capacity is never exceeded.
                abilities.push(AbilityDescriptor::for_element(element));
            }
        }
        Self { abilities }
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Ability at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&AbilityDescriptor> {
        self.abilities.get(index)
    }

    pub fn find(&self, element: Element) -> Option<&AbilityDescriptor> {
        self.abilities.iter().find(|ability| ability.element == element)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityDescriptor> {
        self.abilities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, SlotType};

    fn tagged(name: &str, slot: SlotType, element: Element) -> Component {
        Component::builder(name, slot).element(element).build()
    }

    #[test]
    fn catalog_deduplicates_by_element_in_slot_order() {
        let mut loadout = Loadout::new();
        loadout.equip(tagged("Cryo Core", SlotType::PowerCore, Element::Ice));
        loadout.equip(tagged("Ember Visor", SlotType::Head, Element::Fire));
        loadout.equip(tagged("Frost Claw", SlotType::LeftArm, Element::Ice));
        loadout.equip(Component::builder("Plain Leg", SlotType::LeftLeg).build());

        let catalog = AbilityCatalog::from_loadout(&loadout);

        let elements: Vec<_> = catalog.iter().map(|a| a.element).collect();
        assert_eq!(elements, vec![Element::Fire, Element::Ice]);
    }

    #[test]
    fn empty_loadout_has_no_abilities() {
        assert!(AbilityCatalog::from_loadout(&Loadout::new()).is_empty());
    }

    #[test]
    fn descriptors_expose_table_values() {
        let frost = AbilityDescriptor::for_element(Element::Ice);
        assert_eq!(frost.name(), "Frost Lance");
        assert_eq!(frost.energy_cost, 20);
        assert!((frost.power_multiplier() - 1.2).abs() < f64::EPSILON);

        let cheap = frost.with_energy_cost(5);
        assert_eq!(cheap.energy_cost, 5);
        assert_eq!(cheap.name(), "Frost Lance");
    }
}
