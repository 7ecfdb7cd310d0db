//! Equipment components.
//!
//! A component is an immutable descriptor: which slot it fits, its rarity
//! tier, the flat stat deltas it contributes and an optional elemental tag
//! that unlocks a special ability. Components are owned by value; equipping
//! moves one into a combatant's loadout and unequipping hands it back.

use crate::stats::{StatDeltas, StatName};

/// Equipment slots on a combatant's chassis.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum SlotType {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    PowerCore,
}

impl SlotType {
    /// Position of this slot in fixed-size loadout arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rarity tier of a component.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Poor,
    Good,
    Epic,
}

/// Elemental tag; each distinct element on a loadout grants one special.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Acid,
    Shadow,
}

/// An equippable part.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    name: String,
    slot: SlotType,
    #[cfg_attr(feature = "serde", serde(default))]
    rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    deltas: StatDeltas,
    #[cfg_attr(feature = "serde", serde(default))]
    element: Option<Element>,
}

impl Component {
    /// Creates a builder for a component that fits `slot`.
    pub fn builder(name: impl Into<String>, slot: SlotType) -> ComponentBuilder {
        ComponentBuilder {
            name: name.into(),
            slot,
            rarity: Rarity::default(),
            deltas: StatDeltas::new(),
            element: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> SlotType {
        self.slot
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn deltas(&self) -> &StatDeltas {
        &self.deltas
    }

    pub fn delta(&self, stat: StatName) -> i32 {
        self.deltas.get(stat)
    }

    pub fn element(&self) -> Option<Element> {
        self.element
    }
}

/// Builder for constructing components.
#[derive(Clone, Debug)]
pub struct ComponentBuilder {
    name: String,
    slot: SlotType,
    rarity: Rarity,
    deltas: StatDeltas,
    element: Option<Element>,
}

impl ComponentBuilder {
    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Adds a flat delta; repeated calls for the same stat accumulate.
    pub fn delta(mut self, stat: StatName, amount: i32) -> Self {
        self.deltas.add(stat, amount);
        self
    }

    pub fn deltas(mut self, deltas: StatDeltas) -> Self {
        self.deltas = deltas;
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn build(self) -> Component {
        Component {
            name: self.name,
            slot: self.slot,
            rarity: self.rarity,
            deltas: self.deltas,
            element: self.element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_deltas() {
        let part = Component::builder("Scrap Fist", SlotType::RightArm)
            .rarity(Rarity::Good)
            .delta(StatName::Attack, 4)
            .delta(StatName::Attack, 2)
            .delta(StatName::Accuracy, -1)
            .element(Element::Acid)
            .build();

        assert_eq!(part.slot(), SlotType::RightArm);
        assert_eq!(part.delta(StatName::Attack), 6);
        assert_eq!(part.delta(StatName::Accuracy), -1);
        assert_eq!(part.element(), Some(Element::Acid));
    }

    #[test]
    fn slot_names_are_title_case() {
        assert_eq!(SlotType::PowerCore.to_string(), "Power Core");
        assert_eq!("left leg".parse::<SlotType>().unwrap(), SlotType::LeftLeg);
    }
}
