//! Fixed slot → component mapping.

use strum::{EnumCount, IntoEnumIterator};

use crate::component::{Component, Element, SlotType};
use crate::stats::StatDeltas;

/// The equipment slots of one combatant, indexed by [`SlotType`].
///
/// Swap semantics: equipping into an occupied slot hands the previous
/// component back to the caller instead of dropping it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    slots: [Option<Component>; SlotType::COUNT],
}

impl Loadout {
    /// Creates a loadout with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub fn get(&self, slot: SlotType) -> Option<&Component> {
        self.slots[slot.index()].as_ref()
    }

    /// Places `component` in the slot it fits, returning the previous occupant.
    pub fn equip(&mut self, component: Component) -> Option<Component> {
        let slot = component.slot();
        self.slots[slot.index()].replace(component)
    }

    /// Empties a slot, returning its component if any was equipped.
    pub fn unequip(&mut self, slot: SlotType) -> Option<Component> {
        self.slots[slot.index()].take()
    }

    /// Equipped components in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotType, &Component)> {
        SlotType::iter().filter_map(|slot| self.get(slot).map(|component| (slot, component)))
    }

    /// Elemental tags in slot order (duplicates included).
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.iter().filter_map(|(_, component)| component.element())
    }

    /// Sum of every equipped component's deltas.
    pub fn total_deltas(&self) -> StatDeltas {
        let mut total = StatDeltas::new();
        for (_, component) in self.iter() {
            total.accumulate(component.deltas());
        }
        total
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Loadout {
    fn default() -> Self {
        Self::new()
    }
}
