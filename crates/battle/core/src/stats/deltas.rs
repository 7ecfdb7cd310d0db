//! Flat stat changes carried by components.

use strum::{EnumCount, IntoEnumIterator};

use super::StatName;

/// Flat stat changes indexed by [`StatName`].
///
/// A fixed-size array instead of a name → value map: every stat has a slot and
/// summing a loadout is a plain element-wise add.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "std::collections::BTreeMap<StatName, i32>",
        into = "std::collections::BTreeMap<StatName, i32>"
    )
)]
pub struct StatDeltas {
    values: [i32; StatName::COUNT],
}

impl StatDeltas {
    pub const fn new() -> Self {
        Self {
            values: [0; StatName::COUNT],
        }
    }

    /// Adds `amount` to `stat` (builder pattern).
    #[must_use]
    pub fn with(mut self, stat: StatName, amount: i32) -> Self {
        self.add(stat, amount);
        self
    }

    pub fn get(&self, stat: StatName) -> i32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatName, amount: i32) {
        self.values[stat.index()] = amount;
    }

    pub fn add(&mut self, stat: StatName, amount: i32) {
        let slot = &mut self.values[stat.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Element-wise sum of another delta set into this one.
    pub fn accumulate(&mut self, other: &StatDeltas) {
        for stat in StatName::iter() {
            self.add(stat, other.get(stat));
        }
    }

    /// Every stat with its delta, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StatName, i32)> + '_ {
        StatName::iter().map(|stat| (stat, self.get(stat)))
    }

    /// Only the stats this set actually changes.
    pub fn non_zero(&self) -> impl Iterator<Item = (StatName, i32)> + '_ {
        self.iter().filter(|(_, amount)| *amount != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|amount| *amount == 0)
    }
}

impl Default for StatDeltas {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(StatName, i32)> for StatDeltas {
    fn from_iter<I: IntoIterator<Item = (StatName, i32)>>(iter: I) -> Self {
        let mut deltas = Self::new();
        for (stat, amount) in iter {
            deltas.add(stat, amount);
        }
        deltas
    }
}

impl From<std::collections::BTreeMap<StatName, i32>> for StatDeltas {
    fn from(map: std::collections::BTreeMap<StatName, i32>) -> Self {
        map.into_iter().collect()
    }
}

impl From<StatDeltas> for std::collections::BTreeMap<StatName, i32> {
    fn from(deltas: StatDeltas) -> Self {
        deltas.non_zero().collect()
    }
}
