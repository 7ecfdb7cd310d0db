//! Closed enumeration of the stats a component can modify.

/// Every stat a component delta can target.
///
/// `Health` and `EnergyRegen` raise the resource maximums; the other six map
/// one-to-one onto the [`CombatStats`](super::CombatStats) field of the same
/// name.
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
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum StatName {
    Health,
    EnergyRegen,
    Attack,
    Defense,
    Speed,
    Accuracy,
    Evasion,
    CritChance,
}

impl StatName {
    /// Position of this stat in fixed-size stat arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for the two stats that feed resource maximums.
    pub const fn is_resource(self) -> bool {
        matches!(self, Self::Health | Self::EnergyRegen)
    }
}
