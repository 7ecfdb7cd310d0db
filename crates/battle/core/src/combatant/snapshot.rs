//! Persistence schema for combatants.
//!
//! Only combatants are ever saved; a battle in progress is not. The schema is
//! flat so storage adapters can encode it with any serde format.

use serde::{Deserialize, Serialize};

use crate::component::{Component, Element, Rarity, SlotType};
use crate::stats::{CombatStats, ResourceMeter, StatDeltas};

use super::Combatant;

/// One equipped component as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    pub slot: SlotType,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub deltas: StatDeltas,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
}

impl From<&Component> for ComponentRecord {
    fn from(component: &Component) -> Self {
        Self {
            name: component.name().to_owned(),
            slot: component.slot(),
            rarity: component.rarity(),
            deltas: *component.deltas(),
            element: component.element(),
        }
    }
}

impl From<ComponentRecord> for Component {
    fn from(record: ComponentRecord) -> Self {
        let builder = Component::builder(record.name, record.slot)
            .rarity(record.rarity)
            .deltas(record.deltas);
        match record.element {
            Some(element) => builder.element(element).build(),
            None => builder.build(),
        }
    }
}

/// Serialized form of a [`Combatant`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub accuracy: i32,
    pub evasion: i32,
    pub crit_chance: i32,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

impl Combatant {
    pub fn to_snapshot(&self) -> CombatantSnapshot {
        let stats = self.stats();
        CombatantSnapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            health: self.health(),
            max_health: self.max_health(),
            energy: self.energy(),
            max_energy: self.max_energy(),
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            accuracy: stats.accuracy,
            evasion: stats.evasion,
            crit_chance: stats.crit_chance,
            components: self
                .loadout
                .iter()
                .map(|(_, component)| ComponentRecord::from(component))
                .collect(),
        }
    }

    /// Rebuilds a combatant from storage.
    ///
    /// Components are re-equipped (a later record for an occupied slot
    /// wins), then the saved resources and stats are restored verbatim so
    /// debuffs carried between battles survive a save.
    pub fn from_snapshot(snapshot: CombatantSnapshot) -> Self {
        let mut combatant = Combatant::new(snapshot.name).with_description(snapshot.description);
        for record in snapshot.components {
            combatant.loadout.equip(record.into());
        }

        combatant.health = ResourceMeter::new(snapshot.health, snapshot.max_health);
        combatant.energy = ResourceMeter::new(snapshot.energy, snapshot.max_energy);
        combatant.stats = CombatStats {
            attack: snapshot.attack,
            defense: snapshot.defense,
            speed: snapshot.speed,
            accuracy: snapshot.accuracy,
            evasion: snapshot.evasion,
            crit_chance: snapshot.crit_chance,
        };
        combatant
    }
}
