//! Opponent roster loader.

use std::path::Path;

use battle_core::Combatant;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, PartCatalog, read_file};

/// A robot described by name and the catalog parts it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parts: Vec<String>,
}

impl RobotSpec {
    /// Builds a combatant by equipping each named part from the catalog.
    ///
    /// Fails on an unknown part or on two parts competing for one slot.
    pub fn assemble(&self, catalog: &PartCatalog) -> LoadResult<Combatant> {
        let mut robot = Combatant::new(&self.name).with_description(&self.description);
        for part_name in &self.parts {
            let part = catalog.find(part_name).ok_or_else(|| {
                anyhow::anyhow!("Robot {} uses unknown part {}", self.name, part_name)
            })?;
            if let Some(previous) = robot.equip(part.clone()) {
                anyhow::bail!(
                    "Robot {} equips both {} and {} in slot {}",
                    self.name,
                    previous.name(),
                    part.name(),
                    part.slot()
                );
            }
        }
        Ok(robot)
    }
}

/// Opponent roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentRoster {
    pub opponents: Vec<RobotSpec>,
}

/// Loader for the opponent roster from RON files.
pub struct OpponentLoader;

impl OpponentLoader {
    /// Load the roster and assemble each opponent from `catalog`.
    pub fn load(path: &Path, catalog: &PartCatalog) -> LoadResult<Vec<Combatant>> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &PartCatalog) -> LoadResult<Vec<Combatant>> {
        let roster: OpponentRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse opponent roster RON: {}", e))?;

        roster
            .opponents
            .iter()
            .map(|spec| spec.assemble(catalog))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::PartLoader;
    use battle_core::{Element, SlotType};

    fn catalog() -> PartCatalog {
        PartLoader::parse(
            r#"(parts: [
                (name: "Spark Coil", slot: PowerCore, deltas: { energyRegen: 10 }, element: Some(Lightning)),
                (name: "Iron Claw", slot: RightArm, deltas: { attack: 6 }),
                (name: "Steel Claw", slot: RightArm, deltas: { attack: 8 }),
            ])"#,
        )
        .unwrap()
    }

    #[test]
    fn assembles_opponents_from_parts() {
        let opponents = OpponentLoader::parse(
            r#"(opponents: [
                (name: "Volt Jackal", description: "Twitchy.", parts: ["Spark Coil", "Iron Claw"]),
                (name: "Scrap Pup"),
            ])"#,
            &catalog(),
        )
        .unwrap();

        assert_eq!(opponents.len(), 2);
        let jackal = &opponents[0];
        assert_eq!(jackal.stats().attack, 16);
        assert_eq!(jackal.max_energy(), 110);
        assert_eq!(jackal.primary_element(), Some(Element::Lightning));
        assert!(jackal.loadout().get(SlotType::RightArm).is_some());
        assert!(opponents[1].loadout().is_empty());
    }

    #[test]
    fn unknown_part_is_an_error() {
        let spec = RobotSpec {
            name: "Ghost".into(),
            description: String::new(),
            parts: vec!["Phantom Limb".into()],
        };
        let err = spec.assemble(&catalog()).unwrap_err();
        assert!(err.to_string().contains("Phantom Limb"));
    }

    #[test]
    fn slot_conflict_is_an_error() {
        let spec = RobotSpec {
            name: "Greedy".into(),
            description: String::new(),
            parts: vec!["Iron Claw".into(), "Steel Claw".into()],
        };
        assert!(spec.assemble(&catalog()).is_err());
    }
}
