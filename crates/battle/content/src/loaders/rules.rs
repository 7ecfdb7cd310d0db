//! Arena rules loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, RobotSpec, read_file};

/// Arena rules: which opponents to fight, in what order, and what the
/// player starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaRules {
    pub arena: ArenaSection,
    pub player: RobotSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaSection {
    pub name: String,
    /// Opponent names, fought in order.
    pub opponent_order: Vec<String>,
    /// Battles per run; defaults to the full opponent order.
    #[serde(default)]
    pub battles_per_run: Option<usize>,
    /// Whether a win salvages a part from the loser.
    #[serde(default = "default_salvage")]
    pub salvage: bool,
}

fn default_salvage() -> bool {
    true
}

impl ArenaRules {
    /// Opponent names for one run, in battle order.
    pub fn run_order(&self) -> impl Iterator<Item = &str> {
        let count = self
            .arena
            .battles_per_run
            .unwrap_or(self.arena.opponent_order.len());
        self.arena
            .opponent_order
            .iter()
            .take(count)
            .map(String::as_str)
    }
}

/// Loader for arena rules from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load arena rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ArenaRules> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArenaRules> {
        let rules: ArenaRules = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse arena rules TOML: {}", e))?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battles_per_run_limits_order() {
        let rules = RulesLoader::parse(
            r#"
            [arena]
            name = "Test Pit"
            opponent_order = ["One", "Two", "Three"]
            battles_per_run = 2

            [player]
            name = "Hero"
            parts = ["Iron Claw"]
            "#,
        )
        .unwrap();

        assert!(rules.arena.salvage);
        assert_eq!(rules.run_order().collect::<Vec<_>>(), vec!["One", "Two"]);
        assert_eq!(rules.player.parts, vec!["Iron Claw".to_owned()]);
    }
}
