use battle_core::CombatantSnapshot;
use serde::{Deserialize, Serialize};

/// Everything needed to resume an arena run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub player: CombatantSnapshot,
    /// The opponent of a battle that was in progress, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<CombatantSnapshot>,
    #[serde(default)]
    pub progress: RunProgress,
}

/// Where the player stands in the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProgress {
    /// Index into the arena's opponent order of the next battle.
    pub next_opponent: usize,
    pub wins: u32,
    pub losses: u32,
    /// Names of parts taken from defeated opponents, oldest first.
    #[serde(default)]
    pub salvaged: Vec<String>,
}

impl RunProgress {
    pub fn battles_fought(&self) -> u32 {
        self.wins + self.losses
    }
}
