//! Event types for different topics.

use battle_core::{BattleSnapshot, Combatant, Resolution, Side};
use serde::{Deserialize, Serialize};

/// Events about the battle itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A turn resolved; the snapshot is taken after turn upkeep.
    ActionResolved {
        resolution: Resolution,
        snapshot: Box<BattleSnapshot>,
    },

    /// The battle reached its terminal phase.
    BattleEnded {
        winner: Side,
        /// The defeated combatant as it stood at the end of the battle.
        loser: Box<Combatant>,
    },
}

/// One line appended to the battle log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogEvent {
    Line(String),
}

/// Session lifecycle events (lightweight)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    Started { a: String, b: String },
    Abandoned,
    /// `winner` is `None` when the session closed before the battle ended.
    Finished { winner: Option<Side> },
}
