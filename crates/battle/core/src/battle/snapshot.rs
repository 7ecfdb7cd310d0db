use crate::ability::AbilityCatalog;
use crate::combatant::Combatant;

use super::phase::{ActionKind, Phase, Side};

/// Read-only view of a battle for renderers and event consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub active_side: Side,
    pub phase: Phase,
    pub pending_action: ActionKind,
    /// One-based cursor into `abilities`.
    pub selected_ability: usize,
    /// Specials of the side taking commands.
    pub abilities: AbilityCatalog,
    /// Newest entry last.
    pub log: Vec<String>,
    pub combatants: [Combatant; 2],
    pub winner: Option<Side>,
}

impl BattleSnapshot {
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended)
    }
}

/// What a finished (or abandoned) battle hands back to its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    /// `None` when the battle was abandoned before it ended.
    pub winner: Option<Side>,
    pub combatants: [Combatant; 2],
}

impl BattleReport {
    pub fn loser(&self) -> Option<Side> {
        self.winner.map(Side::opponent)
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    /// Splits the report into side A and side B.
    pub fn into_combatants(self) -> (Combatant, Combatant) {
        let [a, b] = self.combatants;
        (a, b)
    }
}
