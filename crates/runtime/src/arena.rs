//! Arena run: the series of battles a player robot fights.
//!
//! The run owns the player's robot between battles. Each battle gets the
//! robot by value and hands it back through the [`BattleReport`], so debuffs
//! picked up in one fight carry into the next.

use rand::Rng;
use tracing::info;

use battle_content::{ArenaRules, ContentFactory};
use battle_core::{BattleReport, Combatant, Component, Side};

use crate::api::{Result, RuntimeError};
use crate::repository::{RunProgress, SaveData};
use crate::rewards::salvage;

/// Progress through one arena's opponent order.
#[derive(Debug, Clone)]
pub struct ArenaRun {
    rules: ArenaRules,
    roster: Vec<Combatant>,
    player: Combatant,
    progress: RunProgress,
}

/// What [`ArenaRun::record`] did with a battle result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleRecord {
    pub opponent: String,
    pub winner: Option<Side>,
    /// Part stripped from the defeated opponent.
    pub salvaged: Option<Component>,
    /// Whether the salvaged part filled an empty slot on the player.
    pub equipped: bool,
}

impl ArenaRun {
    pub fn new(rules: ArenaRules, roster: Vec<Combatant>, player: Combatant) -> Self {
        Self {
            rules,
            roster,
            player,
            progress: RunProgress::default(),
        }
    }

    /// Fresh run from the content in a data directory.
    pub fn from_content(factory: &ContentFactory) -> Result<Self> {
        let rules = factory.load_rules().map_err(RuntimeError::Content)?;
        let parts = factory.load_parts().map_err(RuntimeError::Content)?;
        let roster = factory
            .load_opponents(&parts)
            .map_err(RuntimeError::Content)?;
        let player = factory
            .load_player(&rules, &parts)
            .map_err(RuntimeError::Content)?;

        info!(
            arena = %rules.arena.name,
            parts = parts.len(),
            opponents = roster.len(),
            "arena content loaded"
        );
        Ok(Self::new(rules, roster, player))
    }

    /// Replace the player and progress with a saved run.
    pub fn resume(mut self, save: &SaveData) -> Self {
        self.player = Combatant::from_snapshot(save.player.clone());
        self.progress = save.progress.clone();
        self
    }

    pub fn rules(&self) -> &ArenaRules {
        &self.rules
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn progress(&self) -> &RunProgress {
        &self.progress
    }

    /// Number of battles in a full run.
    pub fn length(&self) -> usize {
        self.rules.run_order().count()
    }

    pub fn is_complete(&self) -> bool {
        self.progress.next_opponent >= self.length()
    }

    /// The next opponent, freshly assembled, or `None` once the run is over.
    pub fn next_opponent(&self) -> Result<Option<Combatant>> {
        let Some(name) = self.rules.run_order().nth(self.progress.next_opponent) else {
            return Ok(None);
        };
        self.roster
            .iter()
            .find(|opponent| opponent.name() == name)
            .cloned()
            .map(Some)
            .ok_or_else(|| RuntimeError::UnknownOpponent(name.to_owned()))
    }

    /// Both robots for the next battle: the player and the next opponent.
    pub fn next_battle(&self) -> Result<Option<(Combatant, Combatant)>> {
        Ok(self
            .next_opponent()?
            .map(|opponent| (self.player.clone(), opponent)))
    }

    /// Take a finished battle's result back into the run.
    ///
    /// The player (side A) comes back as it left the battle. A win may
    /// salvage one part off the opponent; the part is equipped only if the
    /// player's slot for it is empty. An abandoned battle is not counted and
    /// the same opponent comes up again.
    pub fn record<R: Rng + ?Sized>(&mut self, report: BattleReport, rng: &mut R) -> BattleRecord {
        let winner = report.winner;
        let (player, mut opponent) = report.into_combatants();
        self.player = player;

        let mut record = BattleRecord {
            opponent: opponent.name().to_owned(),
            winner,
            salvaged: None,
            equipped: false,
        };

        match winner {
            Some(Side::A) => {
                self.progress.wins += 1;
                self.progress.next_opponent += 1;
                if self.rules.arena.salvage
                    && let Some(part) = salvage(&mut opponent, rng)
                {
                    self.progress.salvaged.push(part.name().to_owned());
                    if self.player.loadout().get(part.slot()).is_none() {
                        self.player.equip(part.clone());
                        record.equipped = true;
                    }
                    record.salvaged = Some(part);
                }
            }
            Some(Side::B) => {
                self.progress.losses += 1;
                self.progress.next_opponent += 1;
            }
            None => {}
        }

        info!(
            opponent = %record.opponent,
            winner = ?winner,
            wins = self.progress.wins,
            losses = self.progress.losses,
            "battle recorded"
        );
        record
    }

    /// Snapshot of the run for a [`crate::SaveRepository`].
    pub fn save_data(&self) -> SaveData {
        SaveData {
            player: self.player.to_snapshot(),
            opponent: None,
            progress: self.progress.clone(),
        }
    }
}
