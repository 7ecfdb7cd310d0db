//! Battle state machine.
//!
//! The [`BattleController`] owns both combatants for the length of one
//! battle. Every input goes through [`BattleController::handle`] (or one of
//! its direct-call shortcuts) and runs to completion before returning:
//!
//! ```text
//! AwaitingAction ──Attack/Defend──▶ Resolving ──▶ turn flip ──▶ EnemyThinking
//!       │   ▲                          ▲                            │
//!  Special  Cancel                     └───── run_enemy_turn() ─────┘
//!       ▼   │
//! AbilityMenuOpen ──Confirm──▶ Resolving
//!
//! any resolution that drops the target to 0 health ──▶ Ended (absorbing)
//! ```
//!
//! `EnemyThinking` is only a marker. Whoever owns the controller waits out
//! the thinking delay and then calls [`BattleController::run_enemy_turn`].

mod command;
mod item;
mod log;
mod observer;
mod phase;
mod snapshot;
mod turns;

pub use command::{CommandError, CommandOutcome, NavCommand, Resolution, ResolvedAction};
pub use item::{ItemResult, ItemService};
pub use log::BattleLog;
pub use observer::{BattleObserver, NoopObserver};
pub use phase::{ActionKind, Phase, Side};
pub use snapshot::{BattleReport, BattleSnapshot};

use crate::ability::AbilityCatalog;
use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::rng::{PcgRng, RngOracle, RollContext, compute_seed};

/// Turn state machine for one battle between two combatants.
pub struct BattleController {
    combatants: [Combatant; 2],
    config: BattleConfig,
    active_side: Side,
    phase: Phase,
    pending_action: ActionKind,
    selected_ability: usize,
    log: BattleLog,
    winner: Option<Side>,
    nonce: u64,
    rng: Box<dyn RngOracle>,
    observer: Box<dyn BattleObserver>,
    items: Option<Box<dyn ItemService>>,
}

impl core::fmt::Debug for BattleController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleController")
            .field("active_side", &self.active_side)
            .field("phase", &self.phase)
            .field("winner", &self.winner)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}

impl BattleController {
    /// Starts a battle with the default oracle and no observer.
    pub fn new(a: Combatant, b: Combatant, config: BattleConfig) -> Self {
        Self::builder(a, b).config(config).build()
    }

    pub fn builder(a: Combatant, b: Combatant) -> BattleControllerBuilder {
        BattleControllerBuilder::new(a, b)
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Feeds one navigation command to the state machine.
    pub fn handle(&mut self, command: NavCommand) -> CommandOutcome {
        self.dispatch(command).unwrap_or_else(CommandOutcome::from)
    }

    /// Executes an action bar entry directly, as if it were highlighted and
    /// confirmed.
    pub fn select(&mut self, kind: ActionKind) -> CommandOutcome {
        self.try_select(kind).unwrap_or_else(CommandOutcome::from)
    }

    pub fn attack(&mut self) -> CommandOutcome {
        self.select(ActionKind::Attack)
    }

    pub fn defend(&mut self) -> CommandOutcome {
        self.select(ActionKind::Defend)
    }

    pub fn open_special_menu(&mut self) -> CommandOutcome {
        self.select(ActionKind::Special)
    }

    /// Forwards an item request to the item subsystem.
    ///
    /// The returned message is logged and the turn is not spent. Without an
    /// item service the request is logged as unavailable.
    pub fn use_item(&mut self, name: &str, target: Side) -> CommandOutcome {
        self.try_use_item(name, target).unwrap_or_else(CommandOutcome::from)
    }

    /// Runs the enemy's turn once the thinking delay has elapsed.
    ///
    /// Ignored unless the controller is in `EnemyThinking`, so a stale timer
    /// firing after an abort or a second time does nothing.
    pub fn run_enemy_turn(&mut self) -> CommandOutcome {
        let result = match self.phase {
            Phase::EnemyThinking => self.resolve_enemy_turn(),
            Phase::Ended => Err(CommandError::BattleEnded),
            phase => Err(CommandError::InvalidNavigation { phase }),
        };
        result.unwrap_or_else(CommandOutcome::from)
    }

    /// Ends ownership of the battle and hands the combatants back.
    pub fn finish(self) -> BattleReport {
        BattleReport {
            winner: self.winner,
            combatants: self.combatants,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn pending_action(&self) -> ActionKind {
        self.pending_action
    }

    /// One-based cursor into the ability menu.
    pub fn selected_ability(&self) -> usize {
        self.selected_ability
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn is_enemy_turn(&self) -> bool {
        self.phase == Phase::EnemyThinking
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// Specials of the side taking commands.
    pub fn abilities(&self) -> AbilityCatalog {
        self.combatant(self.config.player_side()).abilities()
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            active_side: self.active_side,
            phase: self.phase,
            pending_action: self.pending_action,
            selected_ability: self.selected_ability,
            abilities: self.abilities(),
            log: self.log.entries().to_vec(),
            combatants: self.combatants.clone(),
            winner: self.winner,
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    fn dispatch(&mut self, command: NavCommand) -> Result<CommandOutcome, CommandError> {
        self.ensure_accepting_input()?;

        match (self.phase, command) {
            (Phase::AwaitingAction, NavCommand::Up) => {
                self.pending_action = self.pending_action.previous();
                Ok(CommandOutcome::Navigated)
            }
            (Phase::AwaitingAction, NavCommand::Down) => {
                self.pending_action = self.pending_action.next();
                Ok(CommandOutcome::Navigated)
            }
            (Phase::AwaitingAction, NavCommand::Confirm) => self.execute(self.pending_action),
            (Phase::AbilityMenuOpen, NavCommand::Up) => {
                self.selected_ability = self.selected_ability.saturating_sub(1).max(1);
                Ok(CommandOutcome::Navigated)
            }
            (Phase::AbilityMenuOpen, NavCommand::Down) => {
                let count = self.abilities().len().max(1);
                self.selected_ability = (self.selected_ability + 1).min(count);
                Ok(CommandOutcome::Navigated)
            }
            (Phase::AbilityMenuOpen, NavCommand::Confirm) => self.confirm_special(),
            (Phase::AbilityMenuOpen, NavCommand::Cancel) => {
                self.phase = Phase::AwaitingAction;
                Ok(CommandOutcome::Navigated)
            }
            (phase, _) => Err(CommandError::InvalidNavigation { phase }),
        }
    }

    fn try_select(&mut self, kind: ActionKind) -> Result<CommandOutcome, CommandError> {
        self.ensure_accepting_input()?;
        if self.phase == Phase::AbilityMenuOpen {
            self.phase = Phase::AwaitingAction;
        }
        self.pending_action = kind;
        self.execute(kind)
    }

    fn try_use_item(&mut self, name: &str, target: Side) -> Result<CommandOutcome, CommandError> {
        self.ensure_accepting_input()?;
        let Some(items) = self.items.as_mut() else {
            self.push_log("Items are unavailable in this arena.");
            return Err(CommandError::UnavailableAction {
                kind: ActionKind::Item,
            });
        };
        let result = items.use_item(name, &mut self.combatants[target.index()]);
        self.push_log(result.message.clone());
        Ok(CommandOutcome::ItemUsed(result))
    }

    /// Rejects input unless the controlled side is choosing an action.
    fn ensure_accepting_input(&self) -> Result<(), CommandError> {
        match self.phase {
            Phase::Ended => Err(CommandError::BattleEnded),
            Phase::AwaitingAction | Phase::AbilityMenuOpen => Ok(()),
            phase => Err(CommandError::InvalidNavigation { phase }),
        }
    }

    fn execute(&mut self, kind: ActionKind) -> Result<CommandOutcome, CommandError> {
        let actor = self.active_side;
        match kind {
            ActionKind::Attack => self.resolve_attack(actor),
            ActionKind::Defend => self.resolve_defend(actor),
            ActionKind::Special => {
                if self.abilities().is_empty() {
                    let line = format!("{} has no special abilities.", self.combatant(actor).name());
                    self.push_log(line);
                    return Err(CommandError::UnavailableAction { kind });
                }
                self.phase = Phase::AbilityMenuOpen;
                self.selected_ability = 1;
                Ok(CommandOutcome::Navigated)
            }
            ActionKind::Item => {
                self.push_log("Items are unavailable in this arena.");
                Err(CommandError::UnavailableAction { kind })
            }
        }
    }

    fn confirm_special(&mut self) -> Result<CommandOutcome, CommandError> {
        let ability = self
            .abilities()
            .get(self.selected_ability.saturating_sub(1))
            .copied()
            .ok_or(CommandError::InvalidNavigation { phase: self.phase })?;
        self.resolve_special_action(self.active_side, ability)
    }

    // ------------------------------------------------------------------
    // Shared helpers
    // ------------------------------------------------------------------

    fn push_log(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.observer.on_log(&line);
        self.log.push(line);
    }

    /// d100 for one roll slot of the current resolution.
    fn roll(&self, side: Side, context: RollContext) -> u32 {
        let seed = compute_seed(self.config.seed, self.nonce, side.index() as u32, context);
        self.rng.roll_d100(seed)
    }

    /// Splits the combatants into (actor, target).
    fn pair_mut(&mut self, actor: Side) -> (&mut Combatant, &mut Combatant) {
        let [a, b] = &mut self.combatants;
        match actor {
            Side::A => (a, b),
            Side::B => (b, a),
        }
    }
}

/// Builder for [`BattleController`].
pub struct BattleControllerBuilder {
    combatants: [Combatant; 2],
    config: BattleConfig,
    rng: Option<Box<dyn RngOracle>>,
    observer: Option<Box<dyn BattleObserver>>,
    items: Option<Box<dyn ItemService>>,
}

impl BattleControllerBuilder {
    fn new(a: Combatant, b: Combatant) -> Self {
        Self {
            combatants: [a, b],
            config: BattleConfig::default(),
            rng: None,
            observer: None,
            items: None,
        }
    }

    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn observer(self, observer: impl BattleObserver + 'static) -> Self {
        self.boxed_observer(Box::new(observer))
    }

    pub fn boxed_observer(mut self, observer: Box<dyn BattleObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn item_service(self, items: impl ItemService + 'static) -> Self {
        self.boxed_item_service(Box::new(items))
    }

    pub fn boxed_item_service(mut self, items: Box<dyn ItemService>) -> Self {
        self.items = Some(items);
        self
    }

    /// Resets both combatants for a fresh battle and opens on the
    /// controlled side's turn.
    pub fn build(self) -> BattleController {
        let mut combatants = self.combatants;
        for combatant in &mut combatants {
            combatant.reset_for_battle();
        }

        let mut controller = BattleController {
            combatants,
            config: self.config,
            active_side: self.config.player_side(),
            phase: Phase::AwaitingAction,
            pending_action: ActionKind::default(),
            selected_ability: 1,
            log: BattleLog::new(),
            winner: None,
            nonce: 0,
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRng)),
            observer: self.observer.unwrap_or_else(|| Box::new(NoopObserver)),
            items: self.items,
        };

        let opening = format!(
            "{} faces {}!",
            controller.combatants[0].name(),
            controller.combatants[1].name()
        );
        controller.push_log(opening);
        controller
    }
}
