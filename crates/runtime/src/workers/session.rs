//! Battle session worker.
//!
//! Owns the [`BattleController`] for one battle, applies handle commands in
//! order, and runs the enemy side after the configured thinking delay.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use battle_core::{
    ActionKind, BattleController, BattleReport, BattleSnapshot, CommandOutcome, NavCommand, Side,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, SessionEvent};

/// Commands that can be sent to the session worker.
pub enum Command {
    Navigate {
        command: NavCommand,
        reply: oneshot::Sender<Result<CommandOutcome>>,
    },
    Select {
        kind: ActionKind,
        reply: oneshot::Sender<Result<CommandOutcome>>,
    },
    UseItem {
        name: String,
        target: Side,
        reply: oneshot::Sender<Result<CommandOutcome>>,
    },
    Snapshot {
        reply: oneshot::Sender<BattleSnapshot>,
    },
    Abandon {
        reply: oneshot::Sender<()>,
    },
    /// Stop once the battle is over (or right away if it already is).
    Finish,
}

/// A scheduled enemy turn. Dropping it cancels the timer.
struct Thinking {
    generation: u64,
    timer: JoinHandle<()>,
}

impl Drop for Thinking {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Background worker that owns the battle for the life of the session.
pub struct SessionWorker {
    controller: BattleController,
    command_rx: mpsc::Receiver<Command>,
    due_tx: mpsc::Sender<u64>,
    due_rx: mpsc::Receiver<u64>,
    event_bus: EventBus,
    thinking_delay: Duration,
    thinking: Option<Thinking>,
    generation: u64,
    abandoned: bool,
    finish_requested: bool,
    announced_end: bool,
}

impl SessionWorker {
    pub fn new(
        controller: BattleController,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        thinking_delay: Duration,
    ) -> Self {
        let (due_tx, due_rx) = mpsc::channel(4);
        Self {
            controller,
            command_rx,
            due_tx,
            due_rx,
            event_bus,
            thinking_delay,
            thinking: None,
            generation: 0,
            abandoned: false,
            finish_requested: false,
            announced_end: false,
        }
    }

    /// Runs until the owner asks to finish, or every handle is dropped, and
    /// hands the combatants back.
    pub async fn run(mut self) -> BattleReport {
        let snapshot = self.controller.snapshot();
        self.event_bus.publish(Event::Session(SessionEvent::Started {
            a: snapshot.combatant(Side::A).name().to_owned(),
            b: snapshot.combatant(Side::B).name().to_owned(),
        }));
        self.after_step();

        loop {
            tokio::select! {
                command = self.command_rx.recv() => {
                    let Some(command) = command else {
                        debug!("all session handles dropped, stopping worker");
                        break;
                    };
                    if let Flow::Exit = self.handle_command(command) {
                        break;
                    }
                }
                Some(generation) = self.due_rx.recv() => {
                    self.enemy_turn_due(generation);
                    if self.should_exit() {
                        break;
                    }
                }
            }
        }

        self.cancel_thinking();
        if !self.announced_end {
            debug!("session closed before the battle ended");
            self.event_bus
                .publish(Event::Session(SessionEvent::Finished { winner: None }));
        }

        self.controller.finish()
    }

    fn handle_command(&mut self, command: Command) -> Flow {
        match command {
            Command::Navigate { command, reply } => {
                let outcome = self.apply(|controller| controller.handle(command));
                if reply.send(outcome).is_err() {
                    debug!("Navigate reply channel closed (caller dropped)");
                }
            }
            Command::Select { kind, reply } => {
                let outcome = self.apply(|controller| controller.select(kind));
                if reply.send(outcome).is_err() {
                    debug!("Select reply channel closed (caller dropped)");
                }
            }
            Command::UseItem {
                name,
                target,
                reply,
            } => {
                let outcome = self.apply(|controller| controller.use_item(&name, target));
                if reply.send(outcome).is_err() {
                    debug!("UseItem reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(self.controller.snapshot()).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Abandon { reply } => {
                self.abandon();
                if reply.send(()).is_err() {
                    debug!("Abandon reply channel closed (caller dropped)");
                }
            }
            Command::Finish => {
                self.finish_requested = true;
            }
        }

        if self.should_exit() {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    /// Feeds one player input to the controller.
    fn apply(
        &mut self,
        input: impl FnOnce(&mut BattleController) -> CommandOutcome,
    ) -> Result<CommandOutcome> {
        if self.abandoned {
            return Err(RuntimeError::SessionAbandoned);
        }
        let outcome = input(&mut self.controller);
        self.after_step();
        Ok(outcome)
    }

    fn enemy_turn_due(&mut self, generation: u64) {
        match self.thinking.take() {
            Some(thinking) if thinking.generation == generation => {
                let outcome = self.controller.run_enemy_turn();
                debug!(?outcome, "enemy turn resolved");
                self.after_step();
            }
            other => {
                self.thinking = other;
                warn!(generation, "discarding stale enemy turn signal");
            }
        }
    }

    /// Schedules the enemy when its turn comes up and announces the end of
    /// the battle once.
    fn after_step(&mut self) {
        if self.controller.is_ended() {
            if !self.announced_end {
                self.announced_end = true;
                let winner = self.controller.winner();
                info!(?winner, "battle session finished");
                self.event_bus
                    .publish(Event::Session(SessionEvent::Finished { winner }));
            }
            return;
        }

        if self.controller.is_enemy_turn() && self.thinking.is_none() && !self.abandoned {
            self.schedule_enemy_turn();
        }
    }

    fn schedule_enemy_turn(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let delay = self.thinking_delay;
        let due_tx = self.due_tx.clone();

        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if due_tx.send(generation).await.is_err() {
                debug!(generation, "session worker gone before enemy turn was due");
            }
        });
        debug!(generation, ?delay, "enemy is thinking");
        self.thinking = Some(Thinking { generation, timer });
    }

    fn cancel_thinking(&mut self) {
        if let Some(thinking) = self.thinking.take() {
            warn!(
                generation = thinking.generation,
                "cancelled pending enemy turn"
            );
        }
    }

    fn abandon(&mut self) {
        if self.abandoned || self.controller.is_ended() {
            return;
        }
        self.abandoned = true;
        self.cancel_thinking();
        info!("battle session abandoned");
        self.event_bus.publish(Event::Session(SessionEvent::Abandoned));
    }

    fn should_exit(&self) -> bool {
        self.finish_requested && (self.controller.is_ended() || self.abandoned)
    }
}
