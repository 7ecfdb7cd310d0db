//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive one battle.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use battle_core::{
    BattleConfig, BattleController, BattleObserver, BattleReport, Combatant, ItemService,
};

use crate::api::{Result, RuntimeError, SessionHandle};
use crate::events::{Event, EventBridge, EventBus, Topic};
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Pause before the enemy side acts.
    pub thinking_delay: Duration,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Battle seed; fresh entropy per battle when unset.
    pub seed: Option<u64>,
    pub save_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            thinking_delay: Duration::from_millis(600),
            command_buffer_size: 32,
            event_buffer_size: 100,
            seed: None,
            save_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_THINKING_DELAY_MS` - Enemy thinking delay (default: 600)
    /// - `ARENA_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `ARENA_EVENT_BUFFER` - Per-topic event capacity (default: 100)
    /// - `ARENA_SEED` - Fixed battle seed (default: random)
    /// - `ARENA_SAVE_DIR` - Directory for save data (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(millis) = read_env::<u64>("ARENA_THINKING_DELAY_MS") {
            config.thinking_delay = Duration::from_millis(millis);
        }
        if let Some(capacity) = read_env::<usize>("ARENA_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("ARENA_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        config.seed = read_env::<u64>("ARENA_SEED");
        config.save_dir = env::var("ARENA_SAVE_DIR").ok().map(PathBuf::from);

        config
    }

    fn battle_config(&self) -> BattleConfig {
        BattleConfig::with_seed(self.seed.unwrap_or_else(rand::random))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates one battle session
///
/// Runtime owns the worker; [`SessionHandle`] is the cloneable façade for
/// clients. Dropping the runtime stops the worker and any pending enemy turn.
pub struct Runtime {
    handle: SessionHandle,
    worker: Option<JoinHandle<BattleReport>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this session
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Subscribe to one event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Wait for the battle to end (or for an abandon) and take the
    /// combatants back.
    pub async fn finish(mut self) -> Result<BattleReport> {
        self.handle.request_finish().await?;
        let worker = self.worker.take().ok_or(RuntimeError::CommandChannelClosed)?;
        let report = worker.await.map_err(RuntimeError::WorkerJoin)?;
        info!(winner = ?report.winner, "session finished");
        Ok(report)
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            debug!("runtime dropped with a live session, aborting worker");
            worker.abort();
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    combatants: Option<(Combatant, Combatant)>,
    event_bus: Option<EventBus>,
    bridge: bool,
    observer: Option<Box<dyn BattleObserver>>,
    items: Option<Box<dyn ItemService>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            combatants: None,
            event_bus: None,
            bridge: false,
            observer: None,
            items: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the player (side A) and the enemy (side B). Required.
    pub fn combatants(mut self, a: Combatant, b: Combatant) -> Self {
        self.combatants = Some((a, b));
        self
    }

    /// Publish through an existing bus, e.g. one already subscribed to so
    /// the opening log line is not missed.
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Route controller notifications to tracing and the event bus.
    pub fn observer_bridge(mut self) -> Self {
        self.bridge = true;
        self
    }

    /// Extra observer; still called when the bridge is enabled.
    pub fn observer(mut self, observer: impl BattleObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn item_service(mut self, items: impl ItemService + 'static) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Build the runtime and start the session worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let (a, b) = self.combatants.ok_or(RuntimeError::MissingCombatants)?;

        let event_bus = self
            .event_bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let handle = SessionHandle::new(command_tx, event_bus.clone());

        let battle_config = self.config.battle_config();
        info!(seed = battle_config.seed, a = a.name(), b = b.name(), "starting battle session");

        let mut builder = BattleController::builder(a, b).config(battle_config);
        builder = match (self.bridge, self.observer) {
            (true, Some(inner)) => {
                builder.observer(EventBridge::new(event_bus.clone()).with_inner(inner))
            }
            (true, None) => builder.observer(EventBridge::new(event_bus.clone())),
            (false, Some(inner)) => builder.boxed_observer(inner),
            (false, None) => builder,
        };
        if let Some(items) = self.items {
            builder = builder.boxed_item_service(items);
        }

        let worker = SessionWorker::new(
            builder.build(),
            command_rx,
            event_bus,
            self.config.thinking_delay,
        );
        let worker = tokio::spawn(worker.run());

        Ok(Runtime {
            handle,
            worker: Some(worker),
        })
    }
}
