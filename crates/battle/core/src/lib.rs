//! Deterministic turn-based battle simulation.
//!
//! `battle-core` defines the canonical rules for a two-party robot battle:
//! equipment components and the stats they derive, the special-ability
//! catalog, the combat resolver formulas, the enemy policy, and the
//! [`BattleController`] state machine that drives a battle to completion.
//!
//! The crate is synchronous and free of process-wide state. Randomness comes
//! from an injected [`RngOracle`], and everything a caller wants to observe is
//! reported through an injected [`BattleObserver`]. Async scheduling (the
//! enemy "thinking" delay) lives in the runtime crate.
pub mod ability;
pub mod ai;
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod component;
pub mod config;
pub mod error;
pub mod rng;
pub mod stats;

pub use ability::{AbilityCatalog, AbilityDescriptor};
pub use ai::{ActionIntent, choose_enemy_action};
pub use battle::{
    ActionKind, BattleController, BattleControllerBuilder, BattleLog, BattleObserver,
    BattleReport, BattleSnapshot, CommandError, CommandOutcome, ItemResult, ItemService,
    NavCommand, NoopObserver, Phase, Resolution, ResolvedAction, Side,
};
pub use combat::{
    AttackOutcome, AttackResult, AttackRolls, CombatError, SideEffect, SpecialOutcome,
    resolve_basic_attack, resolve_special,
};
pub use combatant::{Combatant, Loadout};
#[cfg(feature = "serde")]
pub use combatant::{CombatantSnapshot, ComponentRecord};
pub use component::{Component, ComponentBuilder, Element, Rarity, SlotType};
pub use config::BattleConfig;
pub use error::{BattleFault, ErrorSeverity};
pub use rng::{FixedRoll, PcgRng, RngOracle, RollContext, compute_seed};
pub use stats::{CombatStats, ResourceMeter, StatDeltas, StatName};
