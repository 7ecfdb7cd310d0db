//! Stat system for combatants.
//!
//! # Architecture
//!
//! ```text
//! [ Base constants (BattleConfig) ]
//!      +
//! [ Component deltas (StatDeltas, summed over the loadout) ]
//!      ↓
//! [ CombatStats ]  attack, defense, speed, accuracy, evasion, crit chance
//! [ ResourceMeter ] health / energy maximums (current values clamped down)
//! ```
//!
//! Derived values are recomputed from scratch whenever equipment changes;
//! combat effects (Ice/Acid debuffs) then scale the derived combat stats in
//! place until the next recomputation.

pub mod combat;
pub mod deltas;
pub mod kind;
pub mod resources;

pub use combat::CombatStats;
pub use deltas::StatDeltas;
pub use kind::StatName;
pub use resources::ResourceMeter;
