use crate::combatant::Combatant;

use super::{BattleSnapshot, Resolution, Side};

/// Receives battle notifications.
///
/// Injected at construction; the core has no other way to report what
/// happens. All methods default to doing nothing.
pub trait BattleObserver: Send {
    /// A line was appended to the battle log.
    fn on_log(&mut self, _line: &str) {}

    /// An action finished resolving. `snapshot` is taken after the turn flip.
    fn on_action_resolved(&mut self, _resolution: &Resolution, _snapshot: &BattleSnapshot) {}

    /// The battle reached `Ended`.
    fn on_battle_ended(&mut self, _winner: Side, _loser: &Combatant) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BattleObserver for NoopObserver {}
