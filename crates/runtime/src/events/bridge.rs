//! Bridges controller notifications onto tracing and the event bus.

use battle_core::{BattleObserver, BattleSnapshot, Combatant, Resolution, ResolvedAction, Side};
use tracing::{debug, info};

use super::bus::{Event, EventBus};
use super::types::{BattleEvent, LogEvent};

/// [`BattleObserver`] that republishes every controller notification.
///
/// Log lines go to `debug!` and [`LogEvent::Line`]; resolutions and the end
/// of the battle go to `info!` and the battle topic. An optional inner
/// observer still sees every call.
pub struct EventBridge {
    bus: EventBus,
    inner: Option<Box<dyn BattleObserver>>,
}

impl EventBridge {
    pub fn new(bus: EventBus) -> Self {
        Self { bus, inner: None }
    }

    pub fn with_inner(mut self, inner: Box<dyn BattleObserver>) -> Self {
        self.inner = Some(inner);
        self
    }
}

impl BattleObserver for EventBridge {
    fn on_log(&mut self, line: &str) {
        debug!(target: "battle::log", "{line}");
        self.bus.publish(Event::Log(LogEvent::Line(line.to_owned())));
        if let Some(inner) = self.inner.as_mut() {
            inner.on_log(line);
        }
    }

    fn on_action_resolved(&mut self, resolution: &Resolution, snapshot: &BattleSnapshot) {
        let action = match &resolution.action {
            ResolvedAction::Attack { .. } => "attack",
            ResolvedAction::Evaded => "evaded",
            ResolvedAction::Defend => "defend",
            ResolvedAction::Special(_) => "special",
        };
        info!(
            actor = %resolution.actor,
            action,
            a_health = snapshot.combatant(Side::A).health(),
            b_health = snapshot.combatant(Side::B).health(),
            "action resolved"
        );

        self.bus.publish(Event::Battle(BattleEvent::ActionResolved {
            resolution: resolution.clone(),
            snapshot: Box::new(snapshot.clone()),
        }));
        if let Some(inner) = self.inner.as_mut() {
            inner.on_action_resolved(resolution, snapshot);
        }
    }

    fn on_battle_ended(&mut self, winner: Side, loser: &Combatant) {
        info!(%winner, loser = loser.name(), "battle ended");

        self.bus.publish(Event::Battle(BattleEvent::BattleEnded {
            winner,
            loser: Box::new(loser.clone()),
        }));
        if let Some(inner) = self.inner.as_mut() {
            inner.on_battle_ended(winner, loser);
        }
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{BattleController, FixedRoll};

    use super::*;
    use crate::events::Topic;

    #[test]
    fn opening_line_is_published() {
        let bus = EventBus::with_capacity(8);
        let mut rx = bus.subscribe(Topic::Log);

        let _battle = BattleController::builder(Combatant::new("Alpha"), Combatant::new("Beta"))
            .rng(FixedRoll(50))
            .observer(EventBridge::new(bus.clone()))
            .build();

        match rx.try_recv() {
            Ok(Event::Log(LogEvent::Line(line))) => assert_eq!(line, "Alpha faces Beta!"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn resolutions_reach_the_battle_topic() {
        let bus = EventBus::with_capacity(8);
        let mut rx = bus.subscribe(Topic::Battle);

        let mut battle = BattleController::builder(Combatant::new("Alpha"), Combatant::new("Beta"))
            .rng(FixedRoll(50))
            .observer(EventBridge::new(bus.clone()))
            .build();
        battle.defend();

        match rx.try_recv() {
            Ok(Event::Battle(BattleEvent::ActionResolved { resolution, snapshot })) => {
                assert_eq!(resolution.actor, Side::A);
                assert_eq!(resolution.action, ResolvedAction::Defend);
                assert_eq!(snapshot.active_side, Side::B);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
