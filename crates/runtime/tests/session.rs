//! Session worker behaviour under paused tokio time.

use std::time::Duration;

use battle_core::{
    ActionKind, CommandOutcome, Combatant, Component, NavCommand, Phase, Side, SlotType, StatName,
};
use battle_runtime::{
    BattleEvent, Event, EventBus, LogEvent, Runtime, RuntimeConfig, RuntimeError, SessionEvent,
    Topic,
};

const DELAY: Duration = Duration::from_millis(600);

fn config() -> RuntimeConfig {
    RuntimeConfig {
        thinking_delay: DELAY,
        seed: Some(42),
        ..RuntimeConfig::default()
    }
}

/// Hits for 189 at 90% and cannot be out-traded by a bare frame.
fn bruiser() -> Combatant {
    Combatant::new("Bruiser").with_components([Component::builder("Hammer", SlotType::RightArm)
        .delta(StatName::Attack, 200)
        .delta(StatName::Accuracy, 90)
        .build()])
}

fn runtime(a: Combatant, b: Combatant) -> Runtime {
    Runtime::builder()
        .config(config())
        .combatants(a, b)
        .observer_bridge()
        .build()
        .expect("runtime builds")
}

#[tokio::test(start_paused = true)]
async fn enemy_waits_out_the_thinking_delay() {
    let runtime = runtime(Combatant::new("Alpha"), Combatant::new("Beta"));
    let handle = runtime.handle();

    let outcome = handle.select(ActionKind::Defend).await.unwrap();
    assert!(outcome.consumed_turn());

    let thinking = handle.snapshot().await.unwrap();
    assert_eq!(thinking.phase, Phase::EnemyThinking);
    assert_eq!(thinking.active_side, Side::B);

    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert_eq!(handle.snapshot().await.unwrap().phase, Phase::EnemyThinking);

    tokio::time::sleep(Duration::from_millis(2)).await;
    let after = handle.snapshot().await.unwrap();
    assert_eq!(after.phase, Phase::AwaitingAction);
    assert_eq!(after.active_side, Side::A);
}

#[tokio::test(start_paused = true)]
async fn input_during_enemy_turn_is_ignored() {
    let runtime = runtime(Combatant::new("Alpha"), Combatant::new("Beta"));
    let handle = runtime.handle();

    handle.select(ActionKind::Defend).await.unwrap();
    let outcome = handle.send(NavCommand::Confirm).await.unwrap();

    assert_eq!(outcome, CommandOutcome::Ignored);
    assert_eq!(handle.snapshot().await.unwrap().active_side, Side::B);
}

#[tokio::test(start_paused = true)]
async fn abandon_cancels_the_pending_enemy_turn() {
    let runtime = runtime(Combatant::new("Alpha"), Combatant::new("Beta"));
    let handle = runtime.handle();
    let mut session = runtime.subscribe(Topic::Session);

    handle.select(ActionKind::Defend).await.unwrap();
    handle.abandon().await.unwrap();
    tokio::time::sleep(DELAY * 5).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, Phase::EnemyThinking);
    assert_eq!(snapshot.active_side, Side::B);
    assert!(matches!(
        handle.send(NavCommand::Confirm).await,
        Err(RuntimeError::SessionAbandoned)
    ));
    assert!(matches!(
        session.recv().await.unwrap(),
        Event::Session(SessionEvent::Started { .. })
    ));
    assert!(matches!(
        session.recv().await.unwrap(),
        Event::Session(SessionEvent::Abandoned)
    ));

    let report = runtime.finish().await.unwrap();
    assert_eq!(report.winner, None);
    assert_eq!(report.combatant(Side::A).name(), "Alpha");
}

#[tokio::test(start_paused = true)]
async fn battle_runs_to_completion_through_the_handle() {
    let runtime = runtime(bruiser(), Combatant::new("Dummy"));
    let handle = runtime.handle();
    let mut battle = runtime.subscribe(Topic::Battle);

    for _ in 0..200 {
        let snapshot = handle.snapshot().await.unwrap();
        if snapshot.is_ended() {
            break;
        }
        if snapshot.phase == Phase::AwaitingAction && snapshot.active_side == Side::A {
            handle.send(NavCommand::Confirm).await.unwrap();
        } else {
            tokio::time::sleep(DELAY).await;
        }
    }

    let report = runtime.finish().await.unwrap();
    assert_eq!(report.winner, Some(Side::A));
    assert!(report.combatant(Side::B).is_defeated());

    let mut ended = None;
    while let Ok(event) = battle.try_recv() {
        if let Event::Battle(BattleEvent::BattleEnded { winner, loser }) = event {
            ended = Some((winner, loser.name().to_owned()));
        }
    }
    assert_eq!(ended, Some((Side::A, "Dummy".to_owned())));
}

#[tokio::test]
async fn preset_bus_sees_the_opening_line() {
    let bus = EventBus::with_capacity(16);
    let mut log = bus.subscribe(Topic::Log);

    let _runtime = Runtime::builder()
        .config(config())
        .combatants(Combatant::new("Alpha"), Combatant::new("Beta"))
        .event_bus(bus)
        .observer_bridge()
        .build()
        .unwrap();

    match log.recv().await.unwrap() {
        Event::Log(LogEvent::Line(line)) => assert_eq!(line, "Alpha faces Beta!"),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn builder_requires_combatants() {
    let result = Runtime::builder().config(config()).build();
    assert!(matches!(result, Err(RuntimeError::MissingCombatants)));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_runtime_stops_the_session() {
    let runtime = runtime(Combatant::new("Alpha"), Combatant::new("Beta"));
    let handle = runtime.handle();
    handle.select(ActionKind::Defend).await.unwrap();

    drop(runtime);
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert!(handle.snapshot().await.is_err());
}
