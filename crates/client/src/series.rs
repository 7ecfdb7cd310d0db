//! Drives a whole arena run through the runtime.

use anyhow::Result;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};

use battle_core::{BattleReport, Combatant, Side};
use battle_runtime::{
    ArenaRun, Event, EventBus, LogEvent, Runtime, RuntimeConfig, SaveRepository, Topic,
};

use crate::autopilot;

/// Fights every remaining battle of `run`, saving after each one.
pub async fn run_series(
    config: &RuntimeConfig,
    run: &mut ArenaRun,
    repository: &dyn SaveRepository,
    slot: &str,
) -> Result<()> {
    let mut rng = rand::thread_rng();

    while let Some((player, opponent)) = run.next_battle()? {
        println!(
            "\n=== Battle {} of {}: {} vs {} ===",
            run.progress().battles_fought() + 1,
            run.length(),
            player.name(),
            opponent.name()
        );

        let report = fight(config, player, opponent).await?;
        let record = run.record(report, &mut rng);

        match (record.winner, &record.salvaged) {
            (Some(Side::A), Some(part)) if record.equipped => {
                println!("Victory! Salvaged {} and bolted it on.", part.name());
            }
            (Some(Side::A), Some(part)) => {
                println!("Victory! Salvaged {} for the scrap pile.", part.name());
            }
            (Some(Side::A), None) => println!("Victory!"),
            (Some(Side::B), _) => println!("Defeat against {}.", record.opponent),
            (None, _) => println!("Battle against {} was abandoned.", record.opponent),
        }

        repository.save(slot, &run.save_data())?;
        debug!(slot, "progress saved");
    }

    let progress = run.progress();
    println!(
        "\n{} finished the {}: {} wins, {} losses.",
        run.player().name(),
        run.rules().arena.name,
        progress.wins,
        progress.losses
    );
    Ok(())
}

/// One battle with the player on side A, printed line by line.
async fn fight(config: &RuntimeConfig, player: Combatant, opponent: Combatant) -> Result<BattleReport> {
    let bus = EventBus::with_capacity(config.event_buffer_size);
    let mut log = bus.subscribe(Topic::Log);
    let printer = tokio::spawn(async move {
        loop {
            match log.recv().await {
                Ok(Event::Log(LogEvent::Line(line))) => println!("  {line}"),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "log printer lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let runtime = Runtime::builder()
        .config(config.clone())
        .combatants(player, opponent)
        .event_bus(bus.clone())
        .observer_bridge()
        .build()?;
    let handle = runtime.handle();
    let mut battle = runtime.subscribe(Topic::Battle);

    loop {
        let snapshot = handle.snapshot().await?;
        if snapshot.is_ended() {
            break;
        }
        match autopilot::next_command(&snapshot, Side::A) {
            Some(command) => {
                handle.send(command).await?;
            }
            // Enemy turn: wait for its resolution.
            None => match battle.recv().await {
                Ok(_) | Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            },
        }
    }

    drop(handle);
    drop(battle);
    let report = runtime.finish().await?;
    drop(bus);
    printer.await?;

    info!(winner = ?report.winner, "battle complete");
    Ok(report)
}
