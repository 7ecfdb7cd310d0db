//! Arena client binary.
//!
//! ```bash
//! # Bundled content, random seed
//! cargo run -p arena-client
//!
//! # Replayable run with no thinking pause
//! ARENA_SEED=7 ARENA_THINKING_DELAY_MS=0 cargo run -p arena-client
//! ```

use anyhow::Result;

use arena_client::{ClientConfig, logging, series};
use battle_content::ContentFactory;
use battle_runtime::{ArenaRun, FileSaveRepository, SaveRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config.session_id)?;

    let factory = config
        .data_dir
        .clone()
        .map(ContentFactory::new)
        .unwrap_or_else(ContentFactory::bundled);
    tracing::info!("Content directory: {}", factory.data_dir().display());

    let repository = match &config.runtime.save_dir {
        Some(dir) => FileSaveRepository::new(dir)?,
        None => FileSaveRepository::in_data_dir()?,
    };
    tracing::info!("Save directory: {}", repository.base_dir().display());

    let mut run = ArenaRun::from_content(&factory)?;
    if let Some(save) = repository.load(&config.session_id)? {
        tracing::info!(
            "Resuming session {} at battle {}",
            config.session_id,
            save.progress.next_opponent + 1
        );
        run = run.resume(&save);
    }

    series::run_series(&config.runtime, &mut run, &repository, &config.session_id).await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
