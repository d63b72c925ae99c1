//! `kicker` binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment (and an optional `.env` file)
//! 2. The score engine
//! 3. A logging scoreboard subscribed to score changes
//! 4. The controller feed on stdin
//!
//! # Examples
//!
//! ```bash
//! printf 'goal 0\ngoal 1\nscore\n' | RUST_LOG=debug cargo run -p kicker-client
//! ```

use anyhow::{Context, Result};
use tokio::io::BufReader;

use kicker_client::{ClientConfig, Controller, LogScoreboard};
use kicker_runtime::{GameEngine, spawn_score_listener};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();

    tracing::info!("Starting kicker score engine");
    tracing::info!("API bind address: {}", config.server_address);
    tracing::info!("Team ids: {:?}", config.runtime.game.team_ids);
    tracing::debug!("Event buffer: {}", config.runtime.event_buffer_size);

    let engine = GameEngine::new(config.runtime);
    let scoreboard = spawn_score_listener(&engine, LogScoreboard);

    let controller = Controller::new(engine);
    let applied = controller
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .context("reading controller feed")?;

    tracing::info!("Controller feed closed after {} commands", applied);

    // Dropping the last engine handle closes the bus and stops the scoreboard.
    drop(controller);
    scoreboard.await.context("scoreboard task failed")?;

    tracing::info!("Shutdown complete");
    Ok(())
}
