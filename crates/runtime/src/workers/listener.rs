//! Score listener worker.
//!
//! Pumps `Topic::Score` events from the bus into a [`ScoreListener`]. The
//! worker owns only a receiver, so it stops once every engine handle has been
//! dropped and the channel closes.

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::ScoreListener;
use crate::engine::GameEngine;
use crate::events::{Event, Topic};

/// Subscribe `listener` to score changes and drive it on a background task.
///
/// The subscription is taken before this function returns, so every change
/// applied afterwards reaches the listener unless it falls more than the
/// configured buffer behind.
pub fn spawn_score_listener<L>(engine: &GameEngine, listener: L) -> JoinHandle<()>
where
    L: ScoreListener + 'static,
{
    let rx = engine.subscribe(Topic::Score);
    tokio::spawn(run(rx, listener))
}

async fn run<L: ScoreListener>(mut rx: broadcast::Receiver<Event>, listener: L) {
    info!("score listener started");

    loop {
        match rx.recv().await {
            Ok(Event::Score(event)) => {
                if let Err(err) = listener.on_score(&event).await {
                    warn!("score listener error: {}", err);
                }
            }
            Ok(other) => {
                debug!("score listener ignoring {:?} event", other.topic());
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("score listener fell behind, skipped {} updates", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }

    info!("score listener stopped");
}
