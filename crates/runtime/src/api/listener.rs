//! Asynchronous sink for score snapshots.
//!
//! Displays, heatmap renderers, or push transports implement
//! [`ScoreListener`] and are driven by
//! [`spawn_score_listener`](crate::spawn_score_listener).
use async_trait::async_trait;

use super::errors::Result;
use crate::events::ScoreEvent;

/// Receives every score change in the order it was applied.
///
/// A slow implementation only delays its own queue; once the queue overflows
/// the oldest snapshots are skipped and the worker logs the gap.
#[async_trait]
pub trait ScoreListener: Send + Sync {
    /// Handle one score change. Errors are logged and do not stop the worker.
    async fn on_score(&self, event: &ScoreEvent) -> Result<()>;
}
