//! Scoreboard sink that writes every score change to the log.
use async_trait::async_trait;
use tracing::info;

use kicker_runtime::{ScoreChange, ScoreEvent, ScoreListener};

/// Logs `white:blue` after each change.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogScoreboard;

#[async_trait]
impl ScoreListener for LogScoreboard {
    async fn on_score(&self, event: &ScoreEvent) -> kicker_runtime::Result<()> {
        let cause = match event.change {
            ScoreChange::Goal(team) => format!("goal {team}"),
            ScoreChange::GoalRemoved(team) => format!("goal removed {team}"),
            ScoreChange::Reset => "reset".to_owned(),
        };
        info!(
            "score updated ({}): white {} - {} blue",
            cause, event.score.white_score, event.score.blue_score
        );
        Ok(())
    }
}
