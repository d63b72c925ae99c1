//! Line-oriented controller feed.
//!
//! One command per line:
//!
//! ```text
//! goal <team_id>
//! ungoal <team_id>
//! manual <team_id> <add|sub>
//! reset
//! score
//! ```
//!
//! Team identifiers and actions are passed to the engine unvalidated so the
//! engine's own rules decide what is accepted.
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use kicker_runtime::{GameEngine, GameSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerCommand {
    Goal { team_id: i64 },
    Ungoal { team_id: i64 },
    Manual { team_id: i64, action: String },
    Reset,
    Score,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("{command} expects {expected} argument(s)")]
    Arity {
        command: &'static str,
        expected: usize,
    },

    #[error("team id {0:?} is not an integer")]
    TeamId(String),
}

impl FromStr for ControllerCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = parts.collect();

        let arity = |command: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(CommandError::Arity { command, expected })
            }
        };

        match name {
            "goal" => {
                arity("goal", 1)?;
                Ok(Self::Goal {
                    team_id: parse_team_id(args[0])?,
                })
            }
            "ungoal" => {
                arity("ungoal", 1)?;
                Ok(Self::Ungoal {
                    team_id: parse_team_id(args[0])?,
                })
            }
            "manual" => {
                arity("manual", 2)?;
                Ok(Self::Manual {
                    team_id: parse_team_id(args[0])?,
                    action: args[1].to_owned(),
                })
            }
            "reset" => {
                arity("reset", 0)?;
                Ok(Self::Reset)
            }
            "score" => {
                arity("score", 0)?;
                Ok(Self::Score)
            }
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

fn parse_team_id(raw: &str) -> Result<i64, CommandError> {
    raw.parse().map_err(|_| CommandError::TeamId(raw.to_owned()))
}

/// Applies controller commands to an engine handle.
#[derive(Debug, Clone)]
pub struct Controller {
    engine: GameEngine,
}

impl Controller {
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    /// Apply one command and return the resulting state.
    pub fn apply(&self, command: &ControllerCommand) -> kicker_runtime::Result<GameSnapshot> {
        match command {
            ControllerCommand::Goal { team_id } => {
                self.engine.add_goal(*team_id)?;
            }
            ControllerCommand::Ungoal { team_id } => {
                self.engine.sub_goal(*team_id)?;
            }
            ControllerCommand::Manual { team_id, action } => {
                self.engine.update_manual_goals(*team_id, action)?;
            }
            ControllerCommand::Reset => {
                self.engine.reset_score();
            }
            ControllerCommand::Score => {}
        }
        Ok(self.engine.snapshot())
    }

    /// Read commands until EOF. Bad lines are logged and skipped.
    ///
    /// Returns the number of commands that were applied.
    pub async fn run<R>(&self, input: R) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut applied = 0;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command = match line.parse::<ControllerCommand>() {
                Ok(command) => command,
                Err(err) => {
                    warn!("ignoring controller line {:?}: {}", line, err);
                    continue;
                }
            };

            match self.apply(&command) {
                Ok(snapshot) => {
                    applied += 1;
                    if command == ControllerCommand::Score {
                        info!(
                            "score: white {} - {} blue, manual {:?}",
                            snapshot.score.white_score,
                            snapshot.score.blue_score,
                            snapshot.manual_goals
                        );
                    }
                }
                Err(err) => warn!("controller command {:?} rejected: {}", command, err),
            }
        }

        Ok(applied)
    }
}
