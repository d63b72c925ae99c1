//! Runtime configuration structures and loaders.
use std::env;

use kicker_core::{GameConfig, TeamIds};

use crate::events::EventBus;

/// Runtime configuration shared by the engine and its event bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Per-topic queue length before slow subscribers start losing events.
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = EventBus::DEFAULT_CAPACITY;

    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }

    pub fn with_event_buffer_size(mut self, event_buffer_size: usize) -> Self {
        self.event_buffer_size = event_buffer_size.max(1);
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `KICKER_EVENT_BUFFER` - Per-topic event queue size (default: 100)
    /// - `KICKER_TEAM_WHITE_ID` - Raw identifier of the white team (default: 0)
    /// - `KICKER_TEAM_BLUE_ID` - Raw identifier of the blue team (default: 1)
    /// - `KICKER_HEATMAP_ACCURACY` - Heatmap sampling granularity (default: 100)
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    ///
    /// Same keys and fallbacks as [`RuntimeConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(capacity) = parse::<usize>(lookup("KICKER_EVENT_BUFFER")) {
            config.event_buffer_size = capacity.max(1);
        }

        let white =
            parse::<i64>(lookup("KICKER_TEAM_WHITE_ID")).unwrap_or(TeamIds::DEFAULT_WHITE);
        let blue = parse::<i64>(lookup("KICKER_TEAM_BLUE_ID")).unwrap_or(TeamIds::DEFAULT_BLUE);
        if white == blue {
            tracing::warn!(
                "KICKER_TEAM_WHITE_ID and KICKER_TEAM_BLUE_ID are both {}; using defaults",
                white
            );
        } else {
            config.game.team_ids = TeamIds::new(white, blue);
        }

        if let Some(accuracy) = parse::<u32>(lookup("KICKER_HEATMAP_ACCURACY")) {
            config.game.heatmap_accuracy = accuracy;
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn parse<T>(raw: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.event_buffer_size, 100);
        assert_eq!(config.event_buffer_size, EventBus::DEFAULT_CAPACITY);
        assert_eq!(config.game.team_ids, TeamIds::new(0, 1));
    }

    #[test]
    fn buffer_size_is_at_least_one() {
        let config = RuntimeConfig::default().with_event_buffer_size(0);
        assert_eq!(config.event_buffer_size, 1);
    }

    #[test]
    fn empty_lookup_keeps_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.event_buffer_size, RuntimeConfig::DEFAULT_EVENT_BUFFER_SIZE);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = from_pairs(&[
            ("KICKER_EVENT_BUFFER", "16"),
            ("KICKER_TEAM_WHITE_ID", "1"),
            ("KICKER_TEAM_BLUE_ID", " 2 "),
            ("KICKER_HEATMAP_ACCURACY", "25"),
        ]);
        assert_eq!(config.event_buffer_size, 16);
        assert_eq!(config.game.team_ids, TeamIds::new(1, 2));
        assert_eq!(config.game.heatmap_accuracy, 25);
    }

    #[test]
    fn unparseable_values_fall_back() {
        let config = from_pairs(&[
            ("KICKER_EVENT_BUFFER", "lots"),
            ("KICKER_TEAM_WHITE_ID", "white"),
            ("KICKER_TEAM_BLUE_ID", "7"),
            ("KICKER_HEATMAP_ACCURACY", "-5"),
        ]);
        assert_eq!(config.event_buffer_size, RuntimeConfig::DEFAULT_EVENT_BUFFER_SIZE);
        assert_eq!(config.game.team_ids, TeamIds::new(TeamIds::DEFAULT_WHITE, 7));
        assert_eq!(
            config.game.heatmap_accuracy,
            GameConfig::DEFAULT_HEATMAP_ACCURACY
        );
    }

    #[test]
    fn zero_buffer_is_clamped() {
        let config = from_pairs(&[("KICKER_EVENT_BUFFER", "0")]);
        assert_eq!(config.event_buffer_size, 1);
    }

    #[test]
    fn equal_aliases_keep_defaults() {
        let config = from_pairs(&[
            ("KICKER_TEAM_WHITE_ID", "5"),
            ("KICKER_TEAM_BLUE_ID", "5"),
        ]);
        assert_eq!(config.game.team_ids, TeamIds::default());
    }
}
