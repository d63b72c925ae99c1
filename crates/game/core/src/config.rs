//! Externally supplied match constants.
//!
//! None of these values affect scoring rules. They tell the engine how the
//! controller and API layers spell team identifiers, and give heatmap
//! consumers the table geometry.

use crate::error::{GameError, Result};
use crate::team::Team;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub team_ids: TeamIds,
    pub layout: TableLayout,
    /// Heatmap sampling granularity, passed through to display consumers.
    pub heatmap_accuracy: u32,
}

impl GameConfig {
    pub const DEFAULT_HEATMAP_ACCURACY: u32 = 100;

    pub fn new() -> Self {
        Self {
            team_ids: TeamIds::default(),
            layout: TableLayout::default(),
            heatmap_accuracy: Self::DEFAULT_HEATMAP_ACCURACY,
        }
    }

    pub fn with_team_ids(mut self, team_ids: TeamIds) -> Self {
        self.team_ids = team_ids;
        self
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_heatmap_accuracy(mut self, heatmap_accuracy: u32) -> Self {
        self.heatmap_accuracy = heatmap_accuracy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw integer aliases the controller and API layers use for each team.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamIds {
    pub white: i64,
    pub blue: i64,
}

impl TeamIds {
    pub const DEFAULT_WHITE: i64 = 0;
    pub const DEFAULT_BLUE: i64 = 1;

    pub const fn new(white: i64, blue: i64) -> Self {
        Self { white, blue }
    }

    /// Resolves a raw identifier to a team.
    ///
    /// When both aliases are configured to the same value the white team wins;
    /// such a configuration is a caller mistake but never panics.
    pub fn resolve(&self, raw: i64) -> Result<Team> {
        if raw == self.white {
            Ok(Team::White)
        } else if raw == self.blue {
            Ok(Team::Blue)
        } else {
            Err(GameError::InvalidTeam(raw))
        }
    }
}

impl Default for TeamIds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WHITE, Self::DEFAULT_BLUE)
    }
}

/// Zone numbers reported by the table sensors, grouped by table half.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableLayout {
    pub white_zones: Vec<u32>,
    pub blue_zones: Vec<u32>,
}

impl TableLayout {
    pub const DEFAULT_WHITE_ZONES: [u32; 4] = [20, 21, 23, 25];
    pub const DEFAULT_BLUE_ZONES: [u32; 4] = [22, 24, 26, 27];

    pub fn new(white_zones: Vec<u32>, blue_zones: Vec<u32>) -> Self {
        Self {
            white_zones,
            blue_zones,
        }
    }

    /// Which team's half a sensor zone belongs to, if any.
    pub fn side_of(&self, zone: u32) -> Option<Team> {
        if self.white_zones.contains(&zone) {
            Some(Team::White)
        } else if self.blue_zones.contains(&zone) {
            Some(Team::Blue)
        } else {
            None
        }
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WHITE_ZONES.to_vec(),
            Self::DEFAULT_BLUE_ZONES.to_vec(),
        )
    }
}
