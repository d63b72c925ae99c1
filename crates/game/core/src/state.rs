//! Score record and manual-correction audit counters.
//!
//! These are value types. The runtime owns the live instance and mutates it
//! exclusively through the methods below, which keep every counter
//! non-negative.

use crate::team::{ScoreAction, Team};

/// Live goal tally for both teams.
///
/// Serialized as `{ "blueScore": n, "whiteScore": n }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Score {
    pub blue_score: u32,
    pub white_score: u32,
}

impl Score {
    pub const ZERO: Self = Self {
        blue_score: 0,
        white_score: 0,
    };

    pub const fn new(white_score: u32, blue_score: u32) -> Self {
        Self {
            blue_score,
            white_score,
        }
    }

    pub const fn of(&self, team: Team) -> u32 {
        match team {
            Team::White => self.white_score,
            Team::Blue => self.blue_score,
        }
    }

    fn slot_mut(&mut self, team: Team) -> &mut u32 {
        match team {
            Team::White => &mut self.white_score,
            Team::Blue => &mut self.blue_score,
        }
    }

    pub fn increment(&mut self, team: Team) {
        let slot = self.slot_mut(team);
        *slot = slot.saturating_add(1);
    }

    /// Removes one goal, floored at zero. Returns whether the tally changed.
    pub fn decrement(&mut self, team: Team) -> bool {
        let slot = self.slot_mut(team);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

/// How many manual corrections of each kind were applied per team.
///
/// Independent of [`Score`]: recording a correction here never changes the
/// live tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ManualGoals {
    pub added_blue: u32,
    pub subtracted_blue: u32,
    pub added_white: u32,
    pub subtracted_white: u32,
}

impl ManualGoals {
    pub const ZERO: Self = Self {
        added_blue: 0,
        subtracted_blue: 0,
        added_white: 0,
        subtracted_white: 0,
    };

    pub const fn count(&self, team: Team, action: ScoreAction) -> u32 {
        match (team, action) {
            (Team::Blue, ScoreAction::Add) => self.added_blue,
            (Team::Blue, ScoreAction::Subtract) => self.subtracted_blue,
            (Team::White, ScoreAction::Add) => self.added_white,
            (Team::White, ScoreAction::Subtract) => self.subtracted_white,
        }
    }

    /// Bumps exactly the counter selected by `(team, action)`.
    pub fn record(&mut self, team: Team, action: ScoreAction) {
        let slot = match (team, action) {
            (Team::Blue, ScoreAction::Add) => &mut self.added_blue,
            (Team::Blue, ScoreAction::Subtract) => &mut self.subtracted_blue,
            (Team::White, ScoreAction::Add) => &mut self.added_white,
            (Team::White, ScoreAction::Subtract) => &mut self.subtracted_white,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

/// Score and audit counters captured together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    pub score: Score,
    pub manual_goals: ManualGoals,
}
