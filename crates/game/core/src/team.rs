//! Team and manual-correction identifiers.

use core::str::FromStr;

use crate::error::{GameError, Result};

/// One side of the table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Team {
    White,
    Blue,
}

/// Direction of a manual goal correction.
///
/// External callers send `"add"` or `"sub"`; matching is exact.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreAction {
    #[strum(serialize = "add")]
    #[cfg_attr(feature = "serde", serde(rename = "add"))]
    Add,
    #[strum(serialize = "sub")]
    #[cfg_attr(feature = "serde", serde(rename = "sub"))]
    Subtract,
}

impl ScoreAction {
    /// Parses an external action string, reporting [`GameError::InvalidAction`]
    /// for anything other than `add` or `sub`.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::from_str(raw).map_err(|_| GameError::InvalidAction(raw.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_actions() {
        assert_eq!(ScoreAction::parse("add"), Ok(ScoreAction::Add));
        assert_eq!(ScoreAction::parse("sub"), Ok(ScoreAction::Subtract));
        assert_eq!(ScoreAction::Subtract.as_ref(), "sub");
    }

    #[test]
    fn rejects_unknown_actions() {
        for raw in ["addd", "xyz", "", "ADD", "subtract"] {
            assert_eq!(
                ScoreAction::parse(raw),
                Err(GameError::InvalidAction(raw.to_owned())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn team_display_is_snake_case() {
        assert_eq!(Team::White.to_string(), "white");
        assert_eq!(Team::Blue.to_string(), "blue");
    }
}
