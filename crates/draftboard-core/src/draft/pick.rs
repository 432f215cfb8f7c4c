// Individual pick representation and position parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Football positions tracked by the draft engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "K")]
    Kicker,
    #[serde(rename = "DEF")]
    Defense,
}

/// Every position, in display order.
pub const ALL_POSITIONS: [Position; 6] = [
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::Kicker,
    Position::Defense,
];

impl Position {
    /// Parse a position string into a Position enum.
    ///
    /// Case-insensitive. Team defense accepts the common spellings
    /// "DEF", "DST", "D/ST" and "D".
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "K" => Some(Position::Kicker),
            "DEF" | "DST" | "D/ST" | "D" => Some(Position::Defense),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A single draft pick record as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickRecord {
    /// Overall pick number (1-indexed).
    #[serde(rename = "pick")]
    pub pick_number: u32,
    /// Draft round (1-indexed).
    pub round: u32,
    /// Name of the drafted player. Matched against the catalog by
    /// case-insensitive equality only.
    #[serde(rename = "player")]
    pub player_name: String,
    /// Position string as reported by the caller (e.g. "RB", "DST").
    pub position: String,
    /// NFL team code, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// ADP the caller saw for this player, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adp: Option<f64>,
}

impl PickRecord {
    /// The parsed position, or `None` when the string is unrecognized.
    pub fn parsed_position(&self) -> Option<Position> {
        Position::from_str_pos(&self.position)
    }
}

/// Identity key for a player name: trimmed and lowercased.
///
/// This is the only identity check the engine performs: punctuation,
/// suffixes (Jr., III) and spelling differences are not reconciled.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
