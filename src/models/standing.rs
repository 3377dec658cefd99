//! StandingRow and tie-break policy.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One line of the standings table. Derived from the match log, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches played, byes included.
    pub matches: u32,
    /// Solkoff score: current wins of every opponent faced, summed per meeting.
    pub opponent_wins: u32,
}

/// Secondary ordering applied between players on the same number of wins.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Higher opponent wins first, then lower player id.
    #[default]
    Solkoff,
    /// Lower player id first.
    PlayerId,
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solkoff" => Ok(TieBreak::Solkoff),
            "player_id" | "id" => Ok(TieBreak::PlayerId),
            other => Err(format!("unknown tie-break '{}'", other)),
        }
    }
}
