//! Recorded match outcomes.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A single decided match. `loser == None` records a bye, which counts as a win
/// for `winner` but gives them no opponent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: Option<PlayerId>,
    pub recorded_at: DateTime<Utc>,
}

impl GameMatch {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner,
            loser: Some(loser),
            recorded_at: Utc::now(),
        }
    }

    pub fn bye(player: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner: player,
            loser: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.loser.is_none()
    }

    /// The two participants as an unordered key (smaller id first). `None` for byes.
    pub fn opponents(&self) -> Option<(PlayerId, PlayerId)> {
        self.loser.map(|loser| pair_key(self.winner, loser))
    }
}

/// Normalise a pair of ids so that (a, b) and (b, a) compare equal.
pub fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
