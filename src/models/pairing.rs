//! Pairing: one seat of a round's draw.

use crate::models::player::PlayerId;
use crate::models::standing::StandingRow;
use serde::{Deserialize, Serialize};

/// Id and display name of a paired player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairedPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl From<&StandingRow> for PairedPlayer {
    fn from(row: &StandingRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
        }
    }
}

/// Two players drawn against each other, or a bye when `second` is `None`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    /// Higher-ranked player.
    pub first: PairedPlayer,
    pub second: Option<PairedPlayer>,
    /// Set when no fresh opponent (or, for byes, no bye-free player) was left.
    pub repeat: bool,
}

impl Pairing {
    pub fn is_bye(&self) -> bool {
        self.second.is_none()
    }

    /// `(first, second)` ids; second is `None` for a bye.
    pub fn ids(&self) -> (PlayerId, Option<PlayerId>) {
        (self.first.id, self.second.as_ref().map(|p| p.id))
    }

    /// Whether this pairing seats exactly `a` and `b`, in either order.
    pub fn seats(&self, a: PlayerId, b: PlayerId) -> bool {
        match self.ids() {
            (x, Some(y)) => (x == a && y == b) || (x == b && y == a),
            _ => false,
        }
    }
}
