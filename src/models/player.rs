//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned serially by the store starting at 1.
pub type PlayerId = u32;

/// A registered player. Immutable once created.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Full name as registered; need not be unique.
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
