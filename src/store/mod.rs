//! Persistence collaborator: where players and match results live.
//!
//! The engine never talks to a store directly; callers take a `snapshot()` and hand
//! the players and matches to `compute_standings` / `compute_pairings`.

mod memory;

pub use memory::MemoryStore;

use crate::models::{GameMatch, Player, PlayerId, TournamentError};

/// Storage for the two relations of a tournament: players and matches.
///
/// Implementations must serialize writes against `snapshot()` so that standings and
/// pairings are never computed from a half-applied update.
pub trait TournamentStore: Send + Sync {
    fn list_players(&self) -> Result<Vec<Player>, TournamentError>;

    fn list_matches(&self) -> Result<Vec<GameMatch>, TournamentError>;

    /// Players and matches read together under one consistent view.
    fn snapshot(&self) -> Result<(Vec<Player>, Vec<GameMatch>), TournamentError>;

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.list_players()?.len())
    }

    /// Register a player; the store assigns the id.
    fn add_player(&self, name: &str) -> Result<Player, TournamentError>;

    /// Record a decided match. Both players must be registered.
    fn record_match(&self, winner: PlayerId, loser: PlayerId) -> Result<GameMatch, TournamentError>;

    /// Record a bye for `player` (counted as a win).
    fn record_bye(&self, player: PlayerId) -> Result<GameMatch, TournamentError>;

    fn clear_matches(&self) -> Result<(), TournamentError>;

    /// Remove every player. Fails while any match is still recorded.
    fn clear_players(&self) -> Result<(), TournamentError>;
}
