//! Data structures for a Swiss tournament: players, matches, standings, pairings, rounds.

mod error;
mod game;
mod pairing;
mod player;
mod round;
mod standing;

pub use error::{InvalidInput, TournamentError};
pub use game::{pair_key, GameMatch, MatchId};
pub use pairing::{PairedPlayer, Pairing};
pub use player::{Player, PlayerId};
pub use round::Round;
pub use standing::{StandingRow, TieBreak};
