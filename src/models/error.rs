//! Errors surfaced by the engine, the store and the service wrapper.

use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use thiserror::Error;

/// A violated precondition. Every variant names the offending id(s).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvalidInput {
    /// Odd number of players and bye support is disabled.
    #[error("cannot pair an odd number of players ({count}) without byes")]
    OddPlayerCount { count: usize },
    /// A match names a player that is not registered.
    #[error("match {match_id} references unknown player {player_id}")]
    UnknownPlayer { match_id: MatchId, player_id: PlayerId },
    /// A result was reported for a player id that is not registered.
    #[error("player {0} is not registered")]
    PlayerNotFound(PlayerId),
    /// The same player id appears twice in the input.
    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),
    /// Winner and loser are the same player.
    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),
    /// The pair already has a result in the open round.
    #[error("players {winner} and {loser} already have a result this round")]
    DuplicateResult { winner: PlayerId, loser: PlayerId },
    /// The pair was not drawn against each other in the open round.
    #[error("players {winner} and {loser} are not paired in round {round}")]
    NotPairedThisRound {
        round: u32,
        winner: PlayerId,
        loser: PlayerId,
    },
    /// A new round cannot start before every result of the open one is in.
    #[error("round {round} still has {pending} pending result(s)")]
    RoundInProgress { round: u32, pending: usize },
    /// Players cannot be removed while matches still reference them.
    #[error("cannot delete players while {matches} match(es) are recorded")]
    PlayersHaveMatches { matches: usize },
    /// Player names must not be blank.
    #[error("player name must not be empty")]
    EmptyName,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl TournamentError {
    /// True for caller mistakes (as opposed to storage or encoding failures).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TournamentError::InvalidInput(_))
    }
}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::Csv(e.to_string())
    }
}
