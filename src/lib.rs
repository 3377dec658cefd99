//! Swiss-system tournament tracker: library with models, the standings/pairing engine,
//! storage and the service wrapper used by the web binary.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::Config;
pub use logic::{compute_pairings, compute_standings, rank_order, PairingOptions};
pub use models::{
    pair_key, GameMatch, InvalidInput, MatchId, PairedPlayer, Pairing, Player, PlayerId, Round,
    StandingRow, TieBreak, TournamentError,
};
pub use service::TournamentService;
pub use store::{MemoryStore, TournamentStore};
