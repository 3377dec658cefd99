//! Tournament business logic: standings and pairing generation.
//!
//! Both are pure functions over a snapshot of players and matches.

mod pairing;
mod standings;

pub use pairing::{compute_pairings, PairingOptions};
pub use standings::{compute_standings, rank_order};
