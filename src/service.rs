//! Tournament service: the store, the engine and the open round wired together.
//!
//! This is the surface the web binary (or any other wrapper) talks to. Every write goes
//! through the round lock first, so round bookkeeping and the match log stay in step.

use crate::config::Config;
use crate::logic::{compute_pairings, compute_standings, PairingOptions};
use crate::models::{
    GameMatch, InvalidInput, Pairing, Player, PlayerId, Round, StandingRow, TieBreak,
    TournamentError,
};
use crate::store::TournamentStore;
use std::sync::{RwLock, RwLockWriteGuard};

pub struct TournamentService<S> {
    store: S,
    tie_break: TieBreak,
    pairing: PairingOptions,
    round: RwLock<Option<Round>>,
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self::with_options(store, config.tie_break, config.pairing_options())
    }

    pub fn with_options(store: S, tie_break: TieBreak, pairing: PairingOptions) -> Self {
        Self {
            store,
            tie_break,
            pairing,
            round: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn round_mut(&self) -> Result<RwLockWriteGuard<'_, Option<Round>>, TournamentError> {
        self.round
            .write()
            .map_err(|_| TournamentError::Storage("lock error".to_string()))
    }

    pub fn register_player(&self, name: &str) -> Result<Player, TournamentError> {
        let _guard = self.round_mut()?;
        let player = self.store.add_player(name)?;
        log::info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn players(&self) -> Result<Vec<Player>, TournamentError> {
        self.store.list_players()
    }

    pub fn count_players(&self) -> Result<usize, TournamentError> {
        self.store.count_players()
    }

    pub fn matches(&self) -> Result<Vec<GameMatch>, TournamentError> {
        self.store.list_matches()
    }

    /// Record `winner` over `loser`.
    ///
    /// While a round is open the pair must be one of its pairings and still undecided;
    /// otherwise the result is recorded as a free-standing match.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<GameMatch, TournamentError> {
        let mut round = self.round_mut()?;
        match round.as_mut() {
            Some(open) => {
                let mut next = open.clone();
                next.report(winner, loser)?;
                let m = self.store.record_match(winner, loser)?;
                *open = next;
                if open.is_complete() {
                    log::info!("Round {} complete", open.number);
                }
                Ok(m)
            }
            None => self.store.record_match(winner, loser),
        }
    }

    /// Current standings computed from one consistent snapshot.
    pub fn standings(&self) -> Result<Vec<StandingRow>, TournamentError> {
        let (players, matches) = self.store.snapshot()?;
        compute_standings(&players, &matches, self.tie_break)
    }

    /// Pairings the next round would get, without opening it.
    pub fn preview_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let (players, matches) = self.store.snapshot()?;
        let standings = compute_standings(&players, &matches, self.tie_break)?;
        compute_pairings(&standings, &matches, self.pairing)
    }

    /// Pair the next round and make it the open round. Byes are recorded immediately.
    /// With no players the existing empty round is returned instead of a new one.
    pub fn open_round(&self) -> Result<Round, TournamentError> {
        let mut round = self.round_mut()?;
        if let Some(open) = round.as_ref() {
            if !open.is_complete() {
                return Err(InvalidInput::RoundInProgress {
                    round: open.number,
                    pending: open.pending(),
                }
                .into());
            }
        }
        let number = round.as_ref().map_or(1, |r| r.number + 1);

        let (players, matches) = self.store.snapshot()?;
        let standings = compute_standings(&players, &matches, self.tie_break)?;
        let pairings = compute_pairings(&standings, &matches, self.pairing)?;
        // Nothing to pair: keep the empty round rather than counting up.
        if pairings.is_empty() {
            if let Some(open) = round.as_ref().filter(|r| r.pairings.is_empty()) {
                return Ok(open.clone());
            }
        }
        for p in pairings.iter().filter(|p| p.is_bye()) {
            self.store.record_bye(p.first.id)?;
        }

        let repeats = pairings.iter().filter(|p| p.repeat).count();
        log::info!(
            "Opened round {} with {} pairing(s), {} repeat(s)",
            number,
            pairings.len(),
            repeats
        );
        let opened = Round::open(number, pairings);
        *round = Some(opened.clone());
        Ok(opened)
    }

    pub fn current_round(&self) -> Result<Option<Round>, TournamentError> {
        self.round
            .read()
            .map(|r| r.clone())
            .map_err(|_| TournamentError::Storage("lock error".to_string()))
    }

    /// Delete every match and discard the open round.
    pub fn delete_matches(&self) -> Result<(), TournamentError> {
        let mut round = self.round_mut()?;
        self.store.clear_matches()?;
        *round = None;
        log::info!("Deleted all matches");
        Ok(())
    }

    /// Delete every player. Matches must be deleted first.
    pub fn delete_players(&self) -> Result<(), TournamentError> {
        let mut round = self.round_mut()?;
        self.store.clear_players()?;
        *round = None;
        log::info!("Deleted all players");
        Ok(())
    }
}
