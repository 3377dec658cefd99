//! In-memory store behind a single `RwLock`.

use crate::models::{GameMatch, InvalidInput, Player, PlayerId, TournamentError};
use crate::store::TournamentStore;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    players: Vec<Player>,
    matches: Vec<GameMatch>,
    /// Last id handed out. Not reset by `clear_players`, like a serial column.
    last_player_id: PlayerId,
}

impl Tables {
    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

/// Thread-safe in-memory tournament store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding existing records (e.g. from a CSV import).
    /// Matches are checked against the players like `record_match` would.
    pub fn with_records(
        players: Vec<Player>,
        matches: Vec<GameMatch>,
    ) -> Result<Self, TournamentError> {
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(p.id)) {
            return Err(InvalidInput::DuplicatePlayer(dup.id).into());
        }
        if players.iter().any(|p| p.name.trim().is_empty()) {
            return Err(InvalidInput::EmptyName.into());
        }
        let mut tables = Tables {
            last_player_id: players.iter().map(|p| p.id).max().unwrap_or(0),
            players,
            matches: Vec::new(),
        };
        for m in matches {
            check_match(&tables, &m)?;
            tables.matches.push(m);
        }
        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, TournamentError> {
        self.tables
            .read()
            .map_err(|_| TournamentError::Storage("lock error".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, TournamentError> {
        self.tables
            .write()
            .map_err(|_| TournamentError::Storage("lock error".to_string()))
    }
}

fn check_match(tables: &Tables, m: &GameMatch) -> Result<(), TournamentError> {
    for id in std::iter::once(m.winner).chain(m.loser) {
        if !tables.has_player(id) {
            return Err(InvalidInput::UnknownPlayer {
                match_id: m.id,
                player_id: id,
            }
            .into());
        }
    }
    if m.loser == Some(m.winner) {
        return Err(InvalidInput::SelfMatch(m.winner).into());
    }
    Ok(())
}

/// Unknown ids on a new result, checked before any `GameMatch` exists.
fn check_players(tables: &Tables, ids: &[PlayerId]) -> Result<(), TournamentError> {
    match ids.iter().find(|&&id| !tables.has_player(id)) {
        Some(&id) => Err(InvalidInput::PlayerNotFound(id).into()),
        None => Ok(()),
    }
}

impl TournamentStore for MemoryStore {
    fn list_players(&self) -> Result<Vec<Player>, TournamentError> {
        Ok(self.read()?.players.clone())
    }

    fn list_matches(&self) -> Result<Vec<GameMatch>, TournamentError> {
        Ok(self.read()?.matches.clone())
    }

    fn snapshot(&self) -> Result<(Vec<Player>, Vec<GameMatch>), TournamentError> {
        let g = self.read()?;
        Ok((g.players.clone(), g.matches.clone()))
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.read()?.players.len())
    }

    fn add_player(&self, name: &str) -> Result<Player, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidInput::EmptyName.into());
        }
        let mut g = self.write()?;
        let id = g
            .last_player_id
            .checked_add(1)
            .ok_or_else(|| TournamentError::Storage("player ids exhausted".to_string()))?;
        g.last_player_id = id;
        let player = Player::new(id, name);
        g.players.push(player.clone());
        Ok(player)
    }

    fn record_match(&self, winner: PlayerId, loser: PlayerId) -> Result<GameMatch, TournamentError> {
        if winner == loser {
            return Err(InvalidInput::SelfMatch(winner).into());
        }
        let mut g = self.write()?;
        check_players(&g, &[winner, loser])?;
        let m = GameMatch::new(winner, loser);
        g.matches.push(m.clone());
        Ok(m)
    }

    fn record_bye(&self, player: PlayerId) -> Result<GameMatch, TournamentError> {
        let mut g = self.write()?;
        check_players(&g, &[player])?;
        let m = GameMatch::bye(player);
        g.matches.push(m.clone());
        Ok(m)
    }

    fn clear_matches(&self) -> Result<(), TournamentError> {
        self.write()?.matches.clear();
        Ok(())
    }

    fn clear_players(&self) -> Result<(), TournamentError> {
        let mut g = self.write()?;
        if !g.matches.is_empty() {
            return Err(InvalidInput::PlayersHaveMatches {
                matches: g.matches.len(),
            }
            .into());
        }
        g.players.clear();
        Ok(())
    }
}
