//! CSV import and export of the player list, the match log, standings and pairings.

use crate::models::{GameMatch, Pairing, Player, PlayerId, StandingRow, TournamentError};
use crate::store::MemoryStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use uuid::Uuid;

/// One match log line. Missing `id` / `recorded_at` are filled in on import;
/// an empty `loser` is a bye.
#[derive(Debug, Serialize, Deserialize)]
struct MatchRecord {
    #[serde(default)]
    id: Option<Uuid>,
    winner: PlayerId,
    loser: Option<PlayerId>,
    #[serde(default)]
    recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct PairingRecord<'a> {
    first_id: PlayerId,
    first_name: &'a str,
    second_id: Option<PlayerId>,
    second_name: Option<&'a str>,
    repeat: bool,
}

fn flush<W: Write>(mut wtr: csv::Writer<W>) -> Result<(), TournamentError> {
    wtr.flush().map_err(|e| TournamentError::Csv(e.to_string()))
}

/// Write standings with header `id,name,wins,matches,opponent_wins`.
pub fn write_standings<W: Write>(rows: &[StandingRow], writer: W) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    flush(wtr)
}

/// Write pairings; a bye has empty `second_id` / `second_name`.
pub fn write_pairings<W: Write>(pairings: &[Pairing], writer: W) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in pairings {
        wtr.serialize(PairingRecord {
            first_id: p.first.id,
            first_name: &p.first.name,
            second_id: p.second.as_ref().map(|s| s.id),
            second_name: p.second.as_ref().map(|s| s.name.as_str()),
            repeat: p.repeat,
        })?;
    }
    flush(wtr)
}

/// Write players with header `id,name`.
pub fn write_players<W: Write>(players: &[Player], writer: W) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in players {
        wtr.serialize(p)?;
    }
    flush(wtr)
}

/// Write the match log with header `id,winner,loser,recorded_at`.
pub fn write_matches<W: Write>(matches: &[GameMatch], writer: W) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for m in matches {
        wtr.serialize(MatchRecord {
            id: Some(m.id),
            winner: m.winner,
            loser: m.loser,
            recorded_at: Some(m.recorded_at),
        })?;
    }
    flush(wtr)
}

/// Read players from CSV with header `id,name`. Names are trimmed.
pub fn read_players<R: Read>(reader: R) -> Result<Vec<Player>, TournamentError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut players = Vec::new();
    for record in rdr.deserialize() {
        let p: Player = record?;
        players.push(Player::new(p.id, p.name.trim()));
    }
    Ok(players)
}

/// Read a match log from CSV. Only `winner` and `loser` columns are required.
pub fn read_matches<R: Read>(reader: R) -> Result<Vec<GameMatch>, TournamentError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut matches = Vec::new();
    for record in rdr.deserialize() {
        let r: MatchRecord = record?;
        let mut m = match r.loser {
            Some(loser) => GameMatch::new(r.winner, loser),
            None => GameMatch::bye(r.winner),
        };
        if let Some(id) = r.id {
            m.id = id;
        }
        if let Some(at) = r.recorded_at {
            m.recorded_at = at;
        }
        matches.push(m);
    }
    Ok(matches)
}

/// Build a store from a player CSV and an optional match log CSV.
pub fn import_store<P: Read, M: Read>(
    players: P,
    matches: Option<M>,
) -> Result<MemoryStore, TournamentError> {
    let players = read_players(players)?;
    let matches = match matches {
        Some(m) => read_matches(m)?,
        None => Vec::new(),
    };
    log::info!(
        "Imported {} player(s) and {} match(es)",
        players.len(),
        matches.len()
    );
    MemoryStore::with_records(players, matches)
}
