//! Standings: count wins and matches per player from the match log, then rank.

use crate::models::{
    GameMatch, InvalidInput, Player, PlayerId, StandingRow, TieBreak, TournamentError,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Compute the ranked standings table.
///
/// 1. One row per player, including players with no matches (0 wins / 0 matches).
/// 2. `wins` counts matches won (byes included); `matches` counts every match involving the player.
/// 3. Rows are sorted by wins descending, then by `tie_break`, ending on player id ascending.
///
/// Fails with `InvalidInput` when a match references a player that is not in `players`,
/// when a player id is listed twice, or when a match pits a player against themselves.
pub fn compute_standings(
    players: &[Player],
    matches: &[GameMatch],
    tie_break: TieBreak,
) -> Result<Vec<StandingRow>, TournamentError> {
    let mut index: HashMap<PlayerId, usize> = HashMap::with_capacity(players.len());
    for (i, p) in players.iter().enumerate() {
        if index.insert(p.id, i).is_some() {
            return Err(InvalidInput::DuplicatePlayer(p.id).into());
        }
    }

    let mut rows: Vec<StandingRow> = players
        .iter()
        .map(|p| StandingRow {
            id: p.id,
            name: p.name.clone(),
            wins: 0,
            matches: 0,
            opponent_wins: 0,
        })
        .collect();

    validate_matches(matches, |id| index.contains_key(&id))?;

    for m in matches {
        let w = index[&m.winner];
        rows[w].wins += 1;
        rows[w].matches += 1;
        if let Some(loser) = m.loser {
            rows[index[&loser]].matches += 1;
        }
    }

    // Solkoff needs final win counts, so it runs as a second pass.
    let wins: Vec<u32> = rows.iter().map(|r| r.wins).collect();
    for m in matches {
        if let Some(loser) = m.loser {
            let (w, l) = (index[&m.winner], index[&loser]);
            rows[w].opponent_wins += wins[l];
            rows[l].opponent_wins += wins[w];
        }
    }

    rows.sort_by(|a, b| rank_order(a, b, tie_break));
    Ok(rows)
}

/// Total order used for ranking: better rows compare `Less`.
pub fn rank_order(a: &StandingRow, b: &StandingRow, tie_break: TieBreak) -> Ordering {
    let by_wins = b.wins.cmp(&a.wins);
    let by_tie_break = match tie_break {
        TieBreak::Solkoff => b.opponent_wins.cmp(&a.opponent_wins),
        TieBreak::PlayerId => Ordering::Equal,
    };
    by_wins.then(by_tie_break).then(a.id.cmp(&b.id))
}

/// Check every match against the known player ids.
pub(crate) fn validate_matches(
    matches: &[GameMatch],
    is_known: impl Fn(PlayerId) -> bool,
) -> Result<(), TournamentError> {
    for m in matches {
        if !is_known(m.winner) {
            return Err(InvalidInput::UnknownPlayer {
                match_id: m.id,
                player_id: m.winner,
            }
            .into());
        }
        if let Some(loser) = m.loser {
            if !is_known(loser) {
                return Err(InvalidInput::UnknownPlayer {
                    match_id: m.id,
                    player_id: loser,
                }
                .into());
            }
            if loser == m.winner {
                return Err(InvalidInput::SelfMatch(loser).into());
            }
        }
    }
    Ok(())
}
