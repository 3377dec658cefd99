//! Swiss pairing: adjacent-rank pairing that avoids rematches.

use crate::logic::standings::validate_matches;
use crate::models::{
    pair_key, GameMatch, InvalidInput, PairedPlayer, Pairing, PlayerId, StandingRow,
    TournamentError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Knobs for `compute_pairings`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairingOptions {
    /// Allow an odd player count by giving one player a bye.
    pub allow_bye: bool,
}

/// Generate the next round's pairings from the current standings order.
///
/// 1. With an odd count (and byes allowed), the lowest-ranked player without a prior bye
///    sits out; if everyone has had one, the lowest-ranked player does and the bye is
///    flagged `repeat`.
/// 2. Walk the remaining players in rank order. The top unpaired player takes the
///    nearest-ranked unpaired player they have not met yet.
/// 3. If every remaining player is a rematch, take the nearest-ranked one anyway and
///    flag the pairing `repeat`.
///
/// The bye, if any, is the last pairing. Output depends only on the inputs.
pub fn compute_pairings(
    standings: &[StandingRow],
    matches: &[GameMatch],
    options: PairingOptions,
) -> Result<Vec<Pairing>, TournamentError> {
    let mut ids: HashSet<PlayerId> = HashSet::with_capacity(standings.len());
    for row in standings {
        if !ids.insert(row.id) {
            return Err(InvalidInput::DuplicatePlayer(row.id).into());
        }
    }
    validate_matches(matches, |id| ids.contains(&id))?;

    if standings.len() % 2 == 1 && !options.allow_bye {
        return Err(InvalidInput::OddPlayerCount {
            count: standings.len(),
        }
        .into());
    }

    let met: HashSet<(PlayerId, PlayerId)> =
        matches.iter().filter_map(GameMatch::opponents).collect();

    let mut pool: Vec<&StandingRow> = standings.iter().collect();
    let bye = if pool.len() % 2 == 1 {
        let had_bye: HashSet<PlayerId> = matches
            .iter()
            .filter(|m| m.is_bye())
            .map(|m| m.winner)
            .collect();
        let (idx, repeat) = match pool.iter().rposition(|r| !had_bye.contains(&r.id)) {
            Some(idx) => (idx, false),
            None => (pool.len() - 1, true),
        };
        let row = pool.remove(idx);
        log::debug!("Bye for player {} (repeat: {})", row.id, repeat);
        Some(Pairing {
            first: PairedPlayer::from(row),
            second: None,
            repeat,
        })
    } else {
        None
    };

    let mut pairings = Vec::with_capacity(standings.len() / 2 + 1);
    while !pool.is_empty() {
        let first = pool.remove(0);
        let fresh = pool
            .iter()
            .position(|r| !met.contains(&pair_key(first.id, r.id)));
        let (idx, repeat) = match fresh {
            Some(idx) => (idx, false),
            None => (0, true),
        };
        let second = pool.remove(idx);
        if repeat {
            log::debug!(
                "No fresh opponent left for player {}, rematch with {}",
                first.id,
                second.id
            );
        }
        pairings.push(Pairing {
            first: PairedPlayer::from(first),
            second: Some(PairedPlayer::from(second)),
            repeat,
        });
    }

    pairings.extend(bye);
    Ok(pairings)
}
