//! Round: the pairings of one round and which of them have a result.

use crate::models::error::InvalidInput;
use crate::models::pairing::Pairing;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// An open round. Byes are decided as soon as the round opens.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub number: u32,
    pub pairings: Vec<Pairing>,
    /// Winner per pairing (same index as `pairings`), `None` while undecided.
    pub winners: Vec<Option<PlayerId>>,
}

impl Round {
    pub fn open(number: u32, pairings: Vec<Pairing>) -> Self {
        let winners = pairings
            .iter()
            .map(|p| if p.is_bye() { Some(p.first.id) } else { None })
            .collect();
        Self {
            number,
            pairings,
            winners,
        }
    }

    /// Index of the pairing that seats `a` against `b`.
    pub fn find(&self, a: PlayerId, b: PlayerId) -> Option<usize> {
        self.pairings.iter().position(|p| p.seats(a, b))
    }

    /// Record `winner` over `loser`. Returns the index of the decided pairing.
    pub fn report(&mut self, winner: PlayerId, loser: PlayerId) -> Result<usize, InvalidInput> {
        if winner == loser {
            return Err(InvalidInput::SelfMatch(winner));
        }
        let idx = self
            .find(winner, loser)
            .ok_or(InvalidInput::NotPairedThisRound {
                round: self.number,
                winner,
                loser,
            })?;
        if self.winners[idx].is_some() {
            return Err(InvalidInput::DuplicateResult { winner, loser });
        }
        self.winners[idx] = Some(winner);
        Ok(idx)
    }

    /// Number of pairings still waiting for a result.
    pub fn pending(&self) -> usize {
        self.winners.iter().filter(|w| w.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.pending() == 0
    }
}
