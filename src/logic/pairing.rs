//! Pairing generator: adjacent players in the standings meet in the next round.

use crate::models::{Pairing, PairingRound, StandingsList, TournamentError};
use std::collections::HashSet;

/// Pair positions 0&1, 2&3, ... of the standings.
///
/// An empty list gives an empty round. An odd count is an error; no player is dropped.
/// A player id listed twice is rejected so nobody is paired with themselves.
/// Past opponents are not consulted, so rematches are possible.
pub fn pair_adjacent(standings: &StandingsList) -> Result<PairingRound, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let mut seen = HashSet::with_capacity(standings.len());
    if let Some(s) = standings.iter().find(|s| !seen.insert(s.id())) {
        return Err(TournamentError::DuplicatePlayer(s.id()));
    }

    let round = standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(pair[0].player.clone(), pair[1].player.clone()))
        .collect();

    Ok(round)
}
