//! Ranking engine: players + records -> ordered standings.

use crate::models::{Player, PlayerId, Standing, StandingRecord, StandingsList, TournamentError};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Build the standings from a snapshot of players and their records.
///
/// Order: `wins` descending, then player id ascending. `matches` is not a sort key.
/// Input order of `players` does not affect the result.
///
/// Fails with `UnknownPlayerReference` if a player has no record, and with
/// `DuplicatePlayer` if an id is listed twice.
pub fn rank_standings(
    players: Vec<Player>,
    records: &HashMap<PlayerId, StandingRecord>,
) -> Result<StandingsList, TournamentError> {
    let mut seen = HashSet::with_capacity(players.len());
    let mut standings = players
        .into_iter()
        .map(|p| -> Result<Standing, TournamentError> {
            if !seen.insert(p.id) {
                return Err(TournamentError::DuplicatePlayer(p.id));
            }
            let record = *records
                .get(&p.id)
                .ok_or(TournamentError::UnknownPlayerReference(p.id))?;
            Ok(Standing::new(p, record))
        })
        .collect::<Result<StandingsList, TournamentError>>()?;

    standings.sort_by_key(|s| (Reverse(s.wins()), s.id()));
    Ok(standings)
}
