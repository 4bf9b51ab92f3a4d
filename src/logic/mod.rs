//! Tournament business logic: ranking and Swiss pairing.
//!
//! Both steps are pure over a snapshot read from the store; nothing here writes back.

mod pairing;
mod ranking;

pub use pairing::pair_adjacent;
pub use ranking::rank_standings;

use crate::models::{PairingRound, StandingsList, TournamentError};
use crate::storage::Storage;

/// Current standings as read from `store`.
pub fn compute_standings<S: Storage + ?Sized>(store: &S) -> Result<StandingsList, TournamentError> {
    let players = store.list_players()?;
    let records = store.standing_records()?;
    rank_standings(players, &records)
}

/// Pairings for the next round: standings, then adjacent pairing.
pub fn compute_pairings<S: Storage + ?Sized>(store: &S) -> Result<PairingRound, TournamentError> {
    let standings = compute_standings(store)?;
    pair_adjacent(&standings)
}
