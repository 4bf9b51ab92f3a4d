//! Data structures for the Swiss tournament: players, records, standings, pairings.

mod error;
mod player;
mod standings;

pub use error::TournamentError;
pub use player::{Player, PlayerId, StandingRecord};
pub use standings::{MatchReport, Pairing, PairingRound, Standing, StandingsList};
