//! Storage collaborator: where players and their aggregate records live.
//!
//! The ranking and pairing logic only reads through this trait. Callers own the
//! handle and decide how access is scoped (e.g. a lock guard held for one request).

mod csv_io;
mod memory;

pub use csv_io::{export_standings, import_roster};
pub use memory::MemoryStore;

use crate::models::{Player, PlayerId, StandingRecord, TournamentError};
use std::collections::HashMap;

pub trait Storage {
    /// All registered players. Order is not part of the contract.
    fn list_players(&self) -> Result<Vec<Player>, TournamentError>;

    /// Record for every registered player, reflecting all committed results.
    fn standing_records(&self) -> Result<HashMap<PlayerId, StandingRecord>, TournamentError>;

    /// Commit one result. Both records change or neither does.
    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError>;

    /// Zero every record. Players stay registered.
    fn reset_results(&mut self) -> Result<(), TournamentError>;

    /// Register a player with a 0/0 record and return the new id.
    fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError>;

    /// Remove one player and their record.
    fn remove_player(&mut self, id: PlayerId) -> Result<(), TournamentError>;

    /// Remove every player and record.
    fn remove_all_players(&mut self) -> Result<(), TournamentError>;

    /// Number of registered players; same as the length of `list_players`.
    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.list_players()?.len())
    }
}
