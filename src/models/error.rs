//! Errors surfaced by the core and the storage collaborator.

use crate::models::player::PlayerId;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The store could not be read or written.
    StorageUnavailable(String),
    /// Pairing needs an even number of players.
    OddPlayerCount(usize),
    /// A player id that is not registered.
    UnknownPlayerReference(PlayerId),
    /// The same player id appears more than once in a snapshot.
    DuplicatePlayer(PlayerId),
    /// Winner and loser are the same player.
    SelfMatch(PlayerId),
    /// Player names must contain a non-whitespace character.
    EmptyPlayerName,
    /// A roster file could not be read.
    InvalidRoster(String),
    /// Standings could not be written out.
    ExportFailed(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::StorageUnavailable(reason) => write!(f, "Storage unavailable: {}", reason),
            TournamentError::OddPlayerCount(n) => {
                write!(f, "Cannot pair an odd number of players ({})", n)
            }
            TournamentError::UnknownPlayerReference(id) => write!(f, "Unknown player id {}", id),
            TournamentError::DuplicatePlayer(id) => write!(f, "Player id {} listed more than once", id),
            TournamentError::SelfMatch(id) => {
                write!(f, "Player {} cannot be both winner and loser", id)
            }
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::InvalidRoster(reason) => write!(f, "Invalid roster: {}", reason),
            TournamentError::ExportFailed(reason) => write!(f, "Could not export standings: {}", reason),
        }
    }
}

impl std::error::Error for TournamentError {}
