//! Player and StandingRecord data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player. Assigned by the store, never reused.
pub type PlayerId = u32;

/// A registered player. Names need not be unique; everything keys off `id`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player with an id already assigned by the store.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Aggregate win/match counters for one player. Always `matches >= wins`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub wins: u32,
    pub matches: u32,
}

impl StandingRecord {
    /// Record a won match.
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.matches += 1;
    }

    /// Record a lost match.
    pub fn add_loss(&mut self) {
        self.matches += 1;
    }

    /// Matches played but not won. Zero for a malformed record with `wins > matches`.
    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}
