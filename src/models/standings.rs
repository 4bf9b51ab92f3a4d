//! Standings entries and pairings produced by the core.

use crate::models::player::{Player, PlayerId, StandingRecord};
use serde::{Deserialize, Serialize};

/// One row of the standings: a player and their current record.
///
/// Serializes flat as `{id, name, wins, matches}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    #[serde(flatten)]
    pub player: Player,
    #[serde(flatten)]
    pub record: StandingRecord,
}

impl Standing {
    /// Pair a player with their record.
    pub fn new(player: Player, record: StandingRecord) -> Self {
        Self { player, record }
    }

    /// The player's id.
    pub fn id(&self) -> PlayerId {
        self.player.id
    }

    /// Wins so far (the ranking key).
    pub fn wins(&self) -> u32 {
        self.record.wins
    }
}

/// Standings ordered by wins (descending), ties by player id (ascending).
pub type StandingsList = Vec<Standing>;

/// Two distinct players meeting in the next round. `first` is ranked at or above `second`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: Player,
    pub second: Player,
}

impl Pairing {
    /// Create a pairing; `first` should be the higher- or equal-ranked player.
    pub fn new(first: Player, second: Player) -> Self {
        Self { first, second }
    }

    /// True if `id` is one of the two players.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.first.id == id || self.second.id == id
    }

    /// Both player ids, `first` then `second`.
    pub fn ids(&self) -> [PlayerId; 2] {
        [self.first.id, self.second.id]
    }
}

/// All pairings for one round, in standings order of each pair's first player.
pub type PairingRound = Vec<Pairing>;

/// A committed match outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub winner: PlayerId,
    pub loser: PlayerId,
}
