//! In-process store: players in registration order plus a record per player.

use crate::models::{Player, PlayerId, StandingRecord, TournamentError};
use crate::storage::Storage;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct MemoryStore {
    players: Vec<Player>,
    records: HashMap<PlayerId, StandingRecord>,
    /// Next id to hand out. Only ever increases, so ids are never reused.
    next_id: PlayerId,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store; the first registered player gets id 1.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            records: HashMap::new(),
            next_id: 1,
        }
    }

    /// Record of one player, if registered.
    pub fn record(&self, id: PlayerId) -> Option<StandingRecord> {
        self.records.get(&id).copied()
    }

    fn require(&self, id: PlayerId) -> Result<(), TournamentError> {
        if self.records.contains_key(&id) {
            Ok(())
        } else {
            Err(TournamentError::UnknownPlayerReference(id))
        }
    }
}

impl Storage for MemoryStore {
    fn list_players(&self) -> Result<Vec<Player>, TournamentError> {
        Ok(self.players.clone())
    }

    fn standing_records(&self) -> Result<HashMap<PlayerId, StandingRecord>, TournamentError> {
        Ok(self.records.clone())
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }
        // Validate both before touching either record.
        self.require(winner)?;
        self.require(loser)?;

        if let Some(r) = self.records.get_mut(&winner) {
            r.add_win();
        }
        if let Some(r) = self.records.get_mut(&loser) {
            r.add_loss();
        }
        log::debug!("Recorded match: {} beat {}", winner, loser);
        Ok(())
    }

    fn reset_results(&mut self) -> Result<(), TournamentError> {
        for r in self.records.values_mut() {
            *r = StandingRecord::default();
        }
        log::debug!("Reset results for {} player(s)", self.records.len());
        Ok(())
    }

    fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        self.records.insert(id, StandingRecord::default());
        log::debug!("Registered player {} ({})", id, name);
        Ok(id)
    }

    fn remove_player(&mut self, id: PlayerId) -> Result<(), TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(TournamentError::UnknownPlayerReference(id))?;
        self.players.remove(idx);
        self.records.remove(&id);
        log::debug!("Removed player {}", id);
        Ok(())
    }

    fn remove_all_players(&mut self) -> Result<(), TournamentError> {
        self.players.clear();
        self.records.clear();
        log::debug!("Removed all players");
        Ok(())
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.players.len())
    }
}
