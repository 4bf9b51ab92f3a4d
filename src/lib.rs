//! Swiss-system tournament tracker: library with models, ranking/pairing logic and storage.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod storage;

pub use config::ServerConfig;
pub use logic::{compute_pairings, compute_standings, pair_adjacent, rank_standings};
pub use models::{
    MatchReport, Pairing, PairingRound, Player, PlayerId, Standing, StandingRecord, StandingsList,
    TournamentError,
};
pub use storage::{export_standings, import_roster, MemoryStore, Storage};
