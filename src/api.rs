//! REST API over in-memory tournaments. Each tournament is its own store, keyed by a UUID.
//!
//! Handlers take the session lock for the whole request, so standings and pairings are
//! computed from one consistent snapshot.

use crate::logic::{compute_pairings, compute_standings};
use crate::models::{MatchReport, PlayerId, TournamentError};
use crate::storage::{export_standings, import_roster, MemoryStore, Storage};
use actix_web::{
    delete, get, post,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a tournament session.
pub type TournamentId = Uuid;

/// Per-tournament entry: its store plus last activity time (for auto-cleanup).
pub struct TournamentEntry {
    pub store: MemoryStore,
    pub created_at: DateTime<Utc>,
    pub last_activity: Instant,
}

impl TournamentEntry {
    /// Fresh tournament with an empty store, active as of now.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            created_at: Utc::now(),
            last_activity: Instant::now(),
        }
    }
}

impl Default for TournamentEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// All live tournaments.
pub type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Empty state with no tournaments.
pub fn new_state() -> AppState {
    Data::new(RwLock::new(HashMap::new()))
}

/// Drop tournaments idle for at least `timeout`. Returns how many were removed.
pub fn evict_inactive(state: &AppState, timeout: Duration) -> Result<usize, TournamentError> {
    let mut g = state.write().map_err(|_| lock_error())?;
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
    Ok(before - g.len())
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize, Deserialize)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub player_count: usize,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id (e.g. /api/tournaments/{id}/players/{player_id})
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: PlayerId,
}

fn lock_error() -> TournamentError {
    TournamentError::StorageUnavailable("tournament state lock poisoned".to_string())
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::UnknownPlayerReference(_) => HttpResponse::NotFound().json(body),
        TournamentError::StorageUnavailable(_) => HttpResponse::ServiceUnavailable().json(body),
        TournamentError::ExportFailed(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn summary(id: TournamentId, entry: &TournamentEntry) -> Result<TournamentSummary, TournamentError> {
    Ok(TournamentSummary {
        id,
        created_at: entry.created_at,
        player_count: entry.store.count_players()?,
    })
}

/// Run `f` against one tournament, refreshing its activity time. 404 if it does not exist.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut TournamentEntry) -> Result<HttpResponse, TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return error_response(&lock_error()),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    f(entry).unwrap_or_else(|e| error_response(&e))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Create a new, empty tournament (client stores the id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState) -> HttpResponse {
    let id = Uuid::new_v4();
    let entry = TournamentEntry::new();
    let resp = match summary(id, &entry) {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return error_response(&lock_error()),
    };
    g.insert(id, entry);
    log::info!("Created tournament {}", id);
    HttpResponse::Ok().json(resp)
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let id = path.id;
    with_tournament(&state, id, |entry| Ok(HttpResponse::Ok().json(summary(id, entry)?)))
}

#[get("/api/tournaments/{id}/players")]
async fn api_list_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        Ok(HttpResponse::Ok().json(entry.store.list_players()?))
    })
}

/// Register a player; responds with the assigned id.
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(state: AppState, path: Path<TournamentPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        let id = entry.store.add_player(&body.name)?;
        Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
    })
}

/// Remove every player (and their records).
#[delete("/api/tournaments/{id}/players")]
async fn api_remove_all_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let id = path.id;
    with_tournament(&state, id, |entry| {
        entry.store.remove_all_players()?;
        Ok(HttpResponse::Ok().json(summary(id, entry)?))
    })
}

#[get("/api/tournaments/{id}/players/count")]
async fn api_count_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        let count = entry.store.count_players()?;
        Ok(HttpResponse::Ok().json(serde_json::json!({ "count": count })))
    })
}

/// Register players from a CSV body with a `name` column.
#[post("/api/tournaments/{id}/players/import")]
async fn api_import_players(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        let ids = import_roster(&mut entry.store, body.as_bytes())?;
        Ok(HttpResponse::Ok().json(serde_json::json!({ "ids": ids })))
    })
}

#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    let id = path.id;
    with_tournament(&state, id, |entry| {
        entry.store.remove_player(path.player_id)?;
        Ok(HttpResponse::Ok().json(summary(id, entry)?))
    })
}

/// Report one match result; responds with the updated standings.
#[post("/api/tournaments/{id}/matches")]
async fn api_report_match(state: AppState, path: Path<TournamentPath>, body: Json<MatchReport>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        entry.store.record_match(body.winner, body.loser)?;
        Ok(HttpResponse::Ok().json(compute_standings(&entry.store)?))
    })
}

/// Zero every record; responds with the updated standings.
#[delete("/api/tournaments/{id}/matches")]
async fn api_reset_results(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        entry.store.reset_results()?;
        Ok(HttpResponse::Ok().json(compute_standings(&entry.store)?))
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        Ok(HttpResponse::Ok().json(compute_standings(&entry.store)?))
    })
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        let standings = compute_standings(&entry.store)?;
        let mut buf = Vec::new();
        export_standings(&standings, &mut buf)?;
        Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(buf))
    })
}

/// Pairings for the next round (400 if the player count is odd).
#[get("/api/tournaments/{id}/pairings")]
async fn api_pairings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |entry| {
        Ok(HttpResponse::Ok().json(compute_pairings(&entry.store)?))
    })
}

/// Register every route. The caller supplies the `AppState` via `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_list_players)
        .service(api_add_player)
        .service(api_remove_all_players)
        .service(api_count_players)
        .service(api_import_players)
        .service(api_remove_player)
        .service(api_report_match)
        .service(api_reset_results)
        .service(api_standings)
        .service(api_standings_csv)
        .service(api_pairings);
}
