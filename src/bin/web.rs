//! Single binary web server exposing Swiss tournaments over a REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! INACTIVITY_TIMEOUT_SECS, CLEANUP_INTERVAL_SECS.

use actix_web::{App, HttpServer};
use swiss_tournament::{api, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = api::new_state();

    // Background task: periodically remove tournaments nobody has touched for a while
    let state_cleanup = state.clone();
    let timeout = config.inactivity_timeout;
    let cleanup_interval = config.cleanup_interval;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            match api::evict_inactive(&state_cleanup, timeout) {
                Ok(0) => {}
                Ok(removed) => log::info!(
                    "Cleaned up {} inactive tournament(s) (no activity for {}s)",
                    removed,
                    timeout.as_secs()
                ),
                Err(e) => log::warn!("Tournament cleanup skipped: {}", e),
            }
        }
    });

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
