//! Server configuration from environment variables.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_INACTIVITY_SECS: u64 = 12 * 3600;
const DEFAULT_CLEANUP_SECS: u64 = 30 * 60;

/// Where to listen and how long idle tournaments are kept.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tournaments not touched for this long are removed.
    pub inactivity_timeout: Duration,
    /// How often the cleanup task runs.
    pub cleanup_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_SECS),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_SECS),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `INACTIVITY_TIMEOUT_SECS` and `CLEANUP_INTERVAL_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, with a custom variable source. Missing or unparseable values use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let secs = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|&s| s > 0)
                .map(Duration::from_secs)
                .unwrap_or(default)
        };
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            inactivity_timeout: secs("INACTIVITY_TIMEOUT_SECS", defaults.inactivity_timeout),
            cleanup_interval: secs("CLEANUP_INTERVAL_SECS", defaults.cleanup_interval),
        }
    }
}
