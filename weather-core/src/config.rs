use std::{env, path::PathBuf, time::Duration};

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Process-wide configuration, read once from the environment at startup and
/// handed to the server explicitly.
///
/// A missing credential is recorded as `None` here and only surfaced when a
/// request actually needs it; the process still starts and serves.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap credential (`OPENWEATHER_API_KEY`).
    pub api_key: Option<String>,
    /// Bound timeout for one outbound call (`UPSTREAM_TIMEOUT_SECS`).
    pub upstream_timeout: Duration,
    /// Listen address (`BIND_ADDR`).
    pub bind_addr: String,
    /// Static front-end root (`FRONTEND_DIR`); static serving is off when unset.
    pub frontend_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            frontend_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], but with an injectable variable source.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = get("OPENWEATHER_API_KEY").filter(|key| !key.trim().is_empty());

        let upstream_timeout = get("UPSTREAM_TIMEOUT_SECS")
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let frontend_dir = get("FRONTEND_DIR").map(PathBuf::from);

        Self { api_key, upstream_timeout, bind_addr, frontend_dir }
    }

    pub fn is_api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
