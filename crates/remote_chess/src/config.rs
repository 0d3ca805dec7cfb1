//! Client configuration.

use crate::session::RetryPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable overriding [`ClientConfig::server_url`].
pub const SERVER_URL_ENV: &str = "REMOTE_CHESS_SERVER_URL";

/// Paths of the four service endpoints, relative to the server URL.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointPaths {
    /// `GET` authoritative board.
    state: String,
    /// `POST` player move.
    submit_move: String,
    /// `GET` opponent move.
    opponent_move: String,
    /// `POST` new game.
    reset: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            state: "/state".to_string(),
            submit_move: "/move".to_string(),
            opponent_move: "/get_ai_move".to_string(),
            reset: "/reset".to_string(),
        }
    }
}

/// Configuration for the chess client.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the game service.
    #[serde(default = "default_server_url")]
    server_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    request_timeout_ms: u64,

    /// Delay between opponent-move polls in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// Maximum opponent-move polls per turn; unbounded when absent.
    #[serde(default)]
    max_poll_attempts: Option<u32>,

    /// Endpoint paths.
    #[serde(default)]
    endpoints: EndpointPaths,

    /// Diagnostic log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_poll_interval_ms() -> u64 {
    1_000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("remote_chess.log")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_ms: default_request_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: None,
            endpoints: EndpointPaths::default(),
            log_file: default_log_file(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(server_url = %config.server_url, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// Precedence: explicit override, then [`SERVER_URL_ENV`], then the file
    /// at `path` (when it exists), then defaults.
    #[instrument(skip(path, server_url_override))]
    pub fn load(
        path: Option<&Path>,
        server_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            debug!(url = %url, "Server URL from environment");
            config.server_url = url;
        }
        if let Some(url) = server_url_override {
            debug!(url = %url, "Server URL from command line");
            config.server_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Returns a copy pointing at another server.
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Returns a copy with a different poll interval and bound.
    pub fn with_polling(mut self, interval: Duration, max_attempts: Option<u32>) -> Self {
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self.max_poll_attempts = max_attempts;
        self
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Opponent-poll retry policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            Duration::from_millis(self.poll_interval_ms),
            self.max_poll_attempts,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "server_url must be an http(s) URL, got {:?}",
                self.server_url
            )));
        }
        if self.max_poll_attempts == Some(0) {
            return Err(ConfigError::new(
                "max_poll_attempts must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
