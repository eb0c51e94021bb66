//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub query: QueryConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// REST API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.example.com`
    pub base_url: String,
    /// Bearer token sent with every request
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Join an absolute path onto the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Query cache settings
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Seconds a cached query result is served without refetching
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u64,
}

impl QueryConfig {
    #[must_use]
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_secs)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_secs: default_stale_secs(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "poor-room".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_stale_secs() -> u64 {
    60
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::InvalidValue("POOR_ROOM_API_URL", raw.to_string()))
    }
}

impl ClientConfig {
    /// Configuration for a base URL with every other setting at its default
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            api: ApiConfig {
                base_url: normalize_base_url(base_url)?,
                access_token: None,
                timeout_secs: default_timeout_secs(),
                connect_timeout_secs: default_connect_timeout_secs(),
            },
            query: QueryConfig::default(),
        })
    }

    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.api.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_stale_secs(mut self, secs: u64) -> Self {
        self.query.stale_secs = secs;
        self
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `POOR_ROOM_API_URL` is missing or not an http(s) URL,
    /// or if a numeric setting does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let number = |key: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(key, raw)),
                None => Ok(default),
            }
        };

        let base_url = lookup("POOR_ROOM_API_URL").ok_or(ConfigError::MissingVar("POOR_ROOM_API_URL"))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: match lookup("APP_ENV") {
                    Some(raw) => Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
                    None => Environment::default(),
                },
            },
            api: ApiConfig {
                base_url: normalize_base_url(&base_url)?,
                access_token: lookup("POOR_ROOM_ACCESS_TOKEN").filter(|t| !t.trim().is_empty()),
                timeout_secs: number("POOR_ROOM_TIMEOUT_SECS", default_timeout_secs())?,
                connect_timeout_secs: number(
                    "POOR_ROOM_CONNECT_TIMEOUT_SECS",
                    default_connect_timeout_secs(),
                )?,
            },
            query: QueryConfig {
                stale_secs: number("POOR_ROOM_STALE_SECS", default_stale_secs())?,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
