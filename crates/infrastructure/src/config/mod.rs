//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - `config.toml` in the working directory (optional)
//! - `AGRIAI_*` environment variables, `__` separating nested keys
//!   (`AGRIAI_SERVER__PORT=8080`, `AGRIAI_MODELS__PLANT__INPUT_SIZE=256`)

mod server;

use std::{collections::HashMap, fmt};

use ai_core::ModelsConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

const ENV_PREFIX: &str = "AGRIAI";

/// Application environment (development or production)
///
/// Production hides internal error details from API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - raw error messages are returned
    #[default]
    Development,
    /// Production environment - error messages are sanitized
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info,agriai_server=debug,tower_http=debug".to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Model files and runtime options
    #[serde(default)]
    pub models: ModelsConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config", None)
    }

    /// Load configuration from a file (extension optional) and environment
    ///
    /// `env` replaces the process environment when given.
    pub fn load_from(
        file: &str,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true)
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }

    /// Whether error details must be hidden from clients
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
