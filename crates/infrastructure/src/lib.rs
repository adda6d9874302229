//! Infrastructure layer - Adapters for the model runtime
//!
//! Implements the application ports on top of `ai_core`, loads the
//! application configuration and installs the tracing subscriber.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, Environment, ServerConfig, TelemetryAppConfig};
pub use telemetry::{LogFormat, TelemetryError, init_telemetry};
