//! Application layer - Use cases and orchestration
//!
//! Defines the model ports and the services that turn requests into
//! feature vectors, call the models and translate their output.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
