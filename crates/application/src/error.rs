//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request input is unusable (e.g. empty upload)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model failed while running
    #[error("Inference error: {0}")]
    Inference(String),

    /// Model is not loaded
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error was caused by the caller's input
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::InvalidInput(_))
    }
}
