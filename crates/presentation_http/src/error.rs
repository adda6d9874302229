//! API error handling
//!
//! Every failure is answered with `{status: "error", message, code}`.
//! In production mode internal errors return generic messages without
//! details, and client-facing messages are scrubbed of paths and URLs.

use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

const GENERIC_MESSAGE: &str = "An error occurred processing your request";

/// Configure whether internal error details should be exposed in responses.
///
/// Set to `false` in production.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// Replace messages that leak file paths, URLs or stack traces
fn sanitize_error_message(msg: &str, expose: bool) -> String {
    if expose {
        return msg.to_string();
    }

    let sensitive_patterns = [
        "/home/",
        "/users/",
        "/var/",
        "/etc/",
        "/srv/",
        "/opt/",
        "\\users\\",
        "c:\\",
        "stack backtrace",
        "panicked at",
        ".rs:",
        "connection refused",
    ];

    let msg_lower = msg.to_lowercase();
    if sensitive_patterns.iter().any(|p| msg_lower.contains(p)) || msg.contains("://") {
        return GENERIC_MESSAGE.to_string();
    }

    msg.to_string()
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Treat any failure as the caller's fault
    ///
    /// The JSON recommendation endpoints answer every failure with 400.
    pub fn bad_request(err: impl fmt::Display) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `"error"`
    #[schema(example = "error")]
    pub status: String,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code
    #[schema(example = "bad_request")]
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let expose = should_expose_details();
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                sanitize_error_message(&msg, expose),
            ),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                sanitize_error_message(&msg, expose),
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                let message = if expose {
                    msg
                } else {
                    "An internal error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            },
        };

        let body = ErrorResponse {
            status: "error".to_string(),
            message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use domain::SoilType;

    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_body() {
        let (status, body) = body_of(ApiError::BadRequest("missing field".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.status, "error");
        assert_eq!(body.code, "bad_request");
        assert_eq!(body.message, "missing field");
    }

    #[tokio::test]
    async fn internal_error_status() {
        let (status, body) = body_of(ApiError::Internal("decode".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "internal_error");
    }

    #[test]
    fn domain_error_converts_to_bad_request() {
        let err: ApiError = "Silt".parse::<SoilType>().unwrap_err().into();
        let ApiError::BadRequest(msg) = err else {
            unreachable!("Expected BadRequest");
        };
        assert!(msg.contains("Valid types are: Loamy, Sandy, Clayey, Black, Red"));
    }

    #[test]
    fn application_error_mapping() {
        let err: ApiError = ApplicationError::InvalidInput("No file selected".into()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = ApplicationError::Inference("bad image".into()).into();
        assert!(matches!(err, ApiError::Internal(_)));

        let err: ApiError = ApplicationError::ModelUnavailable("plant".into()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn bad_request_helper_keeps_message() {
        let err = ApiError::bad_request(ApplicationError::ModelUnavailable("crop".into()));
        assert_eq!(err.to_string(), "Bad request: Model unavailable: crop");
    }

    #[test]
    fn sanitize_hides_paths_when_not_exposed() {
        let msg = "Failed to load model: /srv/models/crop.onnx is corrupt";
        assert_eq!(sanitize_error_message(msg, false), GENERIC_MESSAGE);
        assert_eq!(sanitize_error_message(msg, true), msg);
    }

    #[test]
    fn sanitize_hides_urls() {
        assert_eq!(
            sanitize_error_message("fetch http://internal:9000 failed", false),
            GENERIC_MESSAGE
        );
    }

    #[test]
    fn sanitize_preserves_safe_messages() {
        let msg = "Invalid crop type 'Rye'. Valid types are: Wheat";
        assert_eq!(sanitize_error_message(msg, false), msg);
    }
}
