//! HTTP request handlers

pub mod crop;
pub mod fertilizer;
pub mod health;
pub mod home;
pub mod metrics;
pub mod plant;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
