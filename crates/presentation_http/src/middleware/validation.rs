//! Request validation
//!
//! Provides a `ValidatedJson` extractor that deserializes and validates
//! request bodies. Every rejection is reported as a 400 `ApiError`,
//! including a missing or wrong content type.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// A JSON extractor that also validates the request body
///
/// # Example
///
/// ```ignore
/// use validator::Validate;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Validate)]
/// struct Reading {
///     #[validate(range(min = 0.0, max = 14.0))]
///     ph: f64,
/// }
///
/// async fn handler(ValidatedJson(req): ValidatedJson<Reading>) {
///     // req is validated
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(format_validation_errors(&e)))?;

        Ok(Self(value))
    }
}

/// `field: message` pairs, sorted by field name
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string)
                )
            })
        })
        .collect();
    messages.sort();
    format!("Validation failed: {}", messages.join("; "))
}
