//! Crop recommendation handler

use std::time::Instant;

use axum::{Json, extract::State};
use domain::{CropFeatures, CropRecommendation};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    coerce,
    error::{ApiError, ErrorResponse},
    handlers::metrics::ModelKind,
    middleware::ValidatedJson,
    state::AppState,
};

/// Soil nutrients and climate for a crop recommendation
///
/// Nutrients are integers, climate readings are floats. Numeric strings
/// are accepted for both.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CropRecommendationRequest {
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 90)]
    pub nitrogen: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 42)]
    pub phosphorus: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 43)]
    pub potassium: i64,
    /// Degrees Celsius
    #[serde(deserialize_with = "coerce::float")]
    #[schema(example = 20.87)]
    pub temperature: f64,
    /// Relative humidity in percent
    #[serde(deserialize_with = "coerce::float")]
    #[schema(example = 82.0)]
    pub humidity: f64,
    #[serde(deserialize_with = "coerce::float")]
    #[schema(example = 6.5)]
    pub ph: f64,
    /// Millimetres
    #[serde(deserialize_with = "coerce::float")]
    #[schema(example = 202.93)]
    pub rainfall: f64,
}

impl From<CropRecommendationRequest> for CropFeatures {
    fn from(req: CropRecommendationRequest) -> Self {
        Self {
            nitrogen: req.nitrogen,
            phosphorus: req.phosphorus,
            potassium: req.potassium,
            temperature: req.temperature,
            humidity: req.humidity,
            ph: req.ph,
            rainfall: req.rainfall,
        }
    }
}

/// Recommended crop
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CropRecommendationDto {
    #[schema(example = "Rice")]
    pub crop: String,
    #[schema(example = 1)]
    pub crop_id: i64,
}

/// Crop recommendation response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CropRecommendationResponse {
    #[schema(example = "success")]
    pub status: String,
    pub recommendation: CropRecommendationDto,
    pub message: String,
}

impl From<CropRecommendation> for CropRecommendationResponse {
    fn from(rec: CropRecommendation) -> Self {
        let message = rec.message();
        Self {
            status: "success".to_string(),
            recommendation: CropRecommendationDto {
                crop: rec.crop,
                crop_id: rec.crop_id,
            },
            message,
        }
    }
}

/// Recommend a crop for the given soil and climate
#[utoipa::path(
    post,
    path = "/crop-recommendation",
    tag = "recommendations",
    request_body = CropRecommendationRequest,
    responses(
        (status = 200, description = "Crop recommended", body = CropRecommendationResponse),
        (status = 400, description = "Invalid input or model failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn recommend_crop(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CropRecommendationRequest>,
) -> Result<Json<CropRecommendationResponse>, ApiError> {
    let start = Instant::now();
    let result = state.crop_service.recommend(request.into()).await;
    state.metrics.record_inference(
        ModelKind::Crop,
        result.is_ok(),
        start.elapsed().as_micros() as u64,
    );

    let recommendation = result.map_err(ApiError::bad_request)?;
    Ok(Json(recommendation.into()))
}
