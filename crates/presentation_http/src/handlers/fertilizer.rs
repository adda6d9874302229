//! Fertilizer recommendation handler

use std::time::Instant;

use axum::{Json, extract::State};
use domain::{CropType, FertilizerFeatures, FertilizerRecommendation, SoilType};
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

/// Soil readings and categories for a fertilizer recommendation
///
/// All measurements are integers; fractional input is truncated.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FertilizerRecommendationRequest {
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 26)]
    pub temperature: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 52)]
    pub humidity: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 38)]
    pub moisture: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 37)]
    pub nitrogen: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 0)]
    pub potassium: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[schema(example = 0)]
    pub phosphorous: i64,
    #[schema(example = "Sandy")]
    pub soil_type: String,
    #[schema(example = "Maize")]
    pub crop_type: String,
}

impl FertilizerRecommendationRequest {
    /// Resolve the categories, soil type first
    fn into_features(self) -> Result<FertilizerFeatures, ApiError> {
        let soil_type: SoilType = self.soil_type.parse().map_err(ApiError::bad_request)?;
        let crop_type: CropType = self.crop_type.parse().map_err(ApiError::bad_request)?;

        Ok(FertilizerFeatures {
            temperature: self.temperature,
            humidity: self.humidity,
            moisture: self.moisture,
            nitrogen: self.nitrogen,
            potassium: self.potassium,
            phosphorous: self.phosphorous,
            soil_type,
            crop_type,
        })
    }
}

/// Recommended fertilizer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FertilizerRecommendationDto {
    #[schema(example = "Urea")]
    pub fertilizer: String,
    pub description: String,
}

/// Fertilizer recommendation response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FertilizerRecommendationResponse {
    #[schema(example = "success")]
    pub status: String,
    pub recommendation: FertilizerRecommendationDto,
    pub message: String,
}

impl From<FertilizerRecommendation> for FertilizerRecommendationResponse {
    fn from(rec: FertilizerRecommendation) -> Self {
        let message = rec.message();
        Self {
            status: "success".to_string(),
            recommendation: FertilizerRecommendationDto {
                fertilizer: rec.fertilizer,
                description: rec.description,
            },
            message,
        }
    }
}

/// Recommend a fertilizer for the given soil, crop and readings
#[utoipa::path(
    post,
    path = "/fertilizer-recommendation",
    tag = "recommendations",
    request_body = FertilizerRecommendationRequest,
    responses(
        (status = 200, description = "Fertilizer recommended", body = FertilizerRecommendationResponse),
        (status = 400, description = "Invalid input or model failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(soil = %request.soil_type, crop = %request.crop_type))]
pub async fn recommend_fertilizer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FertilizerRecommendationRequest>,
) -> Result<Json<FertilizerRecommendationResponse>, ApiError> {
    let features = request.into_features()?;

    let start = Instant::now();
    let result = state.fertilizer_service.recommend(features).await;
    state.metrics.record_inference(
        ModelKind::Fertilizer,
        result.is_ok(),
        start.elapsed().as_micros() as u64,
    );

    let recommendation = result.map_err(ApiError::bad_request)?;
    Ok(Json(recommendation.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(soil: &str, crop: &str) -> FertilizerRecommendationRequest {
        FertilizerRecommendationRequest {
            temperature: 26,
            humidity: 52,
            moisture: 38,
            nitrogen: 37,
            potassium: 0,
            phosphorous: 0,
            soil_type: soil.to_string(),
            crop_type: crop.to_string(),
        }
    }

    #[test]
    fn resolves_categories() {
        let features = request("Sandy", "Ground Nuts").into_features().unwrap();
        assert_eq!(features.soil_type, SoilType::Sandy);
        assert_eq!(features.crop_type, CropType::GroundNuts);
    }

    #[test]
    fn soil_type_is_checked_first() {
        let err = request("Peaty", "Rice").into_features().unwrap_err();
        let ApiError::BadRequest(msg) = err else {
            panic!("expected bad request");
        };
        assert!(msg.starts_with("Invalid soil type 'Peaty'"));
    }

    #[test]
    fn unknown_crop_lists_valid_values() {
        let err = request("Red", "Rice").into_features().unwrap_err();
        let ApiError::BadRequest(msg) = err else {
            panic!("expected bad request");
        };
        assert!(msg.contains("Invalid crop type 'Rice'"));
        assert!(msg.contains("Oil seeds"));
    }

    #[test]
    fn float_readings_are_truncated() {
        let req: FertilizerRecommendationRequest = serde_json::from_str(
            r#"{"temperature": 26.9, "humidity": "52", "moisture": 38, "nitrogen": 37,
                "potassium": 0, "phosphorous": 0, "soil_type": "Sandy", "crop_type": "Maize"}"#,
        )
        .unwrap();
        assert_eq!(req.temperature, 26);
        assert_eq!(req.humidity, 52);
    }

    #[test]
    fn unknown_soil_wins_over_odd_readings() {
        let req = FertilizerRecommendationRequest {
            humidity: 150,
            moisture: -3,
            ..request("Peaty", "Maize")
        };
        assert!(req.validate().is_ok());
        let ApiError::BadRequest(msg) = req.into_features().unwrap_err() else {
            panic!("expected bad request");
        };
        assert!(msg.starts_with("Invalid soil type 'Peaty'"));
    }
}
