//! OpenAPI documentation module
//!
//! Provides OpenAPI 3.0 documentation for the AgriAI HTTP API, served
//! through Swagger UI.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for AgriAI
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AgriAI API",
        description = "Crop and fertilizer recommendations and medicinal plant identification"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "system", description = "Service index, liveness and model readiness"),
        (name = "recommendations", description = "Crop and fertilizer recommenders"),
        (name = "plants", description = "Medicinal plant identification from images"),
        (name = "metrics", description = "Request and inference metrics")
    ),
    paths(
        handlers::home::home,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::crop::recommend_crop,
        handlers::fertilizer::recommend_fertilizer,
        handlers::plant::predict_plant,
        handlers::metrics::get_metrics,
        handlers::metrics::get_metrics_prometheus,
    ),
    components(
        schemas(
            handlers::home::HomeResponse,
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::ModelsStatus,
            handlers::health::ModelStatus,
            handlers::crop::CropRecommendationRequest,
            handlers::crop::CropRecommendationDto,
            handlers::crop::CropRecommendationResponse,
            handlers::fertilizer::FertilizerRecommendationRequest,
            handlers::fertilizer::FertilizerRecommendationDto,
            handlers::fertilizer::FertilizerRecommendationResponse,
            handlers::plant::PlantUploadForm,
            handlers::plant::AyurvedicInfoDto,
            handlers::plant::PlantPredictionDto,
            handlers::plant::PlantPredictionResponse,
            handlers::metrics::MetricsResponse,
            handlers::metrics::AppMetrics,
            handlers::metrics::RequestMetrics,
            handlers::metrics::InferenceMetrics,
            handlers::metrics::ModelMetricsSet,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/api-docs/openapi.json` - OpenAPI specification (used by Swagger UI)
/// - `/swagger-ui/*` - Swagger UI interactive documentation
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_is_valid() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&doc).expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("AgriAI API"));
        assert!(json.contains("/crop-recommendation"));
        assert!(json.contains("/fertilizer-recommendation"));
        assert!(json.contains("/medicinal-plant-prediction"));
        assert!(json.contains("multipart/form-data"));
    }

    #[test]
    fn openapi_has_all_tags() {
        let doc = ApiDoc::openapi();
        let tags: Vec<&str> = doc
            .tags
            .as_ref()
            .map(|t| t.iter().map(|tag| tag.name.as_str()).collect())
            .unwrap_or_default();

        for tag in ["system", "recommendations", "plants", "metrics"] {
            assert!(tags.contains(&tag), "missing tag {tag}");
        }
    }

    #[test]
    fn request_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("Missing components");
        assert!(components.schemas.contains_key("CropRecommendationRequest"));
        assert!(components.schemas.contains_key("FertilizerRecommendationRequest"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
