//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub models: ModelsStatus,
}

/// Readiness of every model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelsStatus {
    pub crop: ModelStatus,
    pub fertilizer: ModelStatus,
    pub plant: ModelStatus,
}

/// Status of a single model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelStatus {
    pub ready: bool,
    pub model: String,
}

impl ModelStatus {
    fn new(ready: bool, model: String) -> Self {
        Self { ready, model }
    }
}

/// Readiness check - are all models loaded?
#[utoipa::path(
    get,
    path = "/ready",
    tag = "system",
    responses(
        (status = 200, description = "All models loaded", body = ReadinessResponse),
        (status = 503, description = "At least one model is unavailable", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let models = ModelsStatus {
        crop: ModelStatus::new(
            state.crop_service.is_ready(),
            state.crop_service.model_name(),
        ),
        fertilizer: ModelStatus::new(
            state.fertilizer_service.is_ready(),
            state.fertilizer_service.model_name(),
        ),
        plant: ModelStatus::new(
            state.plant_service.is_ready(),
            state.plant_service.model_name(),
        ),
    };

    let ready = models.crop.ready && models.fertilizer.ready && models.plant.ready;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(ReadinessResponse { ready, models }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_crate_version() {
        let Json(resp) = health_check().await;
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn readiness_response_serializes() {
        let resp = ReadinessResponse {
            ready: false,
            models: ModelsStatus {
                crop: ModelStatus::new(true, "crop_classifier".into()),
                fertilizer: ModelStatus::new(false, "fertilizer_classifier".into()),
                plant: ModelStatus::new(true, "medicinal_plant".into()),
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["ready"], false);
        assert_eq!(json["models"]["fertilizer"]["ready"], false);
        assert_eq!(json["models"]["crop"]["model"], "crop_classifier");
    }
}
