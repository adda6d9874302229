//! Service index

use std::collections::BTreeMap;

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Index response listing the available endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "Welcome to AgriAI API")]
    pub message: String,
    /// Path → short description
    pub endpoints: BTreeMap<String, String>,
}

/// Describe the service
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service index", body = HomeResponse)
    )
)]
pub async fn home() -> Json<HomeResponse> {
    let endpoints = [
        ("/crop-recommendation", "POST - Get crop recommendations"),
        (
            "/fertilizer-recommendation",
            "POST - Get fertilizer recommendations",
        ),
        (
            "/medicinal-plant-prediction",
            "POST - Identify a medicinal plant from an image",
        ),
        ("/health", "GET - Liveness check"),
        ("/ready", "GET - Model readiness"),
        ("/metrics", "GET - Request and inference metrics"),
        ("/metrics/prometheus", "GET - Metrics in Prometheus text format"),
        ("/swagger-ui", "GET - Interactive API documentation"),
        ("/api-docs/openapi.json", "GET - OpenAPI specification"),
    ]
    .into_iter()
    .map(|(path, description)| (path.to_string(), description.to_string()))
    .collect();

    Json(HomeResponse {
        status: "success".to_string(),
        message: "Welcome to AgriAI API".to_string(),
        endpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_prediction_endpoints() {
        let Json(body) = home().await;
        assert_eq!(body.status, "success");
        assert_eq!(body.message, "Welcome to AgriAI API");
        assert!(body.endpoints.contains_key("/crop-recommendation"));
        assert!(body.endpoints.contains_key("/fertilizer-recommendation"));
        assert!(body.endpoints.contains_key("/medicinal-plant-prediction"));
    }

    #[tokio::test]
    async fn lists_operational_and_docs_endpoints() {
        let Json(body) = home().await;
        for path in [
            "/health",
            "/ready",
            "/metrics",
            "/metrics/prometheus",
            "/swagger-ui",
            "/api-docs/openapi.json",
        ] {
            assert!(body.endpoints.contains_key(path), "missing {path}");
        }
        assert_eq!(body.endpoints.len(), 9);
    }
}
