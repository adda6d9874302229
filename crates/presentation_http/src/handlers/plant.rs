//! Medicinal plant identification handler

use std::time::Instant;

use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use domain::{AyurvedicInfo, PlantIdentification, PlantPrediction};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ErrorResponse},
    handlers::metrics::ModelKind,
    state::AppState,
};

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

/// Multipart upload form
#[derive(Debug, ToSchema)]
pub struct PlantUploadForm {
    /// Image of a leaf or plant
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Ayurvedic description and uses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AyurvedicInfoDto {
    pub description: String,
    pub uses: Vec<String>,
}

impl From<AyurvedicInfo> for AyurvedicInfoDto {
    fn from(info: AyurvedicInfo) -> Self {
        Self {
            description: info.description,
            uses: info.uses,
        }
    }
}

/// A scored plant class
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlantPredictionDto {
    #[schema(example = "Ocimum Tenuiflorum (Tulsi)")]
    pub class_name: String,
    #[schema(example = 0.93)]
    pub confidence: f32,
    #[schema(example = 19)]
    pub class_index: usize,
    pub ayurvedic_info: AyurvedicInfoDto,
}

impl From<PlantPrediction> for PlantPredictionDto {
    fn from(p: PlantPrediction) -> Self {
        Self {
            class_name: p.class_name,
            confidence: p.confidence,
            class_index: p.class_index,
            ayurvedic_info: p.ayurvedic_info.into(),
        }
    }
}

/// Plant identification response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlantPredictionResponse {
    #[schema(example = "success")]
    pub status: String,
    pub prediction: PlantPredictionDto,
    /// Best candidates, highest confidence first
    pub top_predictions: Vec<PlantPredictionDto>,
}

impl From<PlantIdentification> for PlantPredictionResponse {
    fn from(id: PlantIdentification) -> Self {
        Self {
            status: "success".to_string(),
            prediction: id.prediction.into(),
            top_predictions: id.top_predictions.into_iter().map(Into::into).collect(),
        }
    }
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(err.body_text())
    }
}

/// Pull the bytes of the `file` part out of the form
async fn read_file_field(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if field.file_name() == Some("") {
            return Err(ApiError::BadRequest("No file selected".to_string()));
        }
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(bytes.to_vec());
    }
    Err(ApiError::BadRequest("No file part in the request".to_string()))
}

/// Identify a medicinal plant in an uploaded image
#[utoipa::path(
    post,
    path = "/medicinal-plant-prediction",
    tag = "plants",
    request_body(content = PlantUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Plant identified", body = PlantPredictionResponse),
        (status = 400, description = "Missing or empty file", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 500, description = "Decoding or inference failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, multipart))]
pub async fn predict_plant(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PlantPredictionResponse>, ApiError> {
    let multipart = multipart.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Request is not a multipart form");
        ApiError::BadRequest("No file part in the request".to_string())
    })?;
    let image = read_file_field(multipart).await?;

    let start = Instant::now();
    let result = state.plant_service.identify(image).await;
    state.metrics.record_inference(
        ModelKind::Plant,
        result.is_ok(),
        start.elapsed().as_micros() as u64,
    );

    Ok(Json(result?.into()))
}
