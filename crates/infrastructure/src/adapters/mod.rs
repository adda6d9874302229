//! Infrastructure adapters
//!
//! Adapters connect application ports to the ONNX Runtime engines.

mod onnx_image_adapter;
mod onnx_tabular_adapter;
mod unavailable_model;

use std::sync::Arc;

use ai_core::{ImageModelConfig, InferenceError, TabularModelConfig};
use application::{
    error::ApplicationError,
    ports::{ImageModelPort, TabularModelPort},
};
use tracing::{error, info};

pub use onnx_image_adapter::OnnxImageAdapter;
pub use onnx_tabular_adapter::OnnxTabularAdapter;
pub use unavailable_model::UnavailableModel;

/// Load a tabular model, substituting [`UnavailableModel`] on failure
///
/// The server keeps running without the model; its endpoint reports the
/// load error instead.
pub fn tabular_model_or_unavailable(
    label: &str,
    config: &TabularModelConfig,
) -> Arc<dyn TabularModelPort> {
    match OnnxTabularAdapter::load(config) {
        Ok(adapter) => {
            info!(model = label, "Model ready");
            Arc::new(adapter)
        },
        Err(e) => {
            error!(model = label, error = %e, "Error loading model");
            Arc::new(UnavailableModel::new(label, e.to_string()))
        },
    }
}

/// Load an image model, substituting [`UnavailableModel`] on failure
pub fn image_model_or_unavailable(
    label: &str,
    config: &ImageModelConfig,
) -> Arc<dyn ImageModelPort> {
    match OnnxImageAdapter::load(config) {
        Ok(adapter) => {
            info!(model = label, "Model ready");
            Arc::new(adapter)
        },
        Err(e) => {
            error!(model = label, error = %e, "Error loading model");
            Arc::new(UnavailableModel::new(label, e.to_string()))
        },
    }
}

/// Convert an engine error to an application error
pub(crate) fn map_inference_error(err: InferenceError) -> ApplicationError {
    match err {
        InferenceError::ModelNotFound(_) | InferenceError::LoadFailed(_) => {
            ApplicationError::ModelUnavailable(err.to_string())
        },
        other => ApplicationError::Inference(other.to_string()),
    }
}

/// Convert a failed blocking task to an application error
pub(crate) fn map_join_error(err: tokio::task::JoinError) -> ApplicationError {
    ApplicationError::Internal(format!("inference task failed: {err}"))
}
