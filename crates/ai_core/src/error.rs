//! Inference errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or running a model
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Model file does not exist
    #[error("Model file not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    /// ONNX Runtime refused the model or its session options
    #[error("Failed to load model: {0}")]
    LoadFailed(String),

    /// Input does not match what the model expects
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Uploaded bytes are not a decodable image
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    /// Session run failed
    #[error("Inference failed: {0}")]
    RunFailed(String),

    /// Output tensor has an unsupported type or shape
    #[error("Unexpected model output: {0}")]
    InvalidOutput(String),
}

impl InferenceError {
    pub(crate) fn load(err: impl std::fmt::Display) -> Self {
        Self::LoadFailed(err.to_string())
    }

    pub(crate) fn run(err: impl std::fmt::Display) -> Self {
        Self::RunFailed(err.to_string())
    }
}

impl From<image::ImageError> for InferenceError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_not_found_shows_path() {
        let err = InferenceError::ModelNotFound(PathBuf::from("models/crop.onnx"));
        assert_eq!(err.to_string(), "Model file not found: models/crop.onnx");
    }

    #[test]
    fn helpers_wrap_display() {
        assert_eq!(
            InferenceError::load("bad opset").to_string(),
            "Failed to load model: bad opset"
        );
        assert_eq!(
            InferenceError::run("shape").to_string(),
            "Inference failed: shape"
        );
    }
}
