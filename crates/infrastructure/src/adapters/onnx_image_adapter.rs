//! ONNX image adapter - Implements ImageModelPort using ai_core

use std::sync::Arc;

use ai_core::{ImageClassifier, ImageModelConfig, InferenceError};
use application::{error::ApplicationError, ports::ImageModelPort};
use async_trait::async_trait;
use tracing::instrument;

use super::{map_inference_error, map_join_error};

/// Adapter running an [`ImageClassifier`] on the blocking thread pool
#[derive(Debug, Clone)]
pub struct OnnxImageAdapter {
    classifier: Arc<ImageClassifier>,
}

impl OnnxImageAdapter {
    /// Load the model described by `config`
    pub fn load(config: &ImageModelConfig) -> Result<Self, InferenceError> {
        ImageClassifier::load(config).map(|classifier| Self {
            classifier: Arc::new(classifier),
        })
    }
}

#[async_trait]
impl ImageModelPort for OnnxImageAdapter {
    #[instrument(skip(self, image), fields(model = %self.classifier.name(), image_len = image.len()))]
    async fn classify(&self, image: Vec<u8>) -> Result<Vec<f32>, ApplicationError> {
        let classifier = Arc::clone(&self.classifier);

        tokio::task::spawn_blocking(move || classifier.classify(&image))
            .await
            .map_err(map_join_error)?
            .map_err(map_inference_error)
    }

    fn model_name(&self) -> String {
        self.classifier.name().to_string()
    }

    fn is_ready(&self) -> bool {
        true
    }
}
