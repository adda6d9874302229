//! ONNX tabular adapter - Implements TabularModelPort using ai_core

use std::sync::Arc;

use ai_core::{ClassLabel, InferenceError, TabularClassifier, TabularModelConfig};
use application::{
    error::ApplicationError,
    ports::{ModelLabel, TabularModelPort},
};
use async_trait::async_trait;
use tracing::instrument;

use super::{map_inference_error, map_join_error};

/// Adapter running a [`TabularClassifier`] on the blocking thread pool
#[derive(Debug, Clone)]
pub struct OnnxTabularAdapter {
    classifier: Arc<TabularClassifier>,
}

impl OnnxTabularAdapter {
    /// Load the model described by `config`
    pub fn load(config: &TabularModelConfig) -> Result<Self, InferenceError> {
        TabularClassifier::load(config).map(|classifier| Self {
            classifier: Arc::new(classifier),
        })
    }
}

fn to_model_label(label: ClassLabel) -> ModelLabel {
    match label {
        ClassLabel::Id(id) => ModelLabel::Id(id),
        ClassLabel::Text(text) => ModelLabel::Text(text),
    }
}

#[async_trait]
impl TabularModelPort for OnnxTabularAdapter {
    #[instrument(skip(self, features), fields(model = %self.classifier.name()))]
    async fn predict(&self, features: &[f32]) -> Result<ModelLabel, ApplicationError> {
        let classifier = Arc::clone(&self.classifier);
        let features = features.to_vec();

        let label = tokio::task::spawn_blocking(move || classifier.predict(&features))
            .await
            .map_err(map_join_error)?
            .map_err(map_inference_error)?;

        Ok(to_model_label(label))
    }

    fn model_name(&self) -> String {
        self.classifier.name().to_string()
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reports_missing_file() {
        let err = OnnxTabularAdapter::load(&TabularModelConfig::new("nope.onnx")).unwrap_err();
        assert!(matches!(err, InferenceError::ModelNotFound(_)));
    }

    #[test]
    fn class_label_conversion() {
        assert_eq!(to_model_label(ClassLabel::Id(4)), ModelLabel::Id(4));
        assert_eq!(
            to_model_label(ClassLabel::Text("DAP".to_string())),
            ModelLabel::Text("DAP".to_string())
        );
    }
}
