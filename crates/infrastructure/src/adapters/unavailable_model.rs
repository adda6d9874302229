//! Stand-in for a model that failed to load

use application::{
    error::ApplicationError,
    ports::{ImageModelPort, ModelLabel, TabularModelPort},
};
use async_trait::async_trait;
use tracing::warn;

/// Model port that rejects every request
///
/// Installed in place of a model whose file was missing or unreadable at
/// startup, so the remaining endpoints keep serving.
#[derive(Debug, Clone)]
pub struct UnavailableModel {
    name: String,
    reason: String,
}

impl UnavailableModel {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }

    fn error(&self) -> ApplicationError {
        warn!(model = %self.name, "Request for unavailable model");
        ApplicationError::ModelUnavailable(format!(
            "{} model is not loaded: {}",
            self.name, self.reason
        ))
    }
}

#[async_trait]
impl TabularModelPort for UnavailableModel {
    async fn predict(&self, _features: &[f32]) -> Result<ModelLabel, ApplicationError> {
        Err(self.error())
    }

    fn model_name(&self) -> String {
        self.name.clone()
    }

    fn is_ready(&self) -> bool {
        false
    }
}

#[async_trait]
impl ImageModelPort for UnavailableModel {
    async fn classify(&self, _image: Vec<u8>) -> Result<Vec<f32>, ApplicationError> {
        Err(self.error())
    }

    fn model_name(&self) -> String {
        self.name.clone()
    }

    fn is_ready(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use application::{CropRecommendationService, PlantIdentificationService};
    use domain::CropFeatures;
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn tabular_requests_fail() {
        let model = UnavailableModel::new("crop", "file not found");
        let err = TabularModelPort::predict(&model, &[0.0; 7]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model unavailable: crop model is not loaded: file not found"
        );
    }

    #[tokio::test]
    async fn image_requests_fail() {
        let model = UnavailableModel::new("plant", "bad opset");
        let err = model.classify(vec![1, 2, 3]).await.unwrap_err();
        assert!(matches!(&err, ApplicationError::ModelUnavailable(m) if m.ends_with("bad opset")));
        assert!(!ImageModelPort::is_ready(&model));
    }

    #[tokio::test]
    async fn services_surface_the_error() {
        let crop = CropRecommendationService::new(Arc::new(UnavailableModel::new("crop", "x")));
        assert!(!crop.is_ready());
        let features = CropFeatures {
            nitrogen: 1,
            phosphorus: 1,
            potassium: 1,
            temperature: 1.0,
            humidity: 1.0,
            ph: 7.0,
            rainfall: 1.0,
        };
        assert!(crop.recommend(features).await.is_err());

        let plant = PlantIdentificationService::new(Arc::new(UnavailableModel::new("plant", "x")));
        assert!(plant.identify(vec![9]).await.is_err());
    }
}
