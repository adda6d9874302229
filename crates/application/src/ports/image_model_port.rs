//! Image model port - Interface for image classifiers

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for classifiers that score an encoded image against fixed classes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageModelPort: Send + Sync {
    /// Score an encoded image (JPEG, PNG, ...), one value per class index
    async fn classify(&self, image: Vec<u8>) -> Result<Vec<f32>, ApplicationError>;

    /// Name of the loaded model, for logs and status endpoints
    fn model_name(&self) -> String;

    /// Whether the model is loaded and able to serve predictions
    fn is_ready(&self) -> bool;
}
