//! Medicinal plant identification service

use std::{cmp::Ordering, fmt, sync::Arc};

use domain::{PlantIdentification, PlantPrediction};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ImageModelPort};

/// Number of candidates returned alongside the top prediction
pub const TOP_PREDICTIONS: usize = 3;

/// Identifies medicinal plants in uploaded images
pub struct PlantIdentificationService {
    model: Arc<dyn ImageModelPort>,
}

impl fmt::Debug for PlantIdentificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlantIdentificationService")
            .field("model", &self.model.model_name())
            .finish()
    }
}

impl PlantIdentificationService {
    /// Create a new plant identification service
    pub fn new(model: Arc<dyn ImageModelPort>) -> Self {
        Self { model }
    }

    /// Whether the underlying model can serve predictions
    pub fn is_ready(&self) -> bool {
        self.model.is_ready()
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> String {
        self.model.model_name()
    }

    /// Classify an encoded image and enrich the best matches
    #[instrument(skip(self, image), fields(image_len = image.len()))]
    pub async fn identify(&self, image: Vec<u8>) -> Result<PlantIdentification, ApplicationError> {
        if image.is_empty() {
            return Err(ApplicationError::InvalidInput("No file selected".to_string()));
        }

        let scores = self.model.classify(image).await?;
        let ranked = rank_scores(&scores, TOP_PREDICTIONS);
        let Some(&(best_index, best_score)) = ranked.first() else {
            return Err(ApplicationError::Inference(
                "plant model returned no usable scores".to_string(),
            ));
        };

        debug!(
            class_index = best_index,
            confidence = best_score,
            "Plant identified"
        );

        Ok(PlantIdentification {
            prediction: PlantPrediction::from_index(best_index, best_score),
            top_predictions: ranked
                .into_iter()
                .map(|(index, score)| PlantPrediction::from_index(index, score))
                .collect(),
        })
    }
}

/// Indices and scores of the `k` highest scores, best first
///
/// NaN scores are never ranked. Equal scores keep ascending index order.
pub(crate) fn rank_scores(scores: &[f32], k: usize) -> Vec<(usize, f32)> {
    let mut ranked: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| !score.is_nan())
        .collect();
    ranked.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });
    ranked.truncate(k);
    ranked
}
