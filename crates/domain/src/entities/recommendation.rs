//! Recommendation results of the tabular models

use serde::{Deserialize, Serialize};

/// Crop chosen by the crop recommender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecommendation {
    /// Crop name from the crop table, or the unknown-crop placeholder
    pub crop: String,
    /// Raw id predicted by the model
    pub crop_id: i64,
}

impl CropRecommendation {
    /// Human-readable summary
    pub fn message(&self) -> String {
        format!(
            "{} is recommended for the given soil and environmental conditions.",
            self.crop
        )
    }
}

/// Fertilizer chosen by the fertilizer recommender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerRecommendation {
    /// Fertilizer code as predicted by the model
    pub fertilizer: String,
    /// Description from the fertilizer table, or a placeholder
    pub description: String,
}

impl FertilizerRecommendation {
    /// Human-readable summary
    pub fn message(&self) -> String {
        format!("{} is recommended for the given conditions.", self.fertilizer)
    }
}
