//! Image classification results enriched with Ayurvedic information

use serde::{Deserialize, Serialize};

use crate::catalog::{NO_PLANT_INFO, UNKNOWN_PLANT, plant_class_name, plant_profile};

/// Ayurvedic description and uses of a plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyurvedicInfo {
    pub description: String,
    pub uses: Vec<String>,
}

impl AyurvedicInfo {
    /// Look up the profile of a class, falling back to a placeholder
    pub fn for_class(class_name: &str) -> Self {
        plant_profile(class_name).map_or_else(
            || Self {
                description: NO_PLANT_INFO.to_string(),
                uses: Vec::new(),
            },
            |profile| Self {
                description: profile.description.to_string(),
                uses: profile.uses.iter().map(ToString::to_string).collect(),
            },
        )
    }
}

/// A single scored plant class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantPrediction {
    pub class_name: String,
    pub confidence: f32,
    pub class_index: usize,
    pub ayurvedic_info: AyurvedicInfo,
}

impl PlantPrediction {
    /// Build a prediction for a classifier output index and score
    pub fn from_index(class_index: usize, confidence: f32) -> Self {
        let class_name = plant_class_name(class_index).unwrap_or(UNKNOWN_PLANT);
        Self {
            class_name: class_name.to_string(),
            confidence,
            class_index,
            ayurvedic_info: AyurvedicInfo::for_class(class_name),
        }
    }
}

/// Top-1 prediction plus the best few candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantIdentification {
    pub prediction: PlantPrediction,
    pub top_predictions: Vec<PlantPrediction>,
}
