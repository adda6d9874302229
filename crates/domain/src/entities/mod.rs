//! Domain entities - feature vectors and model results

mod features;
mod plant_prediction;
mod recommendation;

pub use features::{CROP_FEATURE_COUNT, CropFeatures, FERTILIZER_FEATURE_COUNT, FertilizerFeatures};
pub use plant_prediction::{AyurvedicInfo, PlantIdentification, PlantPrediction};
pub use recommendation::{CropRecommendation, FertilizerRecommendation};
