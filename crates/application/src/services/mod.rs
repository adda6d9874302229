//! Application services - recommendation and identification use cases

mod crop_recommendation_service;
mod fertilizer_recommendation_service;
mod plant_identification_service;

pub use crop_recommendation_service::CropRecommendationService;
pub use fertilizer_recommendation_service::FertilizerRecommendationService;
pub use plant_identification_service::{PlantIdentificationService, TOP_PREDICTIONS};
