//! Application state shared across handlers

use std::sync::Arc;

use application::{
    CropRecommendationService, FertilizerRecommendationService, ImageModelPort,
    PlantIdentificationService, TabularModelPort,
};
use infrastructure::AppConfig;

use crate::handlers::metrics::MetricsCollector;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Crop recommender
    pub crop_service: Arc<CropRecommendationService>,
    /// Fertilizer recommender
    pub fertilizer_service: Arc<FertilizerRecommendationService>,
    /// Medicinal plant classifier
    pub plant_service: Arc<PlantIdentificationService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Request and inference counters
    pub metrics: Arc<MetricsCollector>,
}

impl AppState {
    /// Wire the services around the loaded models
    pub fn new(
        crop_model: Arc<dyn TabularModelPort>,
        fertilizer_model: Arc<dyn TabularModelPort>,
        plant_model: Arc<dyn ImageModelPort>,
        config: AppConfig,
    ) -> Self {
        Self {
            crop_service: Arc::new(CropRecommendationService::new(crop_model)),
            fertilizer_service: Arc::new(FertilizerRecommendationService::new(fertilizer_model)),
            plant_service: Arc::new(PlantIdentificationService::new(plant_model)),
            config: Arc::new(config),
            metrics: Arc::new(MetricsCollector::new()),
        }
    }
}
