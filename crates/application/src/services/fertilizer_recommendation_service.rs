//! Fertilizer recommendation service

use std::{fmt, sync::Arc};

use domain::{
    FertilizerFeatures, FertilizerRecommendation,
    catalog::{NO_FERTILIZER_INFO, fertilizer_description},
};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::TabularModelPort};

/// Recommends a fertilizer from soil measurements, soil type and crop type
pub struct FertilizerRecommendationService {
    model: Arc<dyn TabularModelPort>,
}

impl fmt::Debug for FertilizerRecommendationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FertilizerRecommendationService")
            .field("model", &self.model.model_name())
            .finish()
    }
}

impl FertilizerRecommendationService {
    /// Create a new fertilizer recommendation service
    pub fn new(model: Arc<dyn TabularModelPort>) -> Self {
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

    /// Predict a fertilizer and attach its description
    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        features: FertilizerFeatures,
    ) -> Result<FertilizerRecommendation, ApplicationError> {
        let label = self.model.predict(&features.feature_vector()).await?;
        let fertilizer = label.to_string();
        let description = fertilizer_description(&fertilizer)
            .unwrap_or(NO_FERTILIZER_INFO)
            .to_string();

        debug!(fertilizer = %fertilizer, "Fertilizer recommendation computed");

        Ok(FertilizerRecommendation {
            fertilizer,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use domain::{CropType, SoilType};
    use mockall::predicate::function;

    use super::*;
    use crate::ports::{MockTabularModelPort, ModelLabel};

    fn sample_features() -> FertilizerFeatures {
        FertilizerFeatures {
            temperature: 26,
            humidity: 52,
            moisture: 38,
            nitrogen: 37,
            potassium: 0,
            phosphorous: 0,
            soil_type: SoilType::Sandy,
            crop_type: CropType::Maize,
        }
    }

    fn service_returning(label: ModelLabel) -> FertilizerRecommendationService {
        let mut mock = MockTabularModelPort::new();
        mock.expect_predict()
            .returning(move |_| Ok(label.clone()));
        FertilizerRecommendationService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn known_fertilizer_has_description() {
        let service = service_returning(ModelLabel::Text("Urea".to_string()));
        let rec = service.recommend(sample_features()).await.unwrap();
        assert_eq!(rec.fertilizer, "Urea");
        assert_ne!(rec.description, NO_FERTILIZER_INFO);
        assert!(rec.description.contains("nitrogen"));
    }

    #[tokio::test]
    async fn unknown_fertilizer_uses_placeholder() {
        let service = service_returning(ModelLabel::Text("Compost".to_string()));
        let rec = service.recommend(sample_features()).await.unwrap();
        assert_eq!(rec.fertilizer, "Compost");
        assert_eq!(rec.description, NO_FERTILIZER_INFO);
    }

    #[tokio::test]
    async fn numeric_label_is_stringified() {
        let service = service_returning(ModelLabel::Id(3));
        let rec = service.recommend(sample_features()).await.unwrap();
        assert_eq!(rec.fertilizer, "3");
        assert_eq!(rec.description, NO_FERTILIZER_INFO);
    }

    #[tokio::test]
    async fn category_codes_reach_the_model() {
        let mut mock = MockTabularModelPort::new();
        mock.expect_predict()
            .with(function(|v: &[f32]| v.len() == 8 && v[6] == 2.0 && v[7] == 11.0))
            .times(1)
            .returning(|_| Ok(ModelLabel::Text("DAP".to_string())));
        let service = FertilizerRecommendationService::new(Arc::new(mock));
        let rec = service.recommend(sample_features()).await.unwrap();
        assert_eq!(rec.fertilizer, "DAP");
    }

    #[tokio::test]
    async fn model_errors_propagate() {
        let mut mock = MockTabularModelPort::new();
        mock.expect_predict()
            .returning(|_| Err(ApplicationError::Inference("boom".to_string())));
        let service = FertilizerRecommendationService::new(Arc::new(mock));
        assert!(service.recommend(sample_features()).await.is_err());
    }
}
