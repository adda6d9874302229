//! Crop recommendation service

use std::{fmt, sync::Arc, time::Instant};

use domain::{
    CropFeatures, CropRecommendation,
    catalog::{UNKNOWN_CROP, crop_name},
};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::TabularModelPort};

/// Recommends a crop from soil nutrients and climate
pub struct CropRecommendationService {
    model: Arc<dyn TabularModelPort>,
}

impl fmt::Debug for CropRecommendationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropRecommendationService")
            .field("model", &self.model.model_name())
            .finish()
    }
}

impl CropRecommendationService {
    /// Create a new crop recommendation service
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

    /// Predict the best crop for the given conditions
    ///
    /// Ids missing from the crop table resolve to [`UNKNOWN_CROP`] rather
    /// than failing.
    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        features: CropFeatures,
    ) -> Result<CropRecommendation, ApplicationError> {
        let start = Instant::now();
        let label = self.model.predict(&features.feature_vector()).await?;

        let crop_id = label.as_id().ok_or_else(|| {
            ApplicationError::Inference(format!("crop model returned non-numeric label '{label}'"))
        })?;
        let crop = crop_name(crop_id).unwrap_or(UNKNOWN_CROP).to_string();

        debug!(
            crop_id,
            crop = %crop,
            latency_ms = start.elapsed().as_millis() as u64,
            "Crop recommendation computed"
        );

        Ok(CropRecommendation { crop, crop_id })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::ports::{MockTabularModelPort, ModelLabel};

    fn sample_features() -> CropFeatures {
        CropFeatures {
            nitrogen: 90,
            phosphorus: 42,
            potassium: 43,
            temperature: 20.87,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 202.93,
        }
    }

    fn service_returning(label: ModelLabel) -> CropRecommendationService {
        let mut mock = MockTabularModelPort::new();
        mock.expect_predict()
            .returning(move |_| Ok(label.clone()));
        mock.expect_model_name()
            .returning(|| "crop-test".to_string());
        CropRecommendationService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn known_id_maps_to_crop_name() {
        let service = service_returning(ModelLabel::Id(1));
        let rec = service.recommend(sample_features()).await.unwrap();
        assert_eq!(rec.crop, "Rice");
        assert_eq!(rec.crop_id, 1);
    }

    #[tokio::test]
    async fn numeric_text_label_is_accepted() {
        let service = service_returning(ModelLabel::Text("20".to_string()));
        let rec = service.recommend(sample_features()).await.unwrap();
        assert_eq!(rec.crop_id, 20);
        assert_ne!(rec.crop, UNKNOWN_CROP);
    }

    #[tokio::test]
    async fn unknown_id_falls_back() {
        let service = service_returning(ModelLabel::Id(99));
        let rec = service.recommend(sample_features()).await.unwrap();
        assert_eq!(rec.crop, UNKNOWN_CROP);
        assert_eq!(rec.crop_id, 99);
    }

    #[tokio::test]
    async fn non_numeric_label_is_inference_error() {
        let service = service_returning(ModelLabel::Text("rice".to_string()));
        let err = service.recommend(sample_features()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Inference(_)));
    }

    #[tokio::test]
    async fn passes_features_in_model_order() {
        let mut mock = MockTabularModelPort::new();
        mock.expect_predict()
            .with(function(|v: &[f32]| {
                v.len() == 7 && v[0] == 90.0 && v[1] == 42.0 && v[2] == 43.0 && v[5] == 6.5
            }))
            .times(1)
            .returning(|_| Ok(ModelLabel::Id(1)));
        let service = CropRecommendationService::new(Arc::new(mock));
        assert!(service.recommend(sample_features()).await.is_ok());
    }

    #[tokio::test]
    async fn model_errors_propagate() {
        let mut mock = MockTabularModelPort::new();
        mock.expect_predict()
            .returning(|_| Err(ApplicationError::ModelUnavailable("crop".to_string())));
        let service = CropRecommendationService::new(Arc::new(mock));
        let err = service.recommend(sample_features()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ModelUnavailable(_)));
    }

    #[test]
    fn readiness_delegates_to_model() {
        let mut mock = MockTabularModelPort::new();
        mock.expect_is_ready().return_const(false);
        let service = CropRecommendationService::new(Arc::new(mock));
        assert!(!service.is_ready());
    }

    #[test]
    fn debug_shows_model_name() {
        let service = service_returning(ModelLabel::Id(1));
        assert!(format!("{service:?}").contains("crop-test"));
    }
}
