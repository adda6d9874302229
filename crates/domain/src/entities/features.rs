//! Model feature vectors
//!
//! Both tabular models were trained on a fixed column order. The
//! `feature_vector` methods are the single place that order is encoded.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CropType, SoilType};

/// Number of inputs to the crop recommender
pub const CROP_FEATURE_COUNT: usize = 7;

/// Number of inputs to the fertilizer recommender
pub const FERTILIZER_FEATURE_COUNT: usize = 8;

/// Soil and climate measurements for a crop recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropFeatures {
    /// Nitrogen content of the soil
    pub nitrogen: i64,
    /// Phosphorus content of the soil
    pub phosphorus: i64,
    /// Potassium content of the soil
    pub potassium: i64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Soil pH
    pub ph: f64,
    /// Rainfall in mm
    pub rainfall: f64,
}

impl CropFeatures {
    /// `[N, P, K, temperature, humidity, ph, rainfall]`
    #[must_use]
    pub fn feature_vector(&self) -> [f32; CROP_FEATURE_COUNT] {
        [
            self.nitrogen as f32,
            self.phosphorus as f32,
            self.potassium as f32,
            self.temperature as f32,
            self.humidity as f32,
            self.ph as f32,
            self.rainfall as f32,
        ]
    }
}

/// Soil measurements and categories for a fertilizer recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerFeatures {
    pub temperature: i64,
    pub humidity: i64,
    pub moisture: i64,
    pub nitrogen: i64,
    pub potassium: i64,
    pub phosphorous: i64,
    pub soil_type: SoilType,
    pub crop_type: CropType,
}

impl FertilizerFeatures {
    /// `[temperature, humidity, moisture, nitrogen, potassium, phosphorous, soil, crop]`
    ///
    /// Note potassium precedes phosphorous here, unlike the crop model.
    #[must_use]
    pub fn feature_vector(&self) -> [f32; FERTILIZER_FEATURE_COUNT] {
        [
            self.temperature as f32,
            self.humidity as f32,
            self.moisture as f32,
            self.nitrogen as f32,
            self.potassium as f32,
            self.phosphorous as f32,
            f32::from(self.soil_type.code()),
            f32::from(self.crop_type.code()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_vector_order() {
        let features = CropFeatures {
            nitrogen: 90,
            phosphorus: 42,
            potassium: 43,
            temperature: 20.87,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 202.93,
        };
        let v = features.feature_vector();
        assert_eq!(v[0], 90.0);
        assert_eq!(v[1], 42.0);
        assert_eq!(v[2], 43.0);
        assert!((v[3] - 20.87).abs() < 1e-4);
        assert_eq!(v[4], 82.0);
        assert_eq!(v[5], 6.5);
        assert!((v[6] - 202.93).abs() < 1e-3);
    }

    #[test]
    fn fertilizer_vector_order_and_codes() {
        let features = FertilizerFeatures {
            temperature: 26,
            humidity: 52,
            moisture: 38,
            nitrogen: 37,
            potassium: 0,
            phosphorous: 5,
            soil_type: SoilType::Sandy,
            crop_type: CropType::Maize,
        };
        assert_eq!(
            features.feature_vector(),
            [26.0, 52.0, 38.0, 37.0, 0.0, 5.0, 2.0, 11.0]
        );
    }
}
