//! Crop type value object
//!
//! Crop categories understood by the fertilizer recommender, label-encoded
//! as 1..=11 in training order.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Crop category accepted by the fertilizer recommender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Sugarcane,
    Cotton,
    Millets,
    Paddy,
    Pulses,
    Wheat,
    Tobacco,
    Barley,
    #[serde(rename = "Oil seeds")]
    OilSeeds,
    #[serde(rename = "Ground Nuts")]
    GroundNuts,
    Maize,
}

impl CropType {
    /// Every crop type, in encoding order
    pub const ALL: [Self; 11] = [
        Self::Sugarcane,
        Self::Cotton,
        Self::Millets,
        Self::Paddy,
        Self::Pulses,
        Self::Wheat,
        Self::Tobacco,
        Self::Barley,
        Self::OilSeeds,
        Self::GroundNuts,
        Self::Maize,
    ];

    /// Numeric code fed to the model
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Sugarcane => 1,
            Self::Cotton => 2,
            Self::Millets => 3,
            Self::Paddy => 4,
            Self::Pulses => 5,
            Self::Wheat => 6,
            Self::Tobacco => 7,
            Self::Barley => 8,
            Self::OilSeeds => 9,
            Self::GroundNuts => 10,
            Self::Maize => 11,
        }
    }

    /// Name as it appears in requests
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sugarcane => "Sugarcane",
            Self::Cotton => "Cotton",
            Self::Millets => "Millets",
            Self::Paddy => "Paddy",
            Self::Pulses => "Pulses",
            Self::Wheat => "Wheat",
            Self::Tobacco => "Tobacco",
            Self::Barley => "Barley",
            Self::OilSeeds => "Oil seeds",
            Self::GroundNuts => "Ground Nuts",
            Self::Maize => "Maize",
        }
    }

    /// Names of all valid crop types
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CropType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|crop| crop.name() == s)
            .ok_or_else(|| DomainError::InvalidCropType {
                value: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}
