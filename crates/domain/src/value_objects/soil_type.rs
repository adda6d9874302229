//! Soil type value object
//!
//! The fertilizer model was trained with soil types label-encoded as
//! 1..=5. The mapping is fixed and must not be reordered.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::SoilType;
//!
//! let soil: SoilType = "Sandy".parse().expect("known soil type");
//! assert_eq!(soil.code(), 2);
//! assert!("sandy".parse::<SoilType>().is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Soil type accepted by the fertilizer recommender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Sandy,
    Clayey,
    Black,
    Red,
}

impl SoilType {
    /// Every soil type, in encoding order
    pub const ALL: [Self; 5] = [
        Self::Loamy,
        Self::Sandy,
        Self::Clayey,
        Self::Black,
        Self::Red,
    ];

    /// Numeric code fed to the model
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Loamy => 1,
            Self::Sandy => 2,
            Self::Clayey => 3,
            Self::Black => 4,
            Self::Red => 5,
        }
    }

    /// Name as it appears in requests
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Loamy => "Loamy",
            Self::Sandy => "Sandy",
            Self::Clayey => "Clayey",
            Self::Black => "Black",
            Self::Red => "Red",
        }
    }

    /// Names of all valid soil types
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoilType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|soil| soil.name() == s)
            .ok_or_else(|| DomainError::InvalidSoilType {
                value: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_training_encoding() {
        let codes: Vec<u8> = SoilType::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn parses_every_known_name() {
        for soil in SoilType::ALL {
            assert_eq!(soil.name().parse::<SoilType>(), Ok(soil));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!("loamy".parse::<SoilType>().is_err());
        assert!("LOAMY".parse::<SoilType>().is_err());
    }

    #[test]
    fn unknown_value_lists_valid_names() {
        let err = "Peaty".parse::<SoilType>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid soil type"));
        for name in ["Loamy", "Sandy", "Clayey", "Black", "Red"] {
            assert!(msg.contains(name), "missing {name} in {msg}");
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(SoilType::Clayey.to_string(), "Clayey");
    }
}
