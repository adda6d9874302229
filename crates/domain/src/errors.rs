//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Soil type is not part of the fixed vocabulary
    #[error("Invalid soil type '{value}'. Valid types are: {}", valid.join(", "))]
    InvalidSoilType {
        value: String,
        valid: Vec<&'static str>,
    },

    /// Crop type is not part of the fixed vocabulary
    #[error("Invalid crop type '{value}'. Valid types are: {}", valid.join(", "))]
    InvalidCropType {
        value: String,
        valid: Vec<&'static str>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_soil_type_lists_valid_values() {
        let err = DomainError::InvalidSoilType {
            value: "Silty".to_string(),
            valid: vec!["Loamy", "Sandy"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid soil type 'Silty'. Valid types are: Loamy, Sandy"
        );
    }

    #[test]
    fn invalid_crop_type_lists_valid_values() {
        let err = DomainError::InvalidCropType {
            value: "Rye".to_string(),
            valid: vec!["Wheat", "Barley"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid crop type 'Rye'. Valid types are: Wheat, Barley"
        );
    }
}
