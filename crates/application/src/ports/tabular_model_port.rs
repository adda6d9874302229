//! Tabular model port - Interface for classifiers over numeric features

use std::fmt;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Label predicted by a tabular classifier
///
/// Classifiers trained on integer targets emit ids; classifiers trained on
/// string targets emit the label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelLabel {
    Id(i64),
    Text(String),
}

impl ModelLabel {
    /// Numeric id, also accepting integer-valued text labels
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ModelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Port for classifiers that take a fixed-length numeric feature vector
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TabularModelPort: Send + Sync {
    /// Predict the label for a single feature vector
    async fn predict(&self, features: &[f32]) -> Result<ModelLabel, ApplicationError>;

    /// Name of the loaded model, for logs and status endpoints
    fn model_name(&self) -> String;

    /// Whether the model is loaded and able to serve predictions
    fn is_ready(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TabularModelPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TabularModelPort>();
    }

    #[test]
    fn id_label_as_id() {
        assert_eq!(ModelLabel::Id(7).as_id(), Some(7));
    }

    #[test]
    fn numeric_text_label_as_id() {
        assert_eq!(ModelLabel::Text("12".to_string()).as_id(), Some(12));
        assert_eq!(ModelLabel::Text(" 3 ".to_string()).as_id(), Some(3));
    }

    #[test]
    fn non_numeric_text_label_has_no_id() {
        assert_eq!(ModelLabel::Text("Urea".to_string()).as_id(), None);
    }

    #[test]
    fn display() {
        assert_eq!(ModelLabel::Id(5).to_string(), "5");
        assert_eq!(ModelLabel::Text("DAP".to_string()).to_string(), "DAP");
    }
}
