//! Tabular classifier over a fixed-length feature vector
//!
//! Scikit-learn classifiers exported with `skl2onnx` take a `[batch, n]`
//! float tensor and emit the predicted label as their first output, either
//! as `int64` ids or as strings depending on the training targets.

use std::{fmt, path::Path};

use ort::{
    session::Session,
    value::{Tensor, ValueType},
};
use parking_lot::Mutex;
use tracing::{debug, info, instrument};

use crate::{config::TabularModelConfig, error::InferenceError};

/// Label emitted by a tabular classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassLabel {
    Id(i64),
    Text(String),
}

/// ONNX Runtime session for a tabular classifier
pub struct TabularClassifier {
    session: Mutex<Session>,
    name: String,
    feature_count: Option<usize>,
}

impl fmt::Debug for TabularClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabularClassifier")
            .field("name", &self.name)
            .field("feature_count", &self.feature_count)
            .finish_non_exhaustive()
    }
}

impl TabularClassifier {
    /// Load a classifier from an ONNX file
    pub fn load(config: &TabularModelConfig) -> Result<Self, InferenceError> {
        if !config.path.exists() {
            return Err(InferenceError::ModelNotFound(config.path.clone()));
        }

        let session = Session::builder()
            .map_err(InferenceError::load)?
            .with_intra_threads(config.intra_threads)
            .map_err(InferenceError::load)?
            .commit_from_file(&config.path)
            .map_err(InferenceError::load)?;

        let feature_count = session
            .inputs()
            .first()
            .and_then(|input| fixed_last_dim(input.dtype()));
        let name = model_name(&config.path);

        info!(model = %name, ?feature_count, path = %config.path.display(), "Loaded tabular model");

        Ok(Self {
            session: Mutex::new(session),
            name,
            feature_count,
        })
    }

    /// Model name derived from the file stem
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predict the label of a single sample
    #[instrument(skip(self, features), fields(model = %self.name))]
    pub fn predict(&self, features: &[f32]) -> Result<ClassLabel, InferenceError> {
        check_feature_count(self.feature_count, features.len())?;

        let shape = [1i64, features.len() as i64];
        let tensor = Tensor::from_array((shape, features.to_vec().into_boxed_slice()))
            .map_err(InferenceError::run)?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(InferenceError::run)?;
        let output = &outputs[0];

        let label = if let Ok((_, ids)) = output.try_extract_tensor::<i64>() {
            ids.first().copied().map(ClassLabel::Id)
        } else if let Ok((_, labels)) = output.try_extract_strings() {
            labels.into_iter().next().map(ClassLabel::Text)
        } else {
            return Err(InferenceError::InvalidOutput(
                "label output is neither int64 nor string".to_string(),
            ));
        };

        let label = label
            .ok_or_else(|| InferenceError::InvalidOutput("label output is empty".to_string()))?;
        debug!(?label, "Tabular prediction");
        Ok(label)
    }
}

fn check_feature_count(expected: Option<usize>, actual: usize) -> Result<(), InferenceError> {
    match expected {
        Some(expected) if expected != actual => Err(InferenceError::InvalidInput(format!(
            "expected {expected} features, got {actual}"
        ))),
        _ => Ok(()),
    }
}

fn fixed_last_dim(value_type: &ValueType) -> Option<usize> {
    match value_type {
        ValueType::Tensor { shape, .. } => shape
            .last()
            .and_then(|&d| usize::try_from(d).ok())
            .filter(|&d| d > 0),
        _ => None,
    }
}

pub(crate) fn model_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "model".to_string(), |s| s.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let config = TabularModelConfig::new("does/not/exist.onnx");
        let err = TabularClassifier::load(&config).unwrap_err();
        assert!(matches!(err, InferenceError::ModelNotFound(p) if p == PathBuf::from("does/not/exist.onnx")));
    }

    #[test]
    fn corrupt_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crop.onnx");
        std::fs::write(&path, b"definitely not protobuf").unwrap();

        let err = TabularClassifier::load(&TabularModelConfig::new(&path)).unwrap_err();
        assert!(matches!(err, InferenceError::LoadFailed(_)));
    }

    #[test]
    fn feature_count_mismatch() {
        assert!(check_feature_count(Some(7), 7).is_ok());
        assert!(check_feature_count(None, 3).is_ok());
        let err = check_feature_count(Some(8), 7).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: expected 8 features, got 7");
    }

    #[test]
    fn model_name_is_file_stem() {
        assert_eq!(model_name(Path::new("models/crop_classifier.onnx")), "crop_classifier");
        assert_eq!(model_name(Path::new("")), "model");
    }
}
