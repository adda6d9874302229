//! Configuration for the model engines

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a tabular (scikit-learn style) classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularModelConfig {
    /// Path to the ONNX file
    pub path: PathBuf,

    /// Intra-op threads for the session
    #[serde(default = "default_intra_threads")]
    pub intra_threads: usize,
}

/// Configuration for the image classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageModelConfig {
    /// Path to the ONNX file
    #[serde(default = "default_plant_path")]
    pub path: PathBuf,

    /// Square input size used when the model leaves spatial dims dynamic
    #[serde(default = "default_input_size")]
    pub input_size: u32,

    /// Apply softmax to the raw output (for models exported without it)
    #[serde(default)]
    pub apply_softmax: bool,

    /// Intra-op threads for the session
    #[serde(default = "default_intra_threads")]
    pub intra_threads: usize,
}

/// All models served by the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default = "default_crop")]
    pub crop: TabularModelConfig,

    #[serde(default = "default_fertilizer")]
    pub fertilizer: TabularModelConfig,

    #[serde(default)]
    pub plant: ImageModelConfig,
}

const fn default_intra_threads() -> usize {
    1
}

const fn default_input_size() -> u32 {
    224
}

fn default_plant_path() -> PathBuf {
    PathBuf::from("models/medicinal_plant.onnx")
}

fn default_crop() -> TabularModelConfig {
    TabularModelConfig::new("models/crop_classifier.onnx")
}

fn default_fertilizer() -> TabularModelConfig {
    TabularModelConfig::new("models/fertilizer_classifier.onnx")
}

impl TabularModelConfig {
    /// Config for a model file with default session options
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            intra_threads: default_intra_threads(),
        }
    }
}

impl Default for ImageModelConfig {
    fn default() -> Self {
        Self {
            path: default_plant_path(),
            input_size: default_input_size(),
            apply_softmax: false,
            intra_threads: default_intra_threads(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            crop: default_crop(),
            fertilizer: default_fertilizer(),
            plant: ImageModelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_models_dir() {
        let config = ModelsConfig::default();
        assert_eq!(config.crop.path, PathBuf::from("models/crop_classifier.onnx"));
        assert_eq!(
            config.fertilizer.path,
            PathBuf::from("models/fertilizer_classifier.onnx")
        );
        assert_eq!(config.plant.input_size, 224);
        assert!(!config.plant.apply_softmax);
        assert_eq!(config.crop.intra_threads, 1);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: ModelsConfig =
            serde_json::from_str(r#"{"plant": {"apply_softmax": true}}"#).unwrap();
        assert!(config.plant.apply_softmax);
        assert_eq!(config.plant.input_size, 224);
        assert_eq!(config.crop, default_crop());
    }

    #[test]
    fn tabular_requires_path() {
        let result: Result<TabularModelConfig, _> = serde_json::from_str(r#"{"intra_threads": 2}"#);
        assert!(result.is_err());
    }
}
