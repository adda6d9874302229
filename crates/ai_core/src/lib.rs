//! AI Core - ONNX Runtime model engines
//!
//! Loads the tabular recommenders and the plant image classifier, owns the
//! image preprocessing pipeline and reports failures as [`InferenceError`].
//! Everything here is synchronous; callers move work onto a blocking pool.

pub mod config;
pub mod error;
pub mod image_classifier;
pub mod preprocess;
pub mod tabular;

pub use config::{ImageModelConfig, ModelsConfig, TabularModelConfig};
pub use error::InferenceError;
pub use image_classifier::ImageClassifier;
pub use preprocess::{InputLayout, InputSpec, PixelFormat, PreparedImage, preprocess, softmax};
pub use tabular::{ClassLabel, TabularClassifier};
