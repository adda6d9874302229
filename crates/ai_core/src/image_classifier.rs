//! Image classifier for medicinal plants

use std::fmt;

use ort::{
    session::Session,
    tensor::TensorElementType,
    value::{Tensor, ValueType},
};
use parking_lot::Mutex;
use tracing::{debug, info, instrument};

use crate::{
    config::ImageModelConfig,
    error::InferenceError,
    preprocess::{InputSpec, PixelFormat, PreparedImage, preprocess, softmax},
    tabular::model_name,
};

/// ONNX Runtime session for an image classifier
pub struct ImageClassifier {
    session: Mutex<Session>,
    name: String,
    spec: InputSpec,
    apply_softmax: bool,
}

impl fmt::Debug for ImageClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageClassifier")
            .field("name", &self.name)
            .field("spec", &self.spec)
            .field("apply_softmax", &self.apply_softmax)
            .finish_non_exhaustive()
    }
}

impl ImageClassifier {
    /// Load a classifier and inspect its input tensor
    pub fn load(config: &ImageModelConfig) -> Result<Self, InferenceError> {
        if !config.path.exists() {
            return Err(InferenceError::ModelNotFound(config.path.clone()));
        }

        let session = Session::builder()
            .map_err(InferenceError::load)?
            .with_intra_threads(config.intra_threads)
            .map_err(InferenceError::load)?
            .commit_from_file(&config.path)
            .map_err(InferenceError::load)?;

        let input = session
            .inputs()
            .first()
            .ok_or_else(|| InferenceError::LoadFailed("model declares no inputs".to_string()))?;
        let spec = input_spec(input.dtype(), config.input_size)?;
        let name = model_name(&config.path);

        info!(model = %name, ?spec, path = %config.path.display(), "Loaded image model");

        Ok(Self {
            session: Mutex::new(session),
            name,
            spec,
            apply_softmax: config.apply_softmax,
        })
    }

    /// Model name derived from the file stem
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score an encoded image, one value per class
    #[instrument(skip(self, image), fields(model = %self.name, image_len = image.len()))]
    pub fn classify(&self, image: &[u8]) -> Result<Vec<f32>, InferenceError> {
        let prepared = preprocess(image, &self.spec)?;
        let shape = self.spec.tensor_shape();

        let mut session = self.session.lock();
        let outputs = match prepared {
            PreparedImage::Float(pixels) => {
                let tensor = Tensor::from_array((shape, pixels.into_boxed_slice()))
                    .map_err(InferenceError::run)?;
                session.run(ort::inputs![tensor])
            },
            PreparedImage::Bytes(pixels) => {
                let tensor = Tensor::from_array((shape, pixels.into_boxed_slice()))
                    .map_err(InferenceError::run)?;
                session.run(ort::inputs![tensor])
            },
        }
        .map_err(InferenceError::run)?;
        let output = &outputs[0];

        let scores = if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
            data.to_vec()
        } else if let Ok((_, data)) = output.try_extract_tensor::<u8>() {
            dequantize(data)
        } else {
            return Err(InferenceError::InvalidOutput(
                "score output is neither f32 nor u8".to_string(),
            ));
        };

        debug!(classes = scores.len(), "Image classified");
        Ok(if self.apply_softmax {
            softmax(&scores)
        } else {
            scores
        })
    }
}

fn input_spec(value_type: &ValueType, fallback_size: u32) -> Result<InputSpec, InferenceError> {
    let ValueType::Tensor { ty, shape, .. } = value_type else {
        return Err(InferenceError::LoadFailed(
            "image model input is not a tensor".to_string(),
        ));
    };
    let format = match ty {
        TensorElementType::Float32 => PixelFormat::Float32,
        TensorElementType::Uint8 => PixelFormat::Uint8,
        other => {
            return Err(InferenceError::LoadFailed(format!(
                "unsupported image input element type {other:?}"
            )));
        },
    };
    InputSpec::from_shape(&shape.to_vec(), format, fallback_size)
}

/// Quantized scores are in `0..=255`
fn dequantize(scores: &[u8]) -> Vec<f32> {
    scores.iter().map(|&s| f32::from(s) / 255.0).collect()
}
