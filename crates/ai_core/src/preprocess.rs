//! Image preprocessing for the plant classifier
//!
//! Decodes an uploaded image, resizes it to the model's input resolution,
//! converts it to RGB and lays the pixels out the way the input tensor
//! expects. Float models get values in `[0, 1]`; quantized models get the
//! raw bytes.

use image::imageops::FilterType;

use crate::error::InferenceError;

/// Channel placement of the input tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    /// `[batch, height, width, channels]`, the TensorFlow convention
    Nhwc,
    /// `[batch, channels, height, width]`, the PyTorch convention
    Nchw,
}

/// Element type of the input tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Float32,
    Uint8,
}

/// Shape and type of the image model's input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub layout: InputLayout,
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
}

const CHANNELS: i64 = 3;

impl InputSpec {
    /// Derive the layout and size from a 4-d input shape
    ///
    /// Dynamic dimensions (`-1` or `0`) fall back to `fallback_size`. A shape
    /// with no fixed channel dimension is assumed to be NHWC.
    pub fn from_shape(
        dims: &[i64],
        format: PixelFormat,
        fallback_size: u32,
    ) -> Result<Self, InferenceError> {
        let [_, d1, d2, d3] = dims else {
            return Err(InferenceError::InvalidInput(format!(
                "expected a 4-d image input, got shape {dims:?}"
            )));
        };

        let size = |d: i64| u32::try_from(d).ok().filter(|&v| v > 0).unwrap_or(fallback_size);

        let (layout, height, width) = if *d3 == CHANNELS {
            (InputLayout::Nhwc, *d1, *d2)
        } else if *d1 == CHANNELS {
            (InputLayout::Nchw, *d2, *d3)
        } else if *d3 <= 0 {
            (InputLayout::Nhwc, *d1, *d2)
        } else {
            return Err(InferenceError::InvalidInput(format!(
                "image input must have 3 channels, got shape {dims:?}"
            )));
        };

        Ok(Self {
            layout,
            format,
            width: size(width),
            height: size(height),
        })
    }

    /// Tensor shape for a single image
    pub fn tensor_shape(&self) -> [i64; 4] {
        let (h, w) = (i64::from(self.height), i64::from(self.width));
        match self.layout {
            InputLayout::Nhwc => [1, h, w, CHANNELS],
            InputLayout::Nchw => [1, CHANNELS, h, w],
        }
    }
}

/// Pixel data ready to be wrapped in an input tensor
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedImage {
    Float(Vec<f32>),
    Bytes(Vec<u8>),
}

/// Decode, resize and lay out an encoded image for the model
pub fn preprocess(bytes: &[u8], spec: &InputSpec) -> Result<PreparedImage, InferenceError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded
        .resize_exact(spec.width, spec.height, FilterType::Triangle)
        .to_rgb8();

    let interleaved = rgb.into_raw();
    let ordered = match spec.layout {
        InputLayout::Nhwc => interleaved,
        InputLayout::Nchw => to_planar(&interleaved),
    };

    Ok(match spec.format {
        PixelFormat::Uint8 => PreparedImage::Bytes(ordered),
        PixelFormat::Float32 => {
            PreparedImage::Float(ordered.into_iter().map(|v| f32::from(v) / 255.0).collect())
        },
    })
}

/// `RGBRGB...` to `RR..GG..BB..`
fn to_planar(interleaved: &[u8]) -> Vec<u8> {
    let channels = CHANNELS as usize;
    let plane = interleaved.len() / channels;
    let mut planar = vec![0u8; interleaved.len()];
    for (i, pixel) in interleaved.chunks_exact(channels).enumerate() {
        for (c, value) in pixel.iter().enumerate() {
            planar[c * plane + i] = *value;
        }
    }
    planar
}

/// Numerically stable softmax
pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum > 0.0 && sum.is_finite() {
        exps.into_iter().map(|e| e / sum).collect()
    } else {
        exps
    }
}
