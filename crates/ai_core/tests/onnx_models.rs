//! Engine tests against tiny ONNX graphs in `tests/fixtures`
//!
//! - `crop_argmax.onnx`: `[1, 7]` floats, argmax id as int64 then softmax probabilities
//! - `fertilizer_labels.onnx`: `[1, 8]` floats, argmax mapped to a fertilizer code string
//! - `plant_u8_nhwc.onnx`: `[1, 2, 2, 3]` bytes, per-channel mean as u8 scores
//! - `plant_f32_nchw.onnx`: `[1, 3, 2, 2]` floats, per-channel mean as f32 scores
//!
//! `tests/fixtures/generate_fixtures.py` regenerates them.

use std::{io::Cursor, path::PathBuf};

use ai_core::{
    ClassLabel, ImageClassifier, ImageModelConfig, InferenceError, TabularClassifier,
    TabularModelConfig,
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn solid_png(color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(8, 8, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn image_model(name: &str, apply_softmax: bool) -> ImageClassifier {
    ImageClassifier::load(&ImageModelConfig {
        path: fixture(name),
        apply_softmax,
        ..ImageModelConfig::default()
    })
    .unwrap()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-3, "{actual:?} != {expected:?}");
    }
}

mod tabular {
    use super::*;

    #[test]
    fn int64_label_from_first_output() {
        let model = TabularClassifier::load(&TabularModelConfig::new(fixture("crop_argmax.onnx")))
            .unwrap();
        assert_eq!(model.name(), "crop_argmax");

        let label = model
            .predict(&[90.0, 42.0, 143.0, 20.8, 82.0, 6.5, 102.9])
            .unwrap();
        assert_eq!(label, ClassLabel::Id(2));

        let label = model.predict(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(label, ClassLabel::Id(6));
    }

    #[test]
    fn wrong_feature_count_is_rejected_before_running() {
        let model = TabularClassifier::load(&TabularModelConfig::new(fixture("crop_argmax.onnx")))
            .unwrap();
        let err = model.predict(&[1.0; 8]).unwrap_err();
        assert!(matches!(err, InferenceError::InvalidInput(_)), "{err}");
        assert_eq!(err.to_string(), "Invalid input: expected 7 features, got 8");
    }

    #[test]
    fn string_label_output() {
        let model =
            TabularClassifier::load(&TabularModelConfig::new(fixture("fertilizer_labels.onnx")))
                .unwrap();

        let label = model
            .predict(&[26.0, 52.0, 38.0, 0.0, 0.0, 37.0, 0.0, 0.0])
            .unwrap();
        assert_eq!(label, ClassLabel::Text("DAP".to_string()));

        let label = model
            .predict(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 9.0, 0.0])
            .unwrap();
        assert_eq!(label, ClassLabel::Text("10-26-26".to_string()));
    }
}

mod image_classifier {
    use super::*;

    #[test]
    fn quantized_nhwc_scores_are_dequantized() {
        let model = image_model("plant_u8_nhwc.onnx", false);
        let scores = model.classify(&solid_png([255, 102, 0])).unwrap();
        assert_close(&scores, &[1.0, 0.4, 0.0]);
    }

    #[test]
    fn float_nchw_scores_are_returned_raw() {
        let model = image_model("plant_f32_nchw.onnx", false);
        let scores = model.classify(&solid_png([255, 0, 0])).unwrap();
        assert_close(&scores, &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn softmax_is_applied_when_configured() {
        let model = image_model("plant_f32_nchw.onnx", true);
        let scores = model.classify(&solid_png([0, 255, 0])).unwrap();

        let e = std::f32::consts::E;
        let top = e / (e + 2.0);
        let rest = 1.0 / (e + 2.0);
        assert_close(&scores, &[rest, top, rest]);
        assert!((scores.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn undecodable_upload_is_an_image_error() {
        let model = image_model("plant_f32_nchw.onnx", false);
        let err = model.classify(b"GIF89a but not really").unwrap_err();
        assert!(matches!(err, InferenceError::ImageDecode(_)), "{err}");
    }

    #[test]
    fn tabular_graph_is_not_an_image_model() {
        let err = ImageClassifier::load(&ImageModelConfig {
            path: fixture("crop_argmax.onnx"),
            ..ImageModelConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, InferenceError::InvalidInput(_)), "{err}");
    }
}
