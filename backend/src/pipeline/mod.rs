pub mod diagnose;
pub mod postprocess;
pub mod preprocess;

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use shared::ModelInfo;

use crate::classifier::{Classifier, ClassifierLoader, InferenceError, LoadError};
use crate::config::Config;
use crate::knowledge::{PLANTVILLAGE_LABELS, Taxonomy, lookup};

pub use diagnose::{Diagnosis, diagnose};
pub use postprocess::postprocess;
pub use preprocess::preprocess;

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Could not decode image: {0}")]
    InvalidImage(#[from] image::ImageError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Classifier plus everything needed to turn its scores into a diagnosis.
/// Immutable once built, so a single instance serves every request.
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    labels: Vec<String>,
    threshold: f32,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>, labels: Vec<String>, threshold: f32) -> Self {
        Self {
            classifier,
            labels,
            threshold,
        }
    }

    pub fn load(config: &Config, loader: &ClassifierLoader) -> Result<Self, LoadError> {
        let classifier = loader(config)?;
        let labels = resolve_vocabulary(config.labels_path.as_deref(), classifier.num_classes())?;
        let spec = classifier.input_spec();
        log::info!(
            "Predictor ready: input {}x{} {}, {} classes, {} labels, threshold {}",
            spec.height,
            spec.width,
            spec.kind,
            classifier.num_classes(),
            labels.len(),
            config.confidence_threshold
        );
        let coverage = AdvisoryCoverage::of(&labels);
        log::info!(
            "Advisory records: {} PlantVillage, {} custom, {} labels use the default advice",
            coverage.plant_village,
            coverage.custom,
            coverage.missing
        );
        Ok(Self::new(classifier, labels, config.confidence_threshold))
    }

    pub fn predict(&self, image_bytes: &[u8]) -> Result<Diagnosis, PredictError> {
        let input = preprocess(image_bytes, &self.classifier.input_spec())?;
        let raw = self.classifier.invoke(&input)?;
        let scores = postprocess(raw);
        Ok(diagnose(&scores, &self.labels, self.threshold))
    }

    pub fn model_info(&self) -> ModelInfo {
        let spec = self.classifier.input_spec();
        ModelInfo {
            image_size: format!("{}x{}", spec.height, spec.width),
            image_height: spec.height,
            image_width: spec.width,
            num_classes: self.classifier.num_classes(),
            labels: self.labels.clone(),
            input_dtype: spec.kind.to_string(),
            confidence_threshold: self.threshold,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

/// How many labels of a vocabulary have a knowledge-base record, per taxonomy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryCoverage {
    pub plant_village: usize,
    pub custom: usize,
    pub missing: usize,
}

impl AdvisoryCoverage {
    pub fn of(labels: &[String]) -> Self {
        let mut coverage = Self::default();
        for label in labels {
            match lookup(label).map(|known| known.taxonomy) {
                Some(Taxonomy::PlantVillage) => coverage.plant_village += 1,
                Some(Taxonomy::Custom) => coverage.custom += 1,
                None => coverage.missing += 1,
            }
        }
        coverage
    }
}

/// Picks the label vocabulary for a classifier with `num_classes` outputs:
/// the labels file when present, the reference taxonomy when the width
/// matches it, synthetic `Class_<i>` names otherwise.
pub fn resolve_vocabulary(
    labels_path: Option<&Path>,
    num_classes: usize,
) -> Result<Vec<String>, LoadError> {
    if let Some(path) = labels_path {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let labels: Vec<String> = contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect();
                log::info!("Loaded {} labels from {}", labels.len(), path.display());
                warn_on_mismatch(labels.len(), num_classes);
                return Ok(labels);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("Labels file {} not found, falling back", path.display());
            }
            Err(source) => {
                return Err(LoadError::Labels {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    if num_classes == PLANTVILLAGE_LABELS.len() {
        log::info!("Using the PlantVillage reference labels");
        return Ok(PLANTVILLAGE_LABELS.iter().map(|l| l.to_string()).collect());
    }

    log::warn!(
        "No labels for a {}-class model, using synthetic class names",
        num_classes
    );
    Ok((0..num_classes).map(|i| format!("Class_{}", i)).collect())
}

fn warn_on_mismatch(labels: usize, num_classes: usize) {
    if labels != num_classes {
        log::warn!(
            "Label count {} does not match model output width {}; unmatched classes get synthetic names",
            labels,
            num_classes
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classifier::{InputKind, InputSpec, InputTensor, Quantization, RawOutput};
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use std::path::PathBuf;

    /// Returns fixed scores regardless of the image.
    pub struct FixedClassifier {
        pub spec: InputSpec,
        pub output: RawOutput,
    }

    impl FixedClassifier {
        pub fn real(scores: Vec<f32>) -> Self {
            Self {
                spec: InputSpec {
                    height: 4,
                    width: 4,
                    kind: InputKind::Float32,
                },
                output: RawOutput::Real(scores),
            }
        }
    }

    impl Classifier for FixedClassifier {
        fn input_spec(&self) -> InputSpec {
            self.spec
        }

        fn num_classes(&self) -> usize {
            match &self.output {
                RawOutput::Real(v) => v.len(),
                RawOutput::Quantized { values, .. } => values.len(),
            }
        }

        fn invoke(&self, input: &InputTensor) -> Result<RawOutput, InferenceError> {
            crate::classifier::check_input(&self.spec, input)?;
            Ok(self.output.clone())
        }
    }

    pub fn leaf_png() -> Vec<u8> {
        let img = RgbImage::from_pixel(16, 12, Rgb([40, 160, 60]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn temp_labels(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "crop-doctor-{}-{}.txt",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn predict_runs_the_full_pipeline() {
        let labels = vec![
            "Apple___Apple_scab".to_string(),
            "Apple___healthy".to_string(),
        ];
        let predictor = Predictor::new(Arc::new(FixedClassifier::real(vec![0.2, 0.8])), labels, 0.3);
        let diagnosis = predictor.predict(&leaf_png()).unwrap();
        assert_eq!(diagnosis.raw_label, "Apple___healthy");
        assert_eq!(diagnosis.disease, "Apple — Healthy");
        assert_eq!(diagnosis.action_plan[0].task, "Inspect full field");
    }

    #[test]
    fn quantized_classifier_output_is_softmaxed() {
        let classifier = FixedClassifier {
            spec: InputSpec {
                height: 4,
                width: 4,
                kind: InputKind::Uint8,
            },
            output: RawOutput::Quantized {
                values: vec![0, 0, 0, 0],
                quantization: Quantization {
                    scale: 0.0,
                    zero_point: 0,
                },
            },
        };
        let labels: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let predictor = Predictor::new(Arc::new(classifier), labels, 0.3);
        let diagnosis = predictor.predict(&leaf_png()).unwrap();
        // uniform 0.25 is below the gate
        assert_eq!(diagnosis.disease, "Unrecognized");
        assert_eq!(diagnosis.confidence, 0.25);
        let order: Vec<&str> = diagnosis.top3.iter().map(|p| p.raw_label.as_str()).collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn bad_image_never_reaches_the_classifier() {
        let predictor = Predictor::new(Arc::new(FixedClassifier::real(vec![1.0])), vec![], 0.3);
        let err = predictor.predict(b"GIF89a garbage").err().unwrap();
        assert!(matches!(err, PredictError::InvalidImage(_)));
    }

    #[test]
    fn model_info_reflects_the_classifier() {
        let predictor = Predictor::new(
            Arc::new(FixedClassifier::real(vec![0.5, 0.5])),
            vec!["x".to_string(), "y".to_string()],
            0.45,
        );
        let info = predictor.model_info();
        assert_eq!(info.image_size, "4x4");
        assert_eq!(info.num_classes, 2);
        assert_eq!(info.input_dtype, "float32");
        assert_eq!(info.confidence_threshold, 0.45);
    }

    #[test]
    fn labels_file_wins_and_skips_blank_lines() {
        let path = temp_labels("blank-lines", "Healthy\n\n  Rust  \nLate_Blight\n");
        let labels = resolve_vocabulary(Some(&path), 3).unwrap();
        assert_eq!(labels, ["Healthy", "Rust", "Late_Blight"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_labels_file_falls_back_to_reference_taxonomy() {
        let path = Path::new("/nonexistent/crop-doctor/labels.txt");
        let labels = resolve_vocabulary(Some(path), 38).unwrap();
        assert_eq!(labels.len(), 38);
        assert_eq!(labels[0], "Apple___Apple_scab");
    }

    #[test]
    fn unknown_width_gets_synthetic_labels() {
        let labels = resolve_vocabulary(None, 3).unwrap();
        assert_eq!(labels, ["Class_0", "Class_1", "Class_2"]);
    }

    #[test]
    fn advisory_coverage_counts_each_taxonomy() {
        let labels: Vec<String> = ["Tomato___Late_blight", "Rust", "Blueberry___healthy", "Class_3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let coverage = AdvisoryCoverage::of(&labels);
        assert_eq!(
            coverage,
            AdvisoryCoverage {
                plant_village: 1,
                custom: 1,
                missing: 2,
            }
        );
    }

    #[test]
    fn predictor_load_uses_injected_loader() {
        let config = Config {
            labels_path: None,
            confidence_threshold: 0.5,
            ..Config::default()
        };
        let loader = |_: &Config| -> Result<Arc<dyn Classifier>, LoadError> {
            Ok(Arc::new(FixedClassifier::real(vec![0.1, 0.9])))
        };
        let predictor = Predictor::load(&config, &loader).unwrap();
        assert_eq!(predictor.labels(), ["Class_0", "Class_1"]);
        assert_eq!(predictor.threshold(), 0.5);
    }
}
