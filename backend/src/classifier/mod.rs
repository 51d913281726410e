pub mod tflite;
#[cfg(feature = "torch")]
pub mod torch;

use ndarray::Array4;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, ModelFormat};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Model artifact not found at {0}")]
    MissingArtifact(PathBuf),
    #[error("Failed to load model {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("Unsupported model input type: {0}")]
    UnsupportedInput(String),
    #[error("Model format {0:?} is not compiled into this build")]
    BackendUnavailable(ModelFormat),
    #[error("Failed to read labels file {path}: {source}")]
    Labels {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Input shape {actual:?} does not match the model input {expected:?}")]
    ShapeMismatch {
        expected: [usize; 4],
        actual: [usize; 4],
    },
    #[error("Model error: {0}")]
    Model(String),
}

/// Numeric representation the classifier expects for pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Intensities scaled to 0..=1.
    Float32,
    /// Raw 0..=255 intensities.
    Uint8,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Float32 => write!(f, "float32"),
            InputKind::Uint8 => write!(f, "uint8"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub height: u32,
    pub width: u32,
    pub kind: InputKind,
}

impl InputSpec {
    /// NHWC shape of a single-image batch.
    pub fn batch_shape(&self) -> [usize; 4] {
        [1, self.height as usize, self.width as usize, 3]
    }
}

/// A single-image batch in NHWC layout.
#[derive(Debug, Clone, PartialEq)]
pub enum InputTensor {
    Float32(Array4<f32>),
    Uint8(Array4<u8>),
}

impl InputTensor {
    pub fn shape(&self) -> [usize; 4] {
        let dims = match self {
            InputTensor::Float32(arr) => arr.dim(),
            InputTensor::Uint8(arr) => arr.dim(),
        };
        [dims.0, dims.1, dims.2, dims.3]
    }

    pub fn kind(&self) -> InputKind {
        match self {
            InputTensor::Float32(_) => InputKind::Float32,
            InputTensor::Uint8(_) => InputKind::Uint8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantization {
    pub scale: f32,
    pub zero_point: i32,
}

/// Scores exactly as the classifier produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutput {
    Real(Vec<f32>),
    Quantized {
        values: Vec<u8>,
        quantization: Quantization,
    },
}

pub trait Classifier: Send + Sync {
    fn input_spec(&self) -> InputSpec;

    fn num_classes(&self) -> usize;

    fn invoke(&self, input: &InputTensor) -> Result<RawOutput, InferenceError>;
}

pub(crate) fn check_input(spec: &InputSpec, input: &InputTensor) -> Result<(), InferenceError> {
    let expected = spec.batch_shape();
    let actual = input.shape();
    if expected != actual {
        return Err(InferenceError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// Constructor used to bring a classifier up from configuration. Swappable so
/// the HTTP layer can be exercised without a model artifact.
pub type ClassifierLoader =
    dyn Fn(&Config) -> Result<Arc<dyn Classifier>, LoadError> + Send + Sync;

/// Loads the artifact named by the config with the backend matching its format.
pub fn load(config: &Config) -> Result<Arc<dyn Classifier>, LoadError> {
    if !config.model_path.exists() {
        return Err(LoadError::MissingArtifact(config.model_path.clone()));
    }
    match config.model_format() {
        ModelFormat::Tflite => Ok(Arc::new(tflite::TfliteClassifier::load(
            &config.model_path,
            config.image_size,
        )?)),
        #[cfg(feature = "torch")]
        ModelFormat::Torch => Ok(Arc::new(torch::TorchClassifier::load(
            &config.model_path,
            config.image_size,
        )?)),
        #[cfg(not(feature = "torch"))]
        ModelFormat::Torch => Err(LoadError::BackendUnavailable(ModelFormat::Torch)),
    }
}
