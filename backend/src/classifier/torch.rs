use std::path::Path;
use std::sync::{Arc, Mutex};
use tch::{CModule, Device, Kind, Tensor};

use super::{
    Classifier, InferenceError, InputKind, InputSpec, InputTensor, LoadError, RawOutput,
    check_input,
};
use crate::config::ImageSize;

/// TorchScript classifier. Takes normalized NHWC input and permutes it to NCHW.
#[derive(Clone)]
pub struct TorchClassifier {
    model: Arc<Mutex<CModule>>,
    device: Device,
    spec: InputSpec,
    num_classes: usize,
}

impl TorchClassifier {
    pub fn load(path: &Path, size: ImageSize) -> Result<Self, LoadError> {
        let device = Device::cuda_if_available();
        let module = CModule::load_on_device(path, device).map_err(|e| LoadError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let spec = InputSpec {
            height: size.height,
            width: size.width,
            kind: InputKind::Float32,
        };
        let mut classifier = Self {
            model: Arc::new(Mutex::new(module)),
            device,
            spec,
            num_classes: 0,
        };

        // TorchScript does not declare its output width; probe it with a blank image.
        let probe = InputTensor::Float32(ndarray::Array4::zeros((
            1,
            size.height as usize,
            size.width as usize,
            3,
        )));
        classifier.num_classes = match classifier.forward(&probe) {
            Ok(scores) => scores.len(),
            Err(e) => {
                return Err(LoadError::Corrupt {
                    path: path.to_path_buf(),
                    reason: format!("dummy forward pass failed: {}", e),
                });
            }
        };

        log::info!(
            "Loaded TorchScript model {} on {:?}: input {}x{}, {} classes",
            path.display(),
            device,
            size.height,
            size.width,
            classifier.num_classes
        );
        Ok(classifier)
    }

    fn forward(&self, input: &InputTensor) -> Result<Vec<f32>, InferenceError> {
        let [n, h, w, c] = input.shape().map(|d| d as i64);
        let tensor = match input {
            InputTensor::Float32(arr) => {
                let data: Vec<f32> = arr.iter().copied().collect();
                Tensor::from_slice(&data)
            }
            InputTensor::Uint8(arr) => {
                let data: Vec<f32> = arr.iter().map(|&v| v as f32 / 255.0).collect();
                Tensor::from_slice(&data)
            }
        }
        .view([n, h, w, c])
        .permute([0, 3, 1, 2])
        .to_device(self.device);

        let model = self
            .model
            .lock()
            .map_err(|_| InferenceError::Model("model mutex poisoned".to_string()))?;
        let output = tch::no_grad(|| model.forward_ts(&[tensor]))
            .map_err(|e| InferenceError::Model(e.to_string()))?;

        let output_flat = output.to_kind(Kind::Float).to_device(Device::Cpu).view([-1]);
        let num_elements = output_flat.size()[0] as usize;
        let mut output_vec = vec![0.0f32; num_elements];
        output_flat.copy_data(&mut output_vec, num_elements);
        Ok(output_vec)
    }
}

impl Classifier for TorchClassifier {
    fn input_spec(&self) -> InputSpec {
        self.spec
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn invoke(&self, input: &InputTensor) -> Result<RawOutput, InferenceError> {
        check_input(&self.spec, input)?;
        self.forward(input).map(RawOutput::Real)
    }
}
