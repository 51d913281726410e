use std::fmt;
use std::path::Path;
use tract_tflite::prelude::*;

use super::{
    Classifier, InferenceError, InputKind, InputSpec, InputTensor, LoadError, Quantization,
    RawOutput, check_input,
};
use crate::config::ImageSize;

type Plan = TypedRunnableModel<TypedModel>;

/// `.tflite` classifier executed with tract. The optimized plan is immutable
/// and shared by all requests.
pub struct TfliteClassifier {
    plan: Plan,
    spec: InputSpec,
    input_dt: DatumType,
    num_classes: usize,
}

impl TfliteClassifier {
    pub fn load(path: &Path, fallback_size: ImageSize) -> Result<Self, LoadError> {
        let load_err = corrupt(path);

        let model = tract_tflite::tflite()
            .model_for_path(path)
            .map_err(load_err)?;

        let inlet = model
            .input_outlets()
            .map_err(load_err)?
            .first()
            .copied()
            .ok_or_else(|| LoadError::Corrupt {
                path: path.to_path_buf(),
                reason: "model declares no inputs".to_string(),
            })?;
        let input_fact = model.outlet_fact(inlet).map_err(load_err)?.clone();
        let input_dt = input_fact.datum_type;
        let kind = match input_dt.unquantized() {
            DatumType::F32 => InputKind::Float32,
            DatumType::U8 => InputKind::Uint8,
            dt => return Err(LoadError::UnsupportedInput(format!("{:?}", dt))),
        };

        let (height, width) = match input_fact.shape.as_concrete() {
            Some(&[_, h, w, _]) => (h as u32, w as u32),
            _ => {
                log::warn!(
                    "Model input shape is not concrete, using configured size {}",
                    fallback_size
                );
                (fallback_size.height, fallback_size.width)
            }
        };
        let spec = InputSpec {
            height,
            width,
            kind,
        };

        let [n, h, w, c] = spec.batch_shape();
        let fact = TypedFact::dt_shape(input_dt, tvec!(n, h, w, c));
        let model = model.with_input_fact(0, fact).map_err(load_err)?;

        let num_classes = model
            .output_fact(0)
            .map_err(load_err)?
            .shape
            .as_concrete()
            .and_then(|dims| dims.last().copied())
            .unwrap_or(0);

        let plan = model
            .into_optimized()
            .map_err(load_err)?
            .into_runnable()
            .map_err(load_err)?;

        log::info!(
            "Loaded TFLite model {}: input {}x{} {:?}, {} classes",
            path.display(),
            height,
            width,
            input_dt,
            num_classes
        );

        Ok(Self {
            plan,
            spec,
            input_dt,
            num_classes,
        })
    }

    fn to_tract_tensor(&self, input: &InputTensor) -> Result<Tensor, InferenceError> {
        let shape = self.spec.batch_shape();
        match input {
            InputTensor::Float32(arr) => {
                let data: Vec<f32> = arr.iter().copied().collect();
                Tensor::from_shape(&shape, &data).map_err(model_err)
            }
            InputTensor::Uint8(arr) => {
                let data: Vec<u8> = arr.iter().copied().collect();
                u8_tensor(self.input_dt, &shape, &data)
            }
        }
    }
}

impl Classifier for TfliteClassifier {
    fn input_spec(&self) -> InputSpec {
        self.spec
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn invoke(&self, input: &InputTensor) -> Result<RawOutput, InferenceError> {
        check_input(&self.spec, input)?;
        if input.kind() != self.spec.kind {
            return Err(InferenceError::Model(format!(
                "model expects {} input, got {}",
                self.spec.kind,
                input.kind()
            )));
        }

        let tensor = self.to_tract_tensor(input)?;
        let outputs = self.plan.run(tvec!(tensor.into())).map_err(model_err)?;
        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::Model("Model produced no outputs".to_string()))?;

        let dt = output.datum_type();
        match dt.unquantized() {
            DatumType::U8 => {
                let (zero_point, scale) = if dt.is_quantized() {
                    dt.zp_scale()
                } else {
                    (0, 0.0)
                };
                let values = output.as_slice::<u8>().map_err(model_err)?.to_vec();
                Ok(RawOutput::Quantized {
                    values,
                    quantization: Quantization { scale, zero_point },
                })
            }
            DatumType::F32 => Ok(RawOutput::Real(
                output.as_slice::<f32>().map_err(model_err)?.to_vec(),
            )),
            _ => {
                let cast = output.cast_to::<f32>().map_err(model_err)?;
                Ok(RawOutput::Real(cast.as_slice::<f32>().map_err(model_err)?.to_vec()))
            }
        }
    }
}

/// Allocated with the model's own input type so quantized inputs keep their
/// zero point and scale.
fn u8_tensor(dt: DatumType, shape: &[usize], data: &[u8]) -> Result<Tensor, InferenceError> {
    let mut tensor = Tensor::zero_dt(dt, shape).map_err(model_err)?;
    let slots = tensor.as_slice_mut::<u8>().map_err(model_err)?;
    if slots.len() != data.len() {
        return Err(InferenceError::Model(format!(
            "expected {} input values, got {}",
            slots.len(),
            data.len()
        )));
    }
    slots.copy_from_slice(data);
    Ok(tensor)
}

fn corrupt<E: fmt::Display>(path: &Path) -> impl Fn(E) -> LoadError + Copy + '_ {
    move |e| LoadError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn model_err<E: fmt::Display>(e: E) -> InferenceError {
    InferenceError::Model(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn quantized_input_keeps_its_parameters() {
        let dt = DatumType::QU8(QParams::ZpScale {
            zero_point: 128,
            scale: 0.5,
        });
        let tensor = u8_tensor(dt, &[1, 1, 2, 3], &[0, 10, 20, 30, 40, 255]).unwrap();
        assert_eq!(tensor.datum_type(), dt);
        assert_eq!(tensor.shape(), &[1, 1, 2, 3]);
        assert_eq!(tensor.as_slice::<u8>().unwrap(), &[0, 10, 20, 30, 40, 255]);
    }

    #[test]
    fn plain_u8_input_and_length_check() {
        let tensor = u8_tensor(DatumType::U8, &[1, 1, 1, 3], &[1, 2, 3]).unwrap();
        assert_eq!(tensor.datum_type(), DatumType::U8);
        assert!(u8_tensor(DatumType::U8, &[1, 1, 1, 3], &[1, 2]).is_err());
    }

    #[test]
    fn malformed_artifact_is_reported_not_panicked() {
        let path = std::env::temp_dir().join(format!("crop-doctor-garbage-{}.tflite", std::process::id()));
        fs::write(&path, b"TFL3 but not really a flatbuffer").unwrap();
        let err = TfliteClassifier::load(&path, ImageSize { height: 8, width: 8 })
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::Corrupt { .. }));
        fs::remove_file(path).unwrap();
    }
}
