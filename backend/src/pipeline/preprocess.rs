use image::imageops::{self, FilterType};
use ndarray::Array4;

use super::PredictError;
use crate::classifier::{InputKind, InputSpec, InputTensor};

/// Decodes any supported image format, stretches it to the model's input size
/// and lays it out as a 1xHxWx3 batch in the model's numeric representation.
pub fn preprocess(image_bytes: &[u8], spec: &InputSpec) -> Result<InputTensor, PredictError> {
    let img = image::load_from_memory(image_bytes)?;
    let rgb = img.to_rgb8();
    let resized = imageops::resize(&rgb, spec.width, spec.height, FilterType::Lanczos3);

    let shape = (1, spec.height as usize, spec.width as usize, 3);
    let tensor = match spec.kind {
        InputKind::Float32 => InputTensor::Float32(Array4::from_shape_fn(shape, |(_, y, x, c)| {
            resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
        })),
        InputKind::Uint8 => InputTensor::Uint8(Array4::from_shape_fn(shape, |(_, y, x, c)| {
            resized.get_pixel(x as u32, y as u32)[c]
        })),
    };
    Ok(tensor)
}
