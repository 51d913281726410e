use crate::classifier::{Quantization, RawOutput};

/// Turns classifier output into a probability-like score vector.
/// Quantized outputs are dequantized and softmaxed; real outputs are assumed
/// to already be probabilities.
pub fn postprocess(raw: RawOutput) -> Vec<f32> {
    match raw {
        RawOutput::Real(scores) => scores,
        RawOutput::Quantized {
            values,
            quantization,
        } => softmax(&dequantize(&values, quantization)),
    }
}

/// `(raw - zero_point) * scale`; a zero scale leaves the values untouched.
pub fn dequantize(values: &[u8], quantization: Quantization) -> Vec<f32> {
    let Quantization { scale, zero_point } = quantization;
    if scale == 0.0 {
        return values.iter().map(|&v| v as f32).collect();
    }
    values
        .iter()
        .map(|&v| (v as i32 - zero_point) as f32 * scale)
        .collect()
}

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn real_output_passes_through() {
        let scores = vec![0.1, 0.85, 0.05];
        assert_eq!(postprocess(RawOutput::Real(scores.clone())), scores);
    }

    #[test]
    fn dequantize_applies_zero_point_and_scale() {
        let q = Quantization {
            scale: 0.5,
            zero_point: 128,
        };
        assert_eq!(dequantize(&[128, 130, 126], q), vec![0.0, 1.0, -1.0]);
    }

    #[test]
    fn zero_scale_is_identity() {
        let q = Quantization {
            scale: 0.0,
            zero_point: 7,
        };
        assert_eq!(dequantize(&[0, 3, 255], q), vec![0.0, 3.0, 255.0]);
    }

    #[test]
    fn zero_scale_constant_vector_softmaxes_to_uniform() {
        let raw = RawOutput::Quantized {
            values: vec![0; 4],
            quantization: Quantization {
                scale: 0.0,
                zero_point: 0,
            },
        };
        let scores = postprocess(raw);
        assert_eq!(scores.len(), 4);
        assert!(scores.iter().all(|&s| approx(s, 0.25)));
    }

    #[test]
    fn softmax_is_stable_for_large_logits() {
        let probs = softmax(&[1000.0, 1000.0, 999.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!(approx(probs.iter().sum::<f32>(), 1.0));
        assert!(approx(probs[0], probs[1]));
        assert!(probs[2] < probs[0]);
    }

    #[test]
    fn quantized_output_keeps_ranking() {
        let raw = RawOutput::Quantized {
            values: vec![10, 200, 50],
            quantization: Quantization {
                scale: 0.1,
                zero_point: 0,
            },
        };
        let scores = postprocess(raw);
        assert!(scores[1] > scores[2] && scores[2] > scores[0]);
        assert!(approx(scores.iter().sum::<f32>(), 1.0));
    }

    #[test]
    fn softmax_of_empty_is_empty() {
        assert!(softmax(&[]).is_empty());
    }
}
