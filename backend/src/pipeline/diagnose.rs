use shared::{ActionPlanEntry, DiagnosisStatus, PredictionResponse, Severity, TopPrediction};

use crate::knowledge::{build_action_plan, format_label, get_advisory};

const TOP_K: usize = 3;

const UNRECOGNIZED: &str = "Unrecognized";
const UNKNOWN_LABEL: &str = "unknown";
const NOT_APPLICABLE: &str = "N/A";
const LOW_CONFIDENCE_DESCRIPTION: &str = "Could not confidently identify the disease. Please retake in bright natural light with the diseased area filling the frame.";
const LOW_CONFIDENCE_STEPS: [&str; 3] = [
    "Retake photo in bright natural light",
    "Ensure the diseased area fills the frame",
    "Consult your local agricultural officer",
];

/// Enriched outcome of one classification, before timing is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub disease: String,
    pub raw_label: String,
    pub confidence: f32,
    pub severity: Severity,
    pub description: String,
    pub treatment: Vec<String>,
    pub pesticide: String,
    pub soil_treatment: String,
    pub action_plan: Vec<ActionPlanEntry>,
    pub top3: Vec<TopPrediction>,
    pub status: DiagnosisStatus,
}

impl Diagnosis {
    pub fn into_response(self, elapsed_seconds: f64) -> PredictionResponse {
        PredictionResponse {
            disease: self.disease,
            raw_label: self.raw_label,
            confidence: self.confidence,
            severity: self.severity,
            description: self.description,
            treatment: self.treatment,
            pesticide: self.pesticide,
            soil_treatment: self.soil_treatment,
            action_plan: self.action_plan,
            top3: self.top3,
            status: self.status,
            inference_time_seconds: (elapsed_seconds * 1000.0).round() / 1000.0,
        }
    }

    fn low_confidence(confidence: f32, top3: Vec<TopPrediction>) -> Self {
        Self {
            disease: UNRECOGNIZED.to_string(),
            raw_label: UNKNOWN_LABEL.to_string(),
            confidence: round4(confidence),
            severity: Severity::Unknown,
            description: LOW_CONFIDENCE_DESCRIPTION.to_string(),
            treatment: LOW_CONFIDENCE_STEPS.iter().map(|s| s.to_string()).collect(),
            pesticide: NOT_APPLICABLE.to_string(),
            soil_treatment: NOT_APPLICABLE.to_string(),
            action_plan: Vec::new(),
            top3,
            status: DiagnosisStatus::LowConfidence,
        }
    }
}

/// Index of the highest score; the lowest index wins ties.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    top_k(scores, 1).first().copied()
}

/// NaN ranks below every real score.
fn rank(score: f32) -> f32 {
    if score.is_nan() { f32::NEG_INFINITY } else { score }
}

/// Indices of the `k` highest scores in descending order, ties broken by
/// ascending index.
pub fn top_k(scores: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        rank(scores[b])
            .total_cmp(&rank(scores[a]))
            .then(a.cmp(&b))
    });
    indices.truncate(k);
    indices
}

/// Vocabulary entry for `index`, or `Class_<index>` past its end.
pub fn label_for(index: usize, labels: &[String]) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("Class_{}", index))
}

/// Rounded to 4 decimals; NaN is reported as 0.
fn round4(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    (value * 10_000.0).round() / 10_000.0
}

/// Applies the confidence gate to a score vector and enriches the winning
/// label from the knowledge base.
pub fn diagnose(scores: &[f32], labels: &[String], threshold: f32) -> Diagnosis {
    let top3: Vec<TopPrediction> = top_k(scores, TOP_K)
        .into_iter()
        .map(|i| {
            let raw_label = label_for(i, labels);
            TopPrediction {
                label: format_label(&raw_label),
                raw_label,
                confidence: round4(scores[i]),
            }
        })
        .collect();

    let Some(top_index) = argmax(scores) else {
        return Diagnosis::low_confidence(0.0, top3);
    };
    let confidence = scores[top_index];
    if confidence.is_nan() || confidence < threshold {
        return Diagnosis::low_confidence(confidence, top3);
    }

    let raw_label = label_for(top_index, labels);
    let record = get_advisory(&raw_label);
    let info = record.to_info();
    Diagnosis {
        disease: format_label(&raw_label),
        action_plan: build_action_plan(&raw_label),
        raw_label,
        confidence: round4(confidence),
        severity: info.severity,
        description: info.description,
        treatment: info.treatment,
        pesticide: info.pesticide,
        soil_treatment: info.soil_treatment,
        top3,
        status: DiagnosisStatus::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    fn raw_labels(top3: &[TopPrediction]) -> Vec<&str> {
        top3.iter().map(|p| p.raw_label.as_str()).collect()
    }

    #[test]
    fn confident_prediction_is_enriched() {
        let d = diagnose(&[0.1, 0.85, 0.05], &abc(), 0.30);
        assert_eq!(d.status, DiagnosisStatus::Success);
        assert_eq!(d.disease, "B");
        assert_eq!(d.raw_label, "B");
        assert_eq!(d.confidence, 0.85);
        assert_eq!(raw_labels(&d.top3), ["B", "A", "C"]);
        assert_eq!(d.top3[1].confidence, 0.1);
        assert_eq!(d.top3[2].confidence, 0.05);
        // "B" is not in the knowledge base, so the default record applies
        assert_eq!(d.severity, Severity::Unknown);
        assert_eq!(d.action_plan.len(), 7);
    }

    #[test]
    fn modest_winner_above_threshold_passes() {
        let d = diagnose(&[0.4, 0.35, 0.25], &abc(), 0.30);
        assert_eq!(d.status, DiagnosisStatus::Success);
        assert_eq!(d.disease, "A");
        assert_eq!(d.confidence, 0.4);
    }

    #[test]
    fn weak_winner_is_unrecognized() {
        let d = diagnose(&[0.2, 0.15, 0.1], &abc(), 0.30);
        assert_eq!(d.status, DiagnosisStatus::LowConfidence);
        assert_eq!(d.disease, "Unrecognized");
        assert_eq!(d.raw_label, "unknown");
        assert_eq!(d.severity, Severity::Unknown);
        assert_eq!(d.confidence, 0.2);
        assert_eq!(d.pesticide, "N/A");
        assert_eq!(d.soil_treatment, "N/A");
        assert_eq!(d.treatment.len(), 3);
        assert!(d.action_plan.is_empty());
        assert_eq!(raw_labels(&d.top3), ["A", "B", "C"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let at = diagnose(&[0.30, 0.25, 0.20], &abc(), 0.30);
        assert_eq!(at.status, DiagnosisStatus::Success);

        let below = diagnose(&[0.2999, 0.25, 0.20], &abc(), 0.30);
        assert_eq!(below.status, DiagnosisStatus::LowConfidence);
        assert_eq!(below.confidence, 0.2999);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        assert_eq!(top_k(&[0.25, 0.25, 0.25, 0.25], 3), vec![0, 1, 2]);
        assert_eq!(argmax(&[0.1, 0.45, 0.45]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn top_k_handles_short_vectors() {
        assert_eq!(top_k(&[0.7, 0.3], 3), vec![0, 1]);
    }

    #[test]
    fn labels_past_vocabulary_end_are_synthetic() {
        let labels = vec!["Tomato___healthy".to_string()];
        let d = diagnose(&[0.05, 0.05, 0.9], &labels, 0.30);
        assert_eq!(d.raw_label, "Class_2");
        assert_eq!(d.disease, "Class 2");
        assert_eq!(d.top3[1].raw_label, "Tomato___healthy");
        assert_eq!(d.top3[1].label, "Tomato — Healthy");
    }

    #[test]
    fn known_label_carries_its_advisory() {
        let labels = vec![
            "Tomato___Late_blight".to_string(),
            "Tomato___healthy".to_string(),
        ];
        let d = diagnose(&[0.92, 0.08], &labels, 0.30);
        assert_eq!(d.disease, "Tomato — Late Blight");
        assert_eq!(d.severity, Severity::High);
        assert!(d.action_plan[1].details.contains(&d.pesticide));
        assert!(d.action_plan[4].details.contains(&d.soil_treatment));
    }

    #[test]
    fn nan_scores_never_pass_the_gate() {
        let labels = vec!["A".to_string(), "B".to_string()];
        let d = diagnose(&[0.9, f32::NAN], &labels, 0.30);
        assert_eq!(d.status, DiagnosisStatus::Success);
        assert_eq!(d.raw_label, "A");
        assert_eq!(d.confidence, 0.9);
        assert_eq!(raw_labels(&d.top3), ["A", "B"]);
        assert_eq!(d.top3[1].confidence, 0.0);

        let d = diagnose(&[f32::NAN, f32::NAN], &labels, 0.30);
        assert_eq!(d.status, DiagnosisStatus::LowConfidence);
        assert_eq!(d.confidence, 0.0);
        assert!(d.top3.iter().all(|p| p.confidence.is_finite()));
    }

    #[test]
    fn nan_confidence_serializes_as_a_number() {
        let d = diagnose(&[f32::NAN, 0.1], &abc(), 0.30);
        let json = serde_json::to_value(d.into_response(0.01)).unwrap();
        assert_eq!(json["status"], "low_confidence");
        assert!(json["confidence"].is_number());
        assert_eq!(json["top3"][0]["raw_label"], "B");
    }

    #[test]
    fn empty_scores_are_low_confidence() {
        let d = diagnose(&[], &abc(), 0.30);
        assert_eq!(d.status, DiagnosisStatus::LowConfidence);
        assert!(d.top3.is_empty());
    }

    #[test]
    fn response_rounds_inference_time() {
        let d = diagnose(&[0.1, 0.85, 0.05], &abc(), 0.30);
        let response = d.into_response(0.123456);
        assert_eq!(response.inference_time_seconds, 0.123);
        assert_eq!(response.disease, "B");
    }
}
