use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Severity tier attached to every advisory record.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    None,
    Medium,
    High,
    Unknown,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiagnosisStatus {
    Success,
    LowConfidence,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActionPlanEntry {
    pub day: u8,
    pub task: String,
    pub details: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TopPrediction {
    /// Display name, e.g. "Tomato — Early Blight".
    pub label: String,
    pub raw_label: String,
    pub confidence: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
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
    pub inference_time_seconds: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdvisoryInfo {
    pub severity: Severity,
    pub description: String,
    pub treatment: Vec<String>,
    pub pesticide: String,
    pub soil_treatment: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiseaseSummary {
    pub id: usize,
    pub raw_label: String,
    pub display_name: String,
    pub is_healthy: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiseaseListResponse {
    pub total: usize,
    pub diseases: Vec<DiseaseSummary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiseaseDetail {
    pub raw_label: String,
    pub display_name: String,
    pub info: AdvisoryInfo,
    pub action_plan: Vec<ActionPlanEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelInfo {
    /// "<height>x<width>"
    pub image_size: String,
    pub image_height: u32,
    pub image_width: u32,
    pub num_classes: usize,
    pub labels: Vec<String>,
    pub input_dtype: String,
    pub confidence_threshold: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_uses_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(Severity::from_str("unknown").unwrap(), Severity::Unknown);
        assert_eq!(Severity::None.to_string(), "none");
    }

    #[test]
    fn low_confidence_status_is_snake_case() {
        let json = serde_json::to_string(&DiagnosisStatus::LowConfidence).unwrap();
        assert_eq!(json, "\"low_confidence\"");
        assert_eq!(DiagnosisStatus::Success.to_string(), "success");
    }
}
