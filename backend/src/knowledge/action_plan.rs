use shared::{ActionPlanEntry, Severity};

use super::{AdvisoryRecord, get_advisory, is_healthy};

/// Which 7-day template a label gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    Healthy,
    HighSeverity,
    OtherSeverity,
}

impl PlanKind {
    pub fn classify(label: &str, record: &AdvisoryRecord) -> Self {
        if is_healthy(label) {
            return PlanKind::Healthy;
        }
        match record.severity {
            Severity::High => PlanKind::HighSeverity,
            Severity::None | Severity::Medium | Severity::Unknown => PlanKind::OtherSeverity,
        }
    }

    pub fn steps(self, record: &AdvisoryRecord) -> Vec<ActionPlanEntry> {
        match self {
            PlanKind::Healthy => preventive_plan(),
            PlanKind::HighSeverity => urgent_plan(record),
            PlanKind::OtherSeverity => standard_plan(record),
        }
    }
}

pub fn build_action_plan(label: &str) -> Vec<ActionPlanEntry> {
    let record = get_advisory(label);
    PlanKind::classify(label, record).steps(record)
}

fn entry(day: u8, task: &str, details: impl Into<String>) -> ActionPlanEntry {
    ActionPlanEntry {
        day,
        task: task.to_string(),
        details: details.into(),
    }
}

fn preventive_plan() -> Vec<ActionPlanEntry> {
    vec![
        entry(1, "Inspect full field", "Walk the entire field and note any early warning signs."),
        entry(2, "Check soil moisture", "Ensure irrigation system is working properly."),
        entry(3, "Apply preventive spray", "Neem oil @ 5ml/litre as a preventive measure."),
        entry(4, "Weed management", "Remove weeds that compete with crops and harbour pests."),
        entry(5, "Fertilizer check", "Assess crop nutrition and apply if needed."),
        entry(6, "Pest scouting", "Check undersides of leaves for pests or eggs."),
        entry(7, "Document crop status", "Photograph and record crop condition for future reference."),
    ]
}

fn urgent_plan(record: &AdvisoryRecord) -> Vec<ActionPlanEntry> {
    vec![
        entry(
            1,
            "🚨 URGENT: Isolate & remove",
            "Mark infected area. Remove all visibly infected plant material and burn or bury far from field.",
        ),
        entry(
            2,
            "First fungicide application",
            format!(
                "Apply {} immediately. Cover all leaf surfaces.",
                record.pesticide
            ),
        ),
        entry(
            3,
            "Check spread to neighbors",
            "Inspect plants surrounding the infected area. Mark any new infections.",
        ),
        entry(
            4,
            "Second spray if wet weather",
            "Re-apply fungicide if rain occurred. Check for new lesions on previously healthy plants.",
        ),
        entry(5, "Soil treatment", record.soil_treatment),
        entry(
            6,
            "Assess recovery",
            "Check treated plants for signs of recovery. Document any spread.",
        ),
        entry(
            7,
            "Final assessment + report",
            "Evaluate success of treatment. If no improvement, contact agricultural extension officer urgently.",
        ),
    ]
}

fn standard_plan(record: &AdvisoryRecord) -> Vec<ActionPlanEntry> {
    vec![
        entry(
            1,
            "Remove infected material",
            "Remove infected leaves and plant parts. Do not leave them in the field.",
        ),
        entry(
            2,
            "First fungicide/treatment spray",
            format!("Apply {} in early morning.", record.pesticide),
        ),
        entry(3, "Improve growing conditions", record.soil_treatment),
        entry(
            4,
            "Monitor for spread",
            "Inspect treated plants and adjacent rows. Remove any new infected material.",
        ),
        entry(
            5,
            "Second treatment application",
            "Apply second round of treatment, especially if humid conditions persist.",
        ),
        entry(
            6,
            "Nutrition support",
            "Apply foliar micronutrient spray to boost plant immune response.",
        ),
        entry(
            7,
            "Review & document",
            "Compare to Day 1. Take photos. If condition has worsened, consult agricultural officer.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{CUSTOM_LABELS, PLANTVILLAGE_LABELS};

    fn all_known_labels() -> impl Iterator<Item = &'static str> {
        PLANTVILLAGE_LABELS.iter().chain(CUSTOM_LABELS.iter()).copied()
    }

    #[test]
    fn every_plan_has_seven_consecutive_days() {
        for label in all_known_labels().chain(["Class_3", "nonsense"]) {
            let plan = build_action_plan(label);
            let days: Vec<u8> = plan.iter().map(|e| e.day).collect();
            assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7], "{label}");
        }
    }

    #[test]
    fn healthy_labels_get_preventive_checklist_regardless_of_severity() {
        let expected = preventive_plan();
        for label in all_known_labels().filter(|l| is_healthy(l)) {
            assert_eq!(build_action_plan(label), expected, "{label}");
        }
        // Unknown severity, but still healthy.
        assert_eq!(get_advisory("Soybean___healthy").severity, Severity::Unknown);
        assert_eq!(build_action_plan("Soybean___healthy")[0].task, "Inspect full field");
    }

    #[test]
    fn high_severity_plan_interpolates_record_fields() {
        for label in all_known_labels() {
            let record = get_advisory(label);
            if record.severity != Severity::High || is_healthy(label) {
                continue;
            }
            let plan = build_action_plan(label);
            assert!(plan[1].details.contains(record.pesticide), "{label}");
            assert!(plan[4].details.contains(record.soil_treatment), "{label}");
            assert!(plan[0].task.contains("URGENT"));
        }
    }

    #[test]
    fn other_severity_plan_treats_then_fixes_soil() {
        let record = get_advisory("Tomato___Early_blight");
        let plan = build_action_plan("Tomato___Early_blight");
        assert_eq!(
            PlanKind::classify("Tomato___Early_blight", record),
            PlanKind::OtherSeverity
        );
        assert_eq!(
            plan[1].details,
            format!("Apply {} in early morning.", record.pesticide)
        );
        assert_eq!(plan[2].details, record.soil_treatment);
        assert_eq!(plan[6].task, "Review & document");
    }

    #[test]
    fn unknown_labels_get_standard_plan_with_default_advice() {
        let plan = build_action_plan("Banana___Sigatoka");
        assert_eq!(plan[0].task, "Remove infected material");
        assert!(plan[1].details.contains("Copper oxychloride"));
    }
}
