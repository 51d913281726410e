pub mod action_plan;
mod database;
pub mod labels;

use lazy_static::lazy_static;
use shared::{AdvisoryInfo, DiseaseSummary, Severity};
use std::collections::{HashMap, HashSet};

pub use action_plan::build_action_plan;
pub use labels::{CUSTOM_LABELS, PLANTVILLAGE_LABELS};

use database::{CUSTOM_RECORDS, DEFAULT_ADVISORY, PLANTVILLAGE_RECORDS};

/// Static treatment advice for one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryRecord {
    pub severity: Severity,
    pub description: &'static str,
    pub treatment: &'static [&'static str],
    pub pesticide: &'static str,
    pub soil_treatment: &'static str,
}

impl AdvisoryRecord {
    pub fn to_info(&self) -> AdvisoryInfo {
        AdvisoryInfo {
            severity: self.severity,
            description: self.description.to_string(),
            treatment: self.treatment.iter().map(|s| s.to_string()).collect(),
            pesticide: self.pesticide.to_string(),
            soil_treatment: self.soil_treatment.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    PlantVillage,
    Custom,
}

/// A label the knowledge base holds a record for.
#[derive(Debug, Clone, Copy)]
pub struct KnownLabel {
    pub taxonomy: Taxonomy,
    pub record: &'static AdvisoryRecord,
}

lazy_static! {
    static ref KNOWLEDGE_BASE: HashMap<&'static str, KnownLabel> = {
        let tables: [(Taxonomy, &'static [(&'static str, AdvisoryRecord)]); 2] = [
            (Taxonomy::PlantVillage, PLANTVILLAGE_RECORDS),
            (Taxonomy::Custom, CUSTOM_RECORDS),
        ];
        let mut map = HashMap::new();
        for (taxonomy, table) in tables {
            for (name, record) in table.iter() {
                // First registration wins; later tables only extend.
                map.entry(*name).or_insert(KnownLabel {
                    taxonomy,
                    record,
                });
            }
        }
        map
    };
    // Includes the custom vocabulary's plain "Healthy" class.
    static ref HEALTHY_LABELS: HashSet<&'static str> = PLANTVILLAGE_LABELS
        .iter()
        .chain(CUSTOM_LABELS.iter())
        .copied()
        .filter(|label| label.to_ascii_lowercase().contains("healthy"))
        .collect();
}

pub fn lookup(label: &str) -> Option<&'static KnownLabel> {
    KNOWLEDGE_BASE.get(label)
}

/// Never fails: labels without a record get the generic default advice.
pub fn get_advisory(label: &str) -> &'static AdvisoryRecord {
    match lookup(label) {
        Some(known) => known.record,
        None => &DEFAULT_ADVISORY,
    }
}

pub fn is_healthy(label: &str) -> bool {
    HEALTHY_LABELS.contains(label)
}

/// "Tomato___Early_blight" -> "Tomato — Early Blight"
pub fn format_label(raw_label: &str) -> String {
    let spaced = raw_label.replace("___", " — ").replace('_', " ");
    let mut formatted = String::with_capacity(spaced.len());
    let mut in_word = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if in_word {
                formatted.extend(c.to_lowercase());
            } else {
                formatted.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            formatted.push(c);
            in_word = false;
        }
    }
    formatted
}

pub fn reference_catalog() -> Vec<DiseaseSummary> {
    PLANTVILLAGE_LABELS
        .iter()
        .enumerate()
        .map(|(id, label)| DiseaseSummary {
            id,
            raw_label: label.to_string(),
            display_name: format_label(label),
            is_healthy: is_healthy(label),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_label_splits_crop_and_title_cases() {
        assert_eq!(format_label("Tomato___Early_blight"), "Tomato — Early Blight");
        assert_eq!(format_label("Corn_(maize)___Common_rust_"), "Corn (Maize) — Common Rust ");
        assert_eq!(
            format_label("Tomato___Spider_mites Two-spotted_spider_mite"),
            "Tomato — Spider Mites Two-Spotted Spider Mite"
        );
        assert_eq!(format_label("Pepper,_bell___healthy"), "Pepper, Bell — Healthy");
        assert_eq!(format_label("Late_Blight"), "Late Blight");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn get_advisory_is_total() {
        for label in ["", "Class_7", "tomato___early_blight", "🌿", "Apple___Apple_scab"] {
            let record = get_advisory(label);
            assert!(!record.description.is_empty(), "{label}");
            assert!(!record.treatment.is_empty(), "{label}");
            assert!(!record.pesticide.is_empty(), "{label}");
            assert!(!record.soil_treatment.is_empty(), "{label}");
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_default_record() {
        let record = get_advisory("Banana___Panama_disease");
        assert_eq!(record.severity, Severity::Unknown);
        assert!(record.pesticide.contains("Copper oxychloride"));
        assert!(lookup("Banana___Panama_disease").is_none());
    }

    #[test]
    fn both_taxonomies_share_one_lookup_surface() {
        let reference = lookup("Tomato___Late_blight").unwrap();
        assert_eq!(reference.taxonomy, Taxonomy::PlantVillage);
        assert_eq!(reference.record.severity, Severity::High);

        let custom = lookup("Powdery_Mildew").unwrap();
        assert_eq!(custom.taxonomy, Taxonomy::Custom);
        assert_eq!(custom.record.severity, Severity::Medium);

        for label in CUSTOM_LABELS {
            assert!(lookup(label).is_some(), "{label}");
        }
    }

    #[test]
    fn reference_labels_without_records_still_resolve() {
        assert!(lookup("Blueberry___healthy").is_none());
        assert_eq!(get_advisory("Blueberry___healthy").severity, Severity::Unknown);
        assert!(is_healthy("Blueberry___healthy"));
    }

    #[test]
    fn healthy_subset_covers_both_vocabularies() {
        assert!(is_healthy("Tomato___healthy"));
        // custom-taxonomy class, so custom models also get the preventive plan
        assert!(is_healthy("Healthy"));
        assert_eq!(build_action_plan("Healthy")[0].task, "Inspect full field");
        assert!(!is_healthy("Tomato___Late_blight"));
        assert!(!is_healthy("Unknown___healthy"));
    }

    #[test]
    fn reference_catalog_lists_all_38_classes_in_order() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 38);
        assert_eq!(catalog[0].raw_label, "Apple___Apple_scab");
        assert_eq!(catalog[0].display_name, "Apple — Apple Scab");
        assert_eq!(catalog[37].id, 37);
        assert!(catalog[37].is_healthy);
        assert_eq!(catalog.iter().filter(|d| d.is_healthy).count(), 12);
    }
}
