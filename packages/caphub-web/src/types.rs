//! Type definitions for the capability directory API
//!
//! Field names mirror the JSON the server emits; optional metadata stays
//! optional here so missing fields flow through to fallback rendering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full directory snapshot: capability name -> record, in the order the
/// server sent it. `IndexMap` keeps JSON object order, which is the order
/// cards render in.
pub type CapabilityDirectory = IndexMap<String, CapabilityRecord>;

/// A single service offering in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    pub practice_area: String,
    pub description: String,
    #[serde(default)]
    pub industry_verticals: Option<Vec<String>>,
    #[serde(default)]
    pub skill_levels: Option<Vec<String>>,
    #[serde(default)]
    pub certifications: Option<Vec<String>>,
    /// Available hours per week. Absent means no capacity published.
    #[serde(default)]
    pub capacity: f64,
    /// Registered consultant emails, in registration order. Uniqueness is
    /// server-enforced.
    #[serde(default)]
    pub consultants: Vec<String>,
}

impl CapabilityRecord {
    /// CSS class for the practice-area badge: lower-cased, whitespace runs
    /// collapsed to hyphens ("Cloud Migration" -> "cloud-migration").
    pub fn practice_class(&self) -> String {
        self.practice_area
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn verticals_display(&self) -> String {
        match &self.industry_verticals {
            Some(verticals) => verticals.join(", "),
            None => "Not specified".to_string(),
        }
    }

    pub fn skills_display(&self) -> String {
        match &self.skill_levels {
            Some(levels) => levels.join(" \u{2022} "),
            None => "Not specified".to_string(),
        }
    }

    /// Up to the first two certifications; "Various" when none are published.
    pub fn certifications_display(&self) -> String {
        match &self.certifications {
            Some(certs) => certs
                .iter()
                .take(2)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            None => "Various".to_string(),
        }
    }

    pub fn team_size(&self) -> usize {
        self.consultants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_record() -> CapabilityRecord {
        serde_json::from_value(serde_json::json!({
            "practice_area": "Data Engineering",
            "description": "Pipelines and platforms"
        }))
        .unwrap()
    }

    #[test]
    fn test_optional_fields_default() {
        let record = bare_record();
        assert_eq!(record.industry_verticals, None);
        assert_eq!(record.skill_levels, None);
        assert_eq!(record.certifications, None);
        assert_eq!(record.capacity, 0.0);
        assert!(record.consultants.is_empty());
    }

    #[test]
    fn test_fallback_display_strings() {
        let record = bare_record();
        assert_eq!(record.verticals_display(), "Not specified");
        assert_eq!(record.skills_display(), "Not specified");
        assert_eq!(record.certifications_display(), "Various");
        assert_eq!(format!("{} hours/week", record.capacity), "0 hours/week");
    }

    #[test]
    fn test_practice_class_slug() {
        let mut record = bare_record();
        record.practice_area = "Cloud Migration".to_string();
        assert_eq!(record.practice_class(), "cloud-migration");

        record.practice_area = "AI  &  Automation".to_string();
        assert_eq!(record.practice_class(), "ai-&-automation");
    }

    #[test]
    fn test_certifications_truncate_to_two() {
        let mut record = bare_record();
        record.certifications = Some(vec![
            "AWS SA Pro".to_string(),
            "CKA".to_string(),
            "GCP PDE".to_string(),
        ]);
        assert_eq!(record.certifications_display(), "AWS SA Pro, CKA");
    }

    #[test]
    fn test_joined_display_strings() {
        let mut record = bare_record();
        record.industry_verticals = Some(vec!["Finance".to_string(), "Retail".to_string()]);
        record.skill_levels = Some(vec!["Junior".to_string(), "Senior".to_string()]);
        assert_eq!(record.verticals_display(), "Finance, Retail");
        assert_eq!(record.skills_display(), "Junior \u{2022} Senior");
    }

    #[test]
    fn test_directory_preserves_response_order() {
        let directory: CapabilityDirectory = serde_json::from_str(
            r#"{
                "Zero Trust Security": {"practice_area": "Security", "description": "a"},
                "Cloud Migration": {"practice_area": "Cloud", "description": "b"},
                "Analytics": {"practice_area": "Data", "description": "c"}
            }"#,
        )
        .unwrap();

        let names: Vec<_> = directory.keys().cloned().collect();
        assert_eq!(names, ["Zero Trust Security", "Cloud Migration", "Analytics"]);
    }

    #[test]
    fn test_consultants_keep_registration_order() {
        let record: CapabilityRecord = serde_json::from_value(serde_json::json!({
            "practice_area": "Data",
            "description": "d",
            "capacity": 12.5,
            "consultants": ["a@x.com", "b@x.com"]
        }))
        .unwrap();
        assert_eq!(record.consultants, ["a@x.com", "b@x.com"]);
        assert_eq!(record.team_size(), 2);
        assert_eq!(record.capacity, 12.5);
    }
}
