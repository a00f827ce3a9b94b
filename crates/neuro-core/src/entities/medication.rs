use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Violations};
use crate::validate::Validate;

const fn default_active() -> bool {
    true
}

/// A medication the patient is on during a visit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MedicationRecord {
    #[schemars(length(min = 1))]
    pub name: String,
    #[schemars(length(min = 1))]
    pub dosage: String,
    #[schemars(length(min = 1))]
    pub frequency: String,
    pub start_date: NaiveDate,
    /// When the course ended; must not precede `start_date`.
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub side_effects: Option<String>,
}

impl Validate for MedicationRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        check_non_empty(&mut violations, "name", &self.name);
        check_non_empty(&mut violations, "dosage", &self.dosage);
        check_non_empty(&mut violations, "frequency", &self.frequency);
        if let Some(end) = self.end_date {
            if end < self.start_date {
                violations.push("end_date", "must not precede start_date", end);
            }
        }
        violations.finish()
    }
}

fn check_non_empty(violations: &mut Violations, field: &str, value: &str) {
    if value.is_empty() {
        violations.push(field, "must not be empty", "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levetiracetam() -> MedicationRecord {
        MedicationRecord {
            name: "Levetiracetam".into(),
            dosage: "500mg".into(),
            frequency: "twice daily".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            end_date: None,
            is_active: true,
            side_effects: None,
        }
    }

    #[test]
    fn open_ended_course_is_valid() {
        assert!(levetiracetam().validate().is_ok());
    }

    #[test]
    fn end_date_equal_to_start_is_valid() {
        let mut med = levetiracetam();
        med.end_date = Some(med.start_date);
        assert!(med.validate().is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut med = levetiracetam();
        med.end_date = Some(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
        let err = med.validate().unwrap_err();
        assert!(err.names_field("end_date"));
    }

    #[test]
    fn blank_required_strings_are_all_reported() {
        let med = MedicationRecord {
            name: String::new(),
            dosage: String::new(),
            frequency: String::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            end_date: None,
            is_active: true,
            side_effects: None,
        };
        let err = med.validate().unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.names_field("name"));
        assert!(err.names_field("dosage"));
        assert!(err.names_field("frequency"));
    }

    #[test]
    fn missing_is_active_defaults_to_true() {
        let doc = serde_json::json!({
            "name": "Levetiracetam",
            "dosage": "500mg",
            "frequency": "twice daily",
            "start_date": "2026-01-15",
            "end_date": null,
            "side_effects": null
        });
        let med: MedicationRecord = serde_json::from_value(doc).unwrap();
        assert!(med.is_active);
    }
}
