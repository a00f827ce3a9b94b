use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Violations};
use crate::validate::Validate;

/// Neurological examination results.
///
/// Every score is optional — an assessment may cover only the instruments
/// actually administered. `None` means "not assessed" and is distinct from a
/// score of zero. Bounds are hard: an out-of-range score fails construction,
/// it is never clamped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NeurologicalAssessment {
    /// Mini-Mental State Exam, 0-30, higher is better.
    #[schemars(range(min = 0, max = 30))]
    pub mmse_score: Option<i32>,
    /// Montreal Cognitive Assessment, 0-30, higher is better.
    #[schemars(range(min = 0, max = 30))]
    pub moca_score: Option<i32>,
    /// Motor function, 0-100, higher is better.
    #[schemars(range(min = 0, max = 100))]
    pub motor_function_score: Option<i32>,
    /// Pain/symptom severity, 0-10, lower is better.
    #[schemars(range(min = 0, max = 10))]
    pub symptom_severity: Option<i32>,
    /// Seizure episodes per month.
    #[schemars(range(min = 0))]
    pub seizure_frequency: Option<i32>,
    pub notes: Option<String>,
}

impl Validate for NeurologicalAssessment {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        check_bounded(&mut violations, "mmse_score", self.mmse_score, 0, 30);
        check_bounded(&mut violations, "moca_score", self.moca_score, 0, 30);
        check_bounded(
            &mut violations,
            "motor_function_score",
            self.motor_function_score,
            0,
            100,
        );
        check_bounded(&mut violations, "symptom_severity", self.symptom_severity, 0, 10);
        if let Some(freq) = self.seizure_frequency {
            if freq < 0 {
                violations.push("seizure_frequency", "must be non-negative", freq);
            }
        }
        violations.finish()
    }
}

fn check_bounded(violations: &mut Violations, field: &str, value: Option<i32>, min: i32, max: i32) {
    if let Some(v) = value {
        if v < min || v > max {
            violations.push(field, format!("must be between {min} and {max}"), v);
        }
    }
}
