use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{NeurologicalCondition, PrognosisTrend, SeverityLevel};
use crate::errors::{ValidationError, Violations};
use crate::validate::Validate;

/// A single named measurement in a patient's trend history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrendDataPoint {
    pub visit_date: DateTime<Utc>,
    pub score: f64,
    pub metric_name: String,
}

impl Validate for TrendDataPoint {
    // Shape-only: bounds live on the containing analysis.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Derived clinical trend summary for a patient, produced by the analysis
/// agent from the patient's visit history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PrognosisAnalysis {
    #[schemars(length(min = 1))]
    pub patient_id: String,
    pub analysis_date: DateTime<Utc>,
    pub condition: NeurologicalCondition,

    pub overall_trend: PrognosisTrend,
    pub cognitive_trend: Option<PrognosisTrend>,
    pub motor_trend: Option<PrognosisTrend>,
    pub symptom_trend: Option<PrognosisTrend>,

    pub current_severity: SeverityLevel,
    pub predicted_severity_3mo: Option<SeverityLevel>,
    pub predicted_severity_6mo: Option<SeverityLevel>,

    /// Chronological measurements backing the trend calls.
    #[serde(default)]
    pub trend_data: Vec<TrendDataPoint>,

    #[schemars(length(min = 1))]
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,

    /// How confident the analysis is, 0 to 1 inclusive.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub confidence_score: f64,
}

impl Validate for PrognosisAnalysis {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        if self.patient_id.is_empty() {
            violations.push("patient_id", "must not be empty", "");
        }
        if self.summary.is_empty() {
            violations.push("summary", "must not be empty", "");
        }
        // Negated range check so NaN fails as well.
        if !(0.0..=1.0).contains(&self.confidence_score) {
            violations.push(
                "confidence_score",
                "must be between 0 and 1",
                self.confidence_score,
            );
        }
        violations.finish()
    }
}
