use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::agents::AgentKind;
use crate::entities::{Patient, PrognosisAnalysis, Visit};
use crate::errors::{ValidationError, Violations};
use crate::validate::Validate;

fn default_generated_by() -> String {
    AgentKind::PrognosisAnalyst.as_str().to_string()
}

/// The top-level deliverable: one patient, their prognosis analysis, and
/// their visit history, bundled as a point-in-time snapshot.
///
/// The report owns its embedded records. Mutating the originals after
/// generation cannot affect it, and every embedded record must reference the
/// same patient.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PrognosisReport {
    #[schemars(length(min = 1))]
    pub id: String,
    pub patient: Patient,
    pub analysis: PrognosisAnalysis,
    #[serde(default)]
    pub visit_history: Vec<Visit>,
    pub generated_at: DateTime<Utc>,
    /// Which agent produced the report.
    #[serde(default = "default_generated_by")]
    pub generated_by: String,
}

impl PrognosisReport {
    /// Bundle a report from already-validated parts, stamping `generated_at`
    /// from the caller's clock and attributing it to the prognosis analyst.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each violated field, including a
    /// patient-id mismatch between the embedded records.
    pub fn assemble(
        id: impl Into<String>,
        patient: Patient,
        analysis: PrognosisAnalysis,
        visit_history: Vec<Visit>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self {
            id: id.into(),
            patient,
            analysis,
            visit_history,
            generated_at: now,
            generated_by: default_generated_by(),
        }
        .validated()
    }
}

impl Validate for PrognosisReport {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        if self.id.is_empty() {
            violations.push("id", "must not be empty", "");
        }
        if self.generated_by.is_empty() {
            violations.push("generated_by", "must not be empty", "");
        }
        violations.merge_at("patient", self.patient.validate());
        violations.merge_at("analysis", self.analysis.validate());
        for (i, visit) in self.visit_history.iter().enumerate() {
            violations.merge_at(&format!("visit_history[{i}]"), visit.validate());
        }
        if self.analysis.patient_id != self.patient.id {
            violations.push(
                "analysis.patient_id",
                "must match patient.id",
                &self.analysis.patient_id,
            );
        }
        for (i, visit) in self.visit_history.iter().enumerate() {
            if visit.encounter.patient_id != self.patient.id {
                violations.push(
                    format!("visit_history[{i}].patient_id"),
                    "must match patient.id",
                    &visit.encounter.patient_id,
                );
            }
        }
        violations.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Encounter, PatientProfile, TrendDataPoint};
    use crate::enums::{Gender, NeurologicalCondition, PrognosisTrend, SeverityLevel};
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 2, 8, 0, 0).unwrap()
    }

    fn patient() -> Patient {
        Patient::from_profile(
            PatientProfile {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
                gender: Gender::Female,
                email: None,
                phone: None,
                primary_condition: NeurologicalCondition::Epilepsy,
            },
            "p-1001",
            t0(),
        )
        .unwrap()
    }

    fn analysis_for(patient_id: &str) -> PrognosisAnalysis {
        PrognosisAnalysis {
            patient_id: patient_id.into(),
            analysis_date: t0(),
            condition: NeurologicalCondition::Epilepsy,
            overall_trend: PrognosisTrend::Improving,
            cognitive_trend: None,
            motor_trend: None,
            symptom_trend: None,
            current_severity: SeverityLevel::Mild,
            predicted_severity_3mo: None,
            predicted_severity_6mo: None,
            trend_data: vec![TrendDataPoint {
                visit_date: t0(),
                score: 1.0,
                metric_name: "seizure_frequency".into(),
            }],
            summary: "One seizure in the last month, down from four.".into(),
            recommendations: vec![],
            risk_factors: vec![],
            confidence_score: 0.9,
        }
    }

    fn visit_for(patient_id: &str) -> Visit {
        Visit::from_encounter(
            Encounter::new(patient_id, "monthly check-in", t0()),
            "v-2001",
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn consistent_report_assembles() {
        let report = PrognosisReport::assemble(
            "rep-0001",
            patient(),
            analysis_for("p-1001"),
            vec![visit_for("p-1001")],
            t0(),
        )
        .unwrap();
        assert_eq!(report.generated_by, "PrognosisAnalystAgent");
        assert_eq!(report.generated_at, t0());
    }

    #[test]
    fn mismatched_analysis_patient_is_flagged() {
        let err = PrognosisReport::assemble(
            "rep-0001",
            patient(),
            analysis_for("p-9999"),
            vec![],
            t0(),
        )
        .unwrap_err();
        assert!(err.names_field("analysis.patient_id"));
    }

    #[test]
    fn visit_from_another_patient_is_flagged() {
        let err = PrognosisReport::assemble(
            "rep-0001",
            patient(),
            analysis_for("p-1001"),
            vec![visit_for("p-1001"), visit_for("p-3333")],
            t0(),
        )
        .unwrap_err();
        assert!(err.names_field("visit_history[1].patient_id"));
    }

    #[test]
    fn missing_generated_by_defaults_to_the_analyst() {
        let mut doc = serde_json::to_value(
            PrognosisReport::assemble(
                "rep-0001",
                patient(),
                analysis_for("p-1001"),
                vec![],
                t0(),
            )
            .unwrap(),
        )
        .unwrap();
        doc.as_object_mut().unwrap().remove("generated_by");
        let report: PrognosisReport = serde_json::from_value(doc).unwrap();
        assert_eq!(report.generated_by, "PrognosisAnalystAgent");
    }

    #[test]
    fn embedded_records_are_an_owned_snapshot() {
        let original = patient();
        let report = PrognosisReport::assemble(
            "rep-0001",
            original.clone(),
            analysis_for("p-1001"),
            vec![],
            t0(),
        )
        .unwrap();

        let mut source = original;
        source.deactivate(t0() + chrono::Duration::days(1));
        assert!(report.patient.is_active);
    }
}
