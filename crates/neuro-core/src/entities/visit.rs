use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{MedicationRecord, NeurologicalAssessment, VitalSigns};
use crate::errors::{ValidationError, Violations};
use crate::validate::Validate;

/// A clinical encounter as recorded at intake, before the persistence layer
/// mints a visit identifier. This is the create shape; [`Visit`] embeds it
/// unchanged.
///
/// `patient_id` is a reference to an existing patient; referential integrity
/// is the persistence layer's job, not this record's.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Encounter {
    #[schemars(length(min = 1))]
    pub patient_id: String,
    pub visit_date: DateTime<Utc>,
    #[schemars(length(min = 1))]
    pub chief_complaint: String,
    pub vitals: Option<VitalSigns>,
    pub assessment: Option<NeurologicalAssessment>,
    #[serde(default)]
    pub medications: Vec<MedicationRecord>,
    pub diagnosis_notes: Option<String>,
    pub treatment_plan: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
}

impl Encounter {
    /// Start an encounter at the caller's clock. `visit_date` may be
    /// overwritten afterwards for back-dated entries; nothing here replaces a
    /// caller-supplied value.
    pub fn new(
        patient_id: impl Into<String>,
        chief_complaint: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            visit_date: now,
            chief_complaint: chief_complaint.into(),
            vitals: None,
            assessment: None,
            medications: Vec::new(),
            diagnosis_notes: None,
            treatment_plan: None,
            follow_up_date: None,
        }
    }
}

impl Validate for Encounter {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        if self.patient_id.is_empty() {
            violations.push("patient_id", "must not be empty", "");
        }
        if self.chief_complaint.is_empty() {
            violations.push("chief_complaint", "must not be empty", "");
        }
        if let Some(vitals) = &self.vitals {
            violations.merge_at("vitals", vitals.validate());
        }
        if let Some(assessment) = &self.assessment {
            violations.merge_at("assessment", assessment.validate());
        }
        for (i, medication) in self.medications.iter().enumerate() {
            violations.merge_at(&format!("medications[{i}]"), medication.validate());
        }
        violations.finish()
    }
}

/// Full visit record. Visits are append-only history: there is no update
/// path beyond construction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Visit {
    #[schemars(length(min = 1))]
    pub id: String,
    #[serde(flatten)]
    pub encounter: Encounter,
    pub created_at: DateTime<Utc>,
}

impl Visit {
    /// Promote an encounter to a full record once the persistence layer has
    /// minted `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each violated field.
    pub fn from_encounter(
        encounter: Encounter,
        id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self {
            id: id.into(),
            encounter,
            created_at: now,
        }
        .validated()
    }
}

impl Validate for Visit {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        if self.id.is_empty() {
            violations.push("id", "must not be empty", "");
        }
        // Encounter fields are flattened, so their paths stay unprefixed.
        violations.merge(self.encounter.validate());
        violations.finish()
    }
}
