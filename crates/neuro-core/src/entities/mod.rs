//! Entity structs for the clinical data model.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation, and implement [`crate::validate::Validate`]
//! so construction enforces every field constraint up front.
//!
//! Patients and visits come in two shapes: an intake draft (caller-supplied
//! domain fields only) and a full record that embeds the draft via
//! `#[serde(flatten)]` and adds the identifier and metadata the persistence
//! layer mints.

mod assessment;
mod medication;
mod patient;
mod prognosis;
mod report;
mod visit;
mod vitals;

pub use assessment::NeurologicalAssessment;
pub use medication::MedicationRecord;
pub use patient::{Patient, PatientProfile};
pub use prognosis::{PrognosisAnalysis, TrendDataPoint};
pub use report::PrognosisReport;
pub use visit::{Encounter, Visit};
pub use vitals::VitalSigns;
