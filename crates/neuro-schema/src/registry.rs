//! Central schema registry for all neurotrack entity types.
//!
//! The `SchemaRegistry` builds JSON Schemas from neuro-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`. Storage collaborators and agents fetch schemas from
//! here instead of regenerating them.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the neurotrack system.
///
/// Built from neuro-core types via [`schemars::schema_for!`]. Provides lookup
/// by name and validation of arbitrary JSON values against registered
/// schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing every entity schema from neuro-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Patient shapes (2) ---
        register!(schemas, "patient_profile", neuro_core::entities::PatientProfile);
        register!(schemas, "patient", neuro_core::entities::Patient);

        // --- Visit shapes and sub-records (5) ---
        register!(schemas, "vital_signs", neuro_core::entities::VitalSigns);
        register!(
            schemas,
            "neurological_assessment",
            neuro_core::entities::NeurologicalAssessment
        );
        register!(
            schemas,
            "medication_record",
            neuro_core::entities::MedicationRecord
        );
        register!(schemas, "encounter", neuro_core::entities::Encounter);
        register!(schemas, "visit", neuro_core::entities::Visit);

        // --- Prognosis shapes (3) ---
        register!(
            schemas,
            "trend_data_point",
            neuro_core::entities::TrendDataPoint
        );
        register!(
            schemas,
            "prognosis_analysis",
            neuro_core::entities::PrognosisAnalysis
        );
        register!(
            schemas,
            "prognosis_report",
            neuro_core::entities::PrognosisReport
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
