use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, Violations};
use crate::validate::Validate;

/// Vital signs captured during a clinical encounter.
///
/// Every measurement is independently optional: `None` means "not measured",
/// which is distinct from a measured zero. Measurements that are present must
/// be non-negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VitalSigns {
    #[schemars(range(min = 0))]
    pub blood_pressure_systolic: Option<i32>,
    #[schemars(range(min = 0))]
    pub blood_pressure_diastolic: Option<i32>,
    #[schemars(range(min = 0))]
    pub heart_rate: Option<i32>,
    #[schemars(range(min = 0.0))]
    pub temperature: Option<f64>,
    #[schemars(range(min = 0.0))]
    pub weight_kg: Option<f64>,
}

impl Validate for VitalSigns {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        check_non_negative_int(
            &mut violations,
            "blood_pressure_systolic",
            self.blood_pressure_systolic,
        );
        check_non_negative_int(
            &mut violations,
            "blood_pressure_diastolic",
            self.blood_pressure_diastolic,
        );
        check_non_negative_int(&mut violations, "heart_rate", self.heart_rate);
        check_non_negative_float(&mut violations, "temperature", self.temperature);
        check_non_negative_float(&mut violations, "weight_kg", self.weight_kg);
        violations.finish()
    }
}

fn check_non_negative_int(violations: &mut Violations, field: &str, value: Option<i32>) {
    if let Some(v) = value {
        if v < 0 {
            violations.push(field, "must be non-negative", v);
        }
    }
}

fn check_non_negative_float(violations: &mut Violations, field: &str, value: Option<f64>) {
    if let Some(v) = value {
        if v < 0.0 || v.is_nan() {
            violations.push(field, "must be non-negative", v);
        }
    }
}
