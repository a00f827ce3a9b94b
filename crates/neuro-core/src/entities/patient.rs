use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Gender, NeurologicalCondition};
use crate::errors::{ValidationError, Violations};
use crate::validate::Validate;

/// Upper bound on name components.
const NAME_MAX: usize = 100;

const fn default_active() -> bool {
    true
}

/// Demographics supplied at intake, before the persistence layer has minted
/// an identifier. This is the create shape; [`Patient`] embeds it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PatientProfile {
    #[schemars(length(min = 1, max = 100))]
    pub first_name: String,
    #[schemars(length(min = 1, max = 100))]
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub primary_condition: NeurologicalCondition,
}

impl Validate for PatientProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        check_name(&mut violations, "first_name", &self.first_name);
        check_name(&mut violations, "last_name", &self.last_name);
        violations.finish()
    }
}

fn check_name(violations: &mut Violations, field: &str, value: &str) {
    let len = value.chars().count();
    if !(1..=NAME_MAX).contains(&len) {
        violations.push(field, "must be 1-100 characters", value);
    }
}

/// Full patient record with identifier and lifecycle metadata.
///
/// `id` is immutable once assigned. Records are never deleted, only
/// deactivated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Patient {
    #[schemars(length(min = 1))]
    pub id: String,
    #[serde(flatten)]
    pub profile: PatientProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Patient {
    /// Promote an intake profile to a full record once the persistence layer
    /// has minted `id`. Both timestamps start at `now`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each violated field.
    pub fn from_profile(
        profile: PatientProfile,
        id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self {
            id: id.into(),
            profile,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
        .validated()
    }

    /// Mark the record inactive and advance `updated_at`.
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = self.updated_at.max(now);
    }
}

impl Validate for Patient {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        if self.id.is_empty() {
            violations.push("id", "must not be empty", "");
        }
        // Profile fields are flattened into the record, so their paths stay
        // unprefixed.
        violations.merge(self.profile.validate());
        if self.updated_at < self.created_at {
            violations.push(
                "updated_at",
                "must not precede created_at",
                self.updated_at,
            );
        }
        violations.finish()
    }
}
