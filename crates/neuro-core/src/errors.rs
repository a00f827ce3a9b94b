//! Validation error types for the clinical data model.
//!
//! There is a single data-validation error kind, [`ValidationError`]. It
//! carries one entry per violated constraint so a caller sees every broken
//! field from a single construction or decode attempt.

use std::fmt;

use thiserror::Error;

/// A single violated constraint on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field (e.g. `medications[0].name`).
    pub field: String,
    /// The constraint that was broken, in plain language.
    pub constraint: String,
    /// The value the caller offered, rendered as text.
    pub offered: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (got {})", self.field, self.constraint, self.offered)
    }
}

/// One or more field constraints failed during construction or decoding.
///
/// Never raised partially: the value either fully validates or this error
/// lists everything wrong with it. There is no coercion and no retry path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Build an error from exactly one violation.
    #[must_use]
    pub fn single(
        field: impl Into<String>,
        constraint: impl Into<String>,
        offered: impl fmt::Display,
    ) -> Self {
        Self {
            violations: vec![Violation {
                field: field.into(),
                constraint: constraint.into(),
                offered: offered.to_string(),
            }],
        }
    }

    /// True when `field` appears among the violations.
    #[must_use]
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates violations so a single validation pass reports every broken
/// constraint instead of stopping at the first.
#[derive(Debug, Default)]
pub struct Violations {
    entries: Vec<Violation>,
}

impl Violations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation.
    pub fn push(
        &mut self,
        field: impl Into<String>,
        constraint: impl Into<String>,
        offered: impl fmt::Display,
    ) {
        self.entries.push(Violation {
            field: field.into(),
            constraint: constraint.into(),
            offered: offered.to_string(),
        });
    }

    /// Fold in the outcome of a nested validation, keeping field paths as-is.
    /// Used for `#[serde(flatten)]`-embedded structs whose fields live at the
    /// top level of the document.
    pub fn merge(&mut self, nested: Result<(), ValidationError>) {
        if let Err(err) = nested {
            self.entries.extend(err.violations);
        }
    }

    /// Fold in the outcome of a nested validation, prefixing each field path
    /// with `prefix` and a dot.
    pub fn merge_at(&mut self, prefix: &str, nested: Result<(), ValidationError>) {
        if let Err(err) = nested {
            self.entries.extend(err.violations.into_iter().map(|mut v| {
                v.field = format!("{prefix}.{}", v.field);
                v
            }));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Close out the pass: `Ok` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying every recorded violation.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.entries.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.entries,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_pass_is_ok() {
        assert!(Violations::new().finish().is_ok());
    }

    #[test]
    fn every_violation_is_reported() {
        let mut v = Violations::new();
        v.push("first_name", "must be 1-100 characters", "");
        v.push("mmse_score", "must be between 0 and 30", 35);
        let err = v.finish().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(err.names_field("first_name"));
        assert!(err.names_field("mmse_score"));
    }

    #[test]
    fn merge_at_prefixes_field_paths() {
        let nested = Err(ValidationError::single("name", "must not be empty", ""));
        let mut v = Violations::new();
        v.merge_at("medications[0]", nested);
        let err = v.finish().unwrap_err();
        assert!(err.names_field("medications[0].name"));
    }

    #[test]
    fn display_lists_field_and_constraint() {
        let err = ValidationError::single("confidence_score", "must be between 0 and 1", 1.5);
        let text = err.to_string();
        assert!(text.contains("confidence_score"));
        assert!(text.contains("must be between 0 and 1"));
        assert!(text.contains("1.5"));
    }
}
