//! The construction-time validation boundary.

use crate::errors::ValidationError;

/// Implemented by every entity that enforces field constraints at
/// construction time.
///
/// Validation is all-or-nothing: a call either proves every constraint holds
/// or returns a [`ValidationError`] listing each broken one. Values are never
/// coerced into range.
pub trait Validate: Sized {
    /// Check every field constraint, reporting all violations at once.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each violated field.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Consume and return the value if every constraint holds.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each violated field.
    fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }
}
