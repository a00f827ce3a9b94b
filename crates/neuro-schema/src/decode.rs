//! Typed document decoding with schema validation.
//!
//! [`decode`] is the inverse of [`encode`]: untrusted documents are first
//! validated against the entity's schemars-generated JSON Schema (collecting
//! every violation, each naming the offending field), then deserialized, then
//! run through the same [`Validate`] pass the constructors use. A document is
//! never partially accepted and values are never coerced into range.

use jsonschema::error::ValidationErrorKind;
use neuro_core::errors::{ValidationError, Violation};
use neuro_core::validate::Validate;
use schemars::{JsonSchema, schema_for};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize an entity to its structured document form.
///
/// Deterministic and round-trippable: enum fields become their string
/// tokens, date/time fields become ISO-8601 text, absent optionals become
/// explicit nulls.
///
/// # Panics
///
/// Panics if the entity fails to serialize, which cannot happen for the
/// entity types defined in `neuro-core`.
#[must_use]
pub fn encode<T: Serialize>(entity: &T) -> serde_json::Value {
    serde_json::to_value(entity).expect("entity types serialize infallibly")
}

/// Validate `document` against `T`'s JSON Schema, then deserialize and run
/// the same constraint pass the constructors use.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every schema violation (missing
/// required fields, unknown enum tokens, out-of-range numerics, wrong
/// types), or every constraint violation from the entity's own validation.
///
/// # Panics
///
/// Panics if schemars output fails to serialize or compile as a schema.
/// This is not expected in practice because schemars always produces valid
/// JSON Schema.
pub fn decode<T>(document: &serde_json::Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + JsonSchema + Validate,
{
    let schema =
        serde_json::to_value(schema_for!(T)).expect("schemars output is JSON-serialisable");
    let validator =
        jsonschema::validator_for(&schema).expect("schemars output compiles as a schema");

    let violations: Vec<Violation> = validator
        .iter_errors(document)
        .map(|e| to_violation(&e))
        .collect();
    if !violations.is_empty() {
        tracing::debug!(
            entity = std::any::type_name::<T>(),
            count = violations.len(),
            "document rejected by schema"
        );
        return Err(ValidationError { violations });
    }

    let entity: T = serde_json::from_value(document.clone())
        .map_err(|e| ValidationError::single("$", "must deserialize into the entity shape", e))?;
    entity.validated()
}

fn to_violation(err: &jsonschema::ValidationError<'_>) -> Violation {
    let base = pointer_to_field(&err.instance_path.to_string());
    if let ValidationErrorKind::Required { property } = &err.kind {
        let name = property
            .as_str()
            .map_or_else(|| property.to_string(), ToString::to_string);
        let field = if base.is_empty() {
            name
        } else {
            format!("{base}.{name}")
        };
        return Violation {
            field,
            constraint: err.to_string(),
            offered: "missing".to_string(),
        };
    }
    Violation {
        field: if base.is_empty() { "$".to_string() } else { base },
        constraint: err.to_string(),
        offered: err.instance.to_string(),
    }
}

/// Convert a JSON pointer (`/medications/0/name`) into the dotted field
/// paths the construct-time validators use (`medications[0].name`).
fn pointer_to_field(pointer: &str) -> String {
    let mut out = String::new();
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
            out.push_str(&format!("[{segment}]"));
        } else {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(&segment);
        }
    }
    out
}
