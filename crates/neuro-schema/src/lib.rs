//! # neuro-schema
//!
//! JSON Schema generation, validation, and the document decode boundary for
//! neurotrack.
//!
//! This crate provides:
//! - [`decode`]/[`encode`]: the typed document boundary — untrusted documents
//!   are schema-validated, deserialized, and run through the same constraint
//!   pass the constructors use, with one error taxonomy end to end
//! - [`SchemaRegistry`]: named store of every entity schema for storage
//!   collaborators, API boundaries, and agent prompt context
//!
//! Entity types are defined in `neuro-core` with `#[derive(JsonSchema)]`;
//! this crate imports those types and provides the validation layer.

mod decode;
mod error;
mod registry;

pub use decode::{decode, encode};
pub use error::SchemaError;
pub use registry::SchemaRegistry;
