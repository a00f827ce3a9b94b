//! # neuro-core
//!
//! Validated clinical data model for neurotrack.
//!
//! This crate provides the foundational types shared across all neurotrack
//! crates:
//! - Entity structs for patients, visits, and prognosis records
//! - Closed-set clinical enums serialized as string tokens
//! - The `Validate` trait and `ValidationError` taxonomy
//! - The agent roster used for report attribution
//!
//! Construction, validation, and serialization are pure: no shared state,
//! no clock reads (callers pass `now` explicitly), no I/O.

pub mod agents;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod validate;
