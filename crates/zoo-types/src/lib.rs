//! Foundation types for the zoo catalog.
//!
//! Every other zoo crate depends on `zoo-types`. This crate has no I/O; it
//! only defines the record shape, the checks a candidate must pass before it
//! can become a record, and the criteria used to filter records.
//!
//! # Key Types
//!
//! - [`Animal`] — A stored catalog record with its assigned [`AnimalId`]
//! - [`AnimalDraft`] — A validated candidate that has not been assigned an id
//! - [`AnimalQuery`] — Filter criteria (traits, diet, species, name)
//! - [`ValidationError`] — Why a candidate was rejected

pub mod animal;
pub mod error;
pub mod query;

pub use animal::{validate_animal, Animal, AnimalDraft, AnimalId};
pub use error::ValidationError;
pub use query::AnimalQuery;

/// Message returned to clients for any rejected candidate.
///
/// Field-level detail stays in [`ValidationError`] and is only logged.
pub const INVALID_ANIMAL_MESSAGE: &str = "The animal is not properly formatted.";
