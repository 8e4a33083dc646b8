//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`MissingFields`] returned when an expense lacks required fields.
//! - [`Storage`] returned when the expense store cannot be read or written.
//!
//!  [`MissingFields`]: EngineError::MissingFields
//!  [`Storage`]: EngineError::Storage
use thiserror::Error;

use crate::expense::Field;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
    #[error("Storage failure: {0}")]
    Storage(String),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
