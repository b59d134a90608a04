//! Error types for FHIR models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Not a resource: {0}")]
    NotAResource(String),

    #[error("Resource type mismatch: expected {expected}, found {found}")]
    ResourceTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
