//! FHIR JSON encoding and decoding.
//!
//! Wraps the `lodestar-models` serde mapping with the parts a caller needs at
//! the document boundary:
//! - Resource documents are dispatched on their `resourceType` through the
//!   shape registry; an unknown name is an error, never a silent fallback.
//! - Every decode failure is a [`FormatError`] with an [`ErrorKind`] and the
//!   [`FieldPath`] of the offending member, e.g. `concept[0].concept[0].code`.
//! - Nothing partially decoded is ever returned.
//!
//! ```rust
//! use lodestar_format::{resource_from_str, ErrorKind};
//!
//! let document = r#"{"resourceType": "Organization", "name": "Acme"}"#;
//! let resource = resource_from_str(document).unwrap();
//! assert_eq!(resource.resource_type(), "Organization");
//!
//! let err = resource_from_str(r#"{"resourceType": "Patient"}"#).unwrap_err();
//! assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
//! ```

mod config;
mod error;
mod json;
mod path;

pub use config::FormatConfig;
pub use error::{ErrorKind, FormatError, Result};
pub use json::JsonCodec;
pub use path::{FieldPath, PathSegment};

use lodestar_models::r4::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Encode `value` with the default configuration.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    JsonCodec::default().encode_value(value)
}

/// Encode `value` as compact JSON.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    JsonCodec::default().encode_string(value)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    JsonCodec::default().decode_value(value)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    JsonCodec::default().decode_str(input)
}

/// Decode a resource document of any known type.
pub fn resource_from_value(value: Value) -> Result<Resource> {
    JsonCodec::default().decode_resource_value(value)
}

pub fn resource_from_str(input: &str) -> Result<Resource> {
    JsonCodec::default().decode_resource_str(input)
}
