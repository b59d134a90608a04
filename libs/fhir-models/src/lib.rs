//! FHIR R4 data models
//!
//! Strongly-typed Rust structures for a subset of FHIR R4 resources, their
//! backbone elements and the datatypes they use.
//!
//! # Module Organization
//!
//! - `r4`: resources, datatypes, code vocabularies and choice groups
//! - `shape`: the [`FhirShape`] capability and the shape [`registry`]
//! - `located`: path-prefixed messages for errors raised inside buffered decodes
//!
//! # Wire mapping
//!
//! - **Omission**: absent optional fields are not written (no `null`s)
//! - **Choice groups**: `value[x]` and friends are enums, so at most one member can be set
//! - **Forward compatible**: unknown keys are ignored when reading
//! - **Discriminated**: every resource writes its `resourceType`
//!
//! # Example
//!
//! ```rust
//! use lodestar_models::r4::{CodeSystem, CodeSystemConcept, CodeSystemContentMode};
//! use lodestar_models::FhirShape;
//! use serde_json::json;
//!
//! let cs_json = json!({
//!     "resourceType": "CodeSystem",
//!     "url": "http://example.org/CodeSystem/colors",
//!     "status": "active",
//!     "content": "complete",
//!     "concept": [
//!         {"code": "red", "concept": [{"code": "crimson"}]}
//!     ]
//! });
//!
//! let cs: CodeSystem = serde_json::from_value(cs_json).unwrap();
//! assert_eq!(cs.content, CodeSystemContentMode::Complete);
//! assert_eq!(cs.type_name(), "CodeSystem");
//!
//! let red: &CodeSystemConcept = &cs.concept.as_ref().unwrap()[0];
//! assert_eq!(red.concept.as_ref().unwrap()[0].code, "crimson");
//! ```

pub mod error;
pub mod located;
pub mod r4;
pub mod shape;

pub use error::{Error, Result};
pub use r4::Resource;
pub use shape::{
    registry, FhirResource, FhirShape, ResourceTypeTag, ShapeInfo, ShapeKind, ShapeRegistry,
};
