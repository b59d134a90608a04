//! Reusable FHIR datatypes
//!
//! - `general`: Coding, Quantity and friends, Timing, Address, ...
//! - `metadata`: types used by knowledge artifacts (ContactDetail, UsageContext, ...)
//! - `special`: Extension, Reference, Meta, Narrative, Dosage

pub mod general;
pub mod metadata;
pub mod special;

pub use general::*;
pub use metadata::*;
pub use special::*;
