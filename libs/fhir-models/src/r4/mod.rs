//! FHIR R4 shapes
//!
//! One module per resource, holding the resource and all of its backbone
//! elements, plus the shared datatypes, code vocabularies and choice groups
//! they are built from.

pub mod bundle;
pub(crate) mod catalog;
pub mod choice;
pub mod claim;
pub mod claim_response;
pub mod code_system;
pub mod codes;
pub mod datatypes;
pub mod encounter;
pub mod explanation_of_benefit;
pub mod medication_knowledge;
pub mod molecular_sequence;
pub mod organization;
pub mod plan_definition;
pub mod primitives;
pub mod questionnaire;
pub mod resource;
pub mod structure_map;
pub mod task;
pub mod test_script;
pub mod value_set;

pub use bundle::*;
pub use choice::{OpenValue, Subject};
pub use claim::*;
pub use claim_response::*;
pub use code_system::*;
pub use codes::*;
pub use datatypes::*;
pub use encounter::*;
pub use explanation_of_benefit::*;
pub use medication_knowledge::*;
pub use molecular_sequence::*;
pub use organization::*;
pub use plan_definition::*;
pub use primitives::*;
pub use questionnaire::*;
pub use resource::{visit_resource_type, Resource, ResourceVisitor};
pub use structure_map::*;
pub use task::*;
pub use test_script::*;
pub use value_set::*;
