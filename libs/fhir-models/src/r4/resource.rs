//! Polymorphic resource container
//!
//! [`Resource`] is what `contained`, `Bundle.entry.resource` and
//! `Bundle.entry.response.outcome` hold. On the wire it is just the inner
//! resource; the `resourceType` member selects the variant.

use crate::error::{Error, Result};
use crate::located;
use crate::r4::{
    Bundle, Claim, ClaimResponse, CodeSystem, Encounter, ExplanationOfBenefit, MedicationKnowledge,
    MolecularSequence, Organization, PlanDefinition, Questionnaire, StructureMap, Task, TestScript,
    ValueSet,
};
use crate::shape::{FhirResource, FhirShape};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Static dispatch from a discriminator string to a concrete resource type.
///
/// See [`visit_resource_type`].
pub trait ResourceVisitor {
    type Output;

    fn visit<R: FhirResource>(self) -> Self::Output;
}

macro_rules! resources {
    ($($name:ident),* $(,)?) => {
        /// Any R4 resource known to this crate
        #[derive(Debug, Clone)]
        pub enum Resource {
            $($name($name),)*
        }

        impl Resource {
            /// Discriminator of the wrapped resource.
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $(Resource::$name(_) => $name::TYPE_NAME,)*
                }
            }

            /// Logical id of the wrapped resource, if any.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $(Resource::$name(r) => r.id.as_deref(),)*
                }
            }
        }

        impl PartialEq for Resource {
            #[inline(never)]
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Resource::$name(a), Resource::$name(b)) => a == b,)*
                    _ => false,
                }
            }
        }

        impl Serialize for Resource {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match self {
                    $(Resource::$name(r) => r.serialize(serializer),)*
                }
            }
        }

        $(
            impl FhirResource for $name {}

            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(resource)
                }
            }

            impl TryFrom<Resource> for $name {
                type Error = Error;

                fn try_from(resource: Resource) -> Result<Self> {
                    match resource {
                        Resource::$name(inner) => Ok(inner),
                        other => Err(Error::ResourceTypeMismatch {
                            expected: $name::TYPE_NAME,
                            found: other.resource_type(),
                        }),
                    }
                }
            }
        )*

        /// Calls `visitor` with the Rust type whose discriminator is `name`.
        ///
        /// Returns `None` when `name` is not a resource known to this crate.
        pub fn visit_resource_type<V>(name: &str, visitor: V) -> Option<V::Output>
        where
            V: ResourceVisitor,
        {
            match name {
                $(stringify!($name) => Some(visitor.visit::<$name>()),)*
                _ => None,
            }
        }
    };
}

resources! {
    Bundle,
    Claim,
    ClaimResponse,
    CodeSystem,
    Encounter,
    ExplanationOfBenefit,
    MedicationKnowledge,
    MolecularSequence,
    Organization,
    PlanDefinition,
    Questionnaire,
    StructureMap,
    Task,
    TestScript,
    ValueSet,
}

impl Resource {
    /// Decode a resource from a JSON value, dispatching on `resourceType`.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

struct FromValue(Value);

impl ResourceVisitor for FromValue {
    type Output = serde_json::Result<Resource>;

    fn visit<R: FhirResource>(self) -> Self::Output {
        located::deserialize::<_, R>(self.0).map(Into::into)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let Some(object) = value.as_object() else {
            return Err(de::Error::invalid_type(unexpected(&value), &"a resource object"));
        };
        let name = match object.get("resourceType") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(de::Error::invalid_type(unexpected(other), &"a resource type name"))
            }
            None => return Err(de::Error::missing_field("resourceType")),
        };

        visit_resource_type(&name, FromValue(value))
            .ok_or_else(|| {
                <D::Error as de::Error>::custom(format_args!("unknown resource type `{name}`"))
            })?
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::{CodeSystemContentMode, HumanName, OrganizationContact, PublicationStatus};
    use serde_json::json;

    struct NameOf;

    impl ResourceVisitor for NameOf {
        type Output = &'static str;

        fn visit<R: FhirResource>(self) -> Self::Output {
            R::TYPE_NAME
        }
    }

    #[test]
    fn test_visit_resource_type() {
        assert_eq!(visit_resource_type("Task", NameOf), Some("Task"));
        assert_eq!(visit_resource_type("Patient", NameOf), None);
        assert_eq!(visit_resource_type("CodeSystemConcept", NameOf), None);
    }

    #[test]
    fn test_resource_dispatch() {
        let resource = Resource::from_value(json!({
            "resourceType": "Organization",
            "id": "org-1",
            "name": "Acme Health"
        }))
        .unwrap();

        assert_eq!(resource.resource_type(), "Organization");
        assert_eq!(resource.id(), Some("org-1"));

        let org = Organization::try_from(resource).unwrap();
        assert_eq!(org.name.as_deref(), Some("Acme Health"));
    }

    #[test]
    fn test_resource_serializes_discriminator() {
        let cs = CodeSystem::new(PublicationStatus::Draft, CodeSystemContentMode::Complete);
        let value = Resource::from(cs).to_value().unwrap();
        assert_eq!(
            value,
            json!({"resourceType": "CodeSystem", "status": "draft", "content": "complete"})
        );
    }

    #[test]
    fn test_unknown_resource_type() {
        let err = Resource::from_value(json!({"resourceType": "Patient"})).unwrap_err();
        assert!(err.to_string().contains("unknown resource type `Patient`"));

        let err = Resource::from_value(json!({"id": "x"})).unwrap_err();
        assert!(err.to_string().contains("missing field `resourceType`"));

        let err = Resource::from_value(json!(["not", "an", "object"])).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_try_from_mismatch() {
        let resource = Resource::from(Organization::default());
        let err = CodeSystem::try_from(resource).unwrap_err();
        assert!(matches!(
            err,
            Error::ResourceTypeMismatch { expected: "CodeSystem", found: "Organization" }
        ));
    }

    #[test]
    fn test_contained_round_trip() {
        let contact = OrganizationContact {
            name: Some(HumanName {
                family: Some("Chalmers".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let inner = Organization {
            id: Some("inner".to_string()),
            contact: Some(vec![contact]),
            ..Default::default()
        };
        let outer = Organization {
            id: Some("outer".to_string()),
            contained: Some(vec![inner.into()]),
            ..Default::default()
        };

        let value = serde_json::to_value(&outer).unwrap();
        assert_eq!(value["contained"][0]["resourceType"], "Organization");
        assert_eq!(value["contained"][0]["contact"][0]["name"]["family"], "Chalmers");

        let back: Organization = serde_json::from_value(value).unwrap();
        assert_eq!(back, outer);
    }
}
