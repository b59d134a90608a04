//! Shape capability and the process-wide shape registry
//!
//! Every generated type implements [`FhirShape`], which exposes its discriminator
//! (the FHIR type name), its [`ShapeKind`] and its wire field names. The
//! [`registry`] collects that information for all shapes once, on first use.

use crate::error::{Error, Result};
use crate::r4::Resource;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

/// Classification of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Top-level resource (Claim, CodeSystem, ...)
    Resource,
    /// Reusable complex datatype (CodeableConcept, Period, ...)
    ComplexType,
    /// Nested element that only exists inside its containing shape
    BackboneElement,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Resource => f.write_str("resource"),
            ShapeKind::ComplexType => f.write_str("complex-type"),
            ShapeKind::BackboneElement => f.write_str("backbone-element"),
        }
    }
}

/// A named record shape with a fixed discriminator.
pub trait FhirShape {
    /// Discriminator: the FHIR type name of this shape.
    const TYPE_NAME: &'static str;

    const KIND: ShapeKind;

    /// Wire field names in declaration order. Choice groups are written `name[x]`.
    const FIELDS: &'static [&'static str];

    /// Runtime access to [`FhirShape::TYPE_NAME`], independent of any field value.
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }
}

/// A shape that can stand on its own as a top-level document.
pub trait FhirResource: FhirShape + Serialize + DeserializeOwned + Into<Resource> {}

/// Static description of one shape, as stored in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeInfo {
    pub name: &'static str,
    pub kind: ShapeKind,
    pub fields: &'static [&'static str],
}

impl ShapeInfo {
    pub const fn of<T: FhirShape>() -> Self {
        Self {
            name: T::TYPE_NAME,
            kind: T::KIND,
            fields: T::FIELDS,
        }
    }

    /// Whether `wire_name` is one of this shape's fields.
    ///
    /// A choice group matches any key built from its prefix, so `valueBoolean`
    /// is a field of a shape declaring `value[x]`.
    pub fn has_field(&self, wire_name: &str) -> bool {
        self.fields.iter().any(|field| match field.strip_suffix("[x]") {
            Some(prefix) => wire_name
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase())),
            None => *field == wire_name,
        })
    }
}

/// Immutable discriminator → shape lookup table
#[derive(Debug)]
pub struct ShapeRegistry {
    by_name: HashMap<&'static str, ShapeInfo>,
}

impl ShapeRegistry {
    fn build(shapes: &[ShapeInfo]) -> Self {
        let by_name = shapes.iter().map(|info| (info.name, *info)).collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&ShapeInfo> {
        self.by_name.get(name)
    }

    /// Like [`ShapeRegistry::get`], but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<&ShapeInfo> {
        self.get(name)
            .ok_or_else(|| Error::UnknownShape(name.to_string()))
    }

    /// Look up a shape that must be a resource.
    pub fn require_resource(&self, name: &str) -> Result<&ShapeInfo> {
        let info = self.require(name)?;
        if info.kind == ShapeKind::Resource {
            Ok(info)
        } else {
            Err(Error::NotAResource(name.to_string()))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn is_resource(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|info| info.kind == ShapeKind::Resource)
    }

    /// Names of all resource shapes, sorted.
    pub fn resources(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .by_name
            .values()
            .filter(|info| info.kind == ShapeKind::Resource)
            .map(|info| info.name)
            .collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeInfo> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// The process-wide shape registry.
pub fn registry() -> &'static ShapeRegistry {
    static REGISTRY: OnceLock<ShapeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| ShapeRegistry::build(crate::r4::catalog::SHAPES))
}

/// The `resourceType` member of a resource.
///
/// Zero-sized: it always serializes as `T::TYPE_NAME`. When decoding, an absent
/// key is accepted and a present one must equal `T::TYPE_NAME`.
pub struct ResourceTypeTag<T>(PhantomData<fn() -> T>);

impl<T> ResourceTypeTag<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: FhirShape> ResourceTypeTag<T> {
    pub fn as_str(&self) -> &'static str {
        T::TYPE_NAME
    }
}

impl<T> Default for ResourceTypeTag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ResourceTypeTag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceTypeTag<T> {}

impl<T> PartialEq for ResourceTypeTag<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for ResourceTypeTag<T> {}

impl<T: FhirShape> fmt::Debug for ResourceTypeTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceTypeTag({})", T::TYPE_NAME)
    }
}

impl<T: FhirShape> Serialize for ResourceTypeTag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(T::TYPE_NAME)
    }
}

impl<'de, T: FhirShape> Deserialize<'de> for ResourceTypeTag<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == T::TYPE_NAME {
            Ok(Self::new())
        } else {
            Err(serde::de::Error::custom(format_args!(
                "resourceType `{}` does not match `{}`",
                name,
                T::TYPE_NAME
            )))
        }
    }
}

/// Implements [`FhirShape`] for a generated type.
macro_rules! impl_shape {
    ($ty:ident, $kind:ident, [$($field:literal),* $(,)?]) => {
        impl $crate::shape::FhirShape for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);
            const KIND: $crate::shape::ShapeKind = $crate::shape::ShapeKind::$kind;
            const FIELDS: &'static [&'static str] = &[$($field),*];
        }
    };
}

pub(crate) use impl_shape;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::{CodeSystem, CodeSystemConcept, Coding, Encounter};

    #[test]
    fn test_registry_kinds() {
        let reg = registry();
        assert_eq!(reg.get("Claim").map(|i| i.kind), Some(ShapeKind::Resource));
        assert_eq!(
            reg.get("CodeSystemConcept").map(|i| i.kind),
            Some(ShapeKind::BackboneElement)
        );
        assert_eq!(
            reg.get("CodeableConcept").map(|i| i.kind),
            Some(ShapeKind::ComplexType)
        );
        assert!(reg.get("Patient").is_none());
        assert!(!reg.is_empty());
    }

    #[test]
    fn test_registry_resources_sorted() {
        let resources = registry().resources();
        assert_eq!(resources.len(), 15);
        assert_eq!(resources.first(), Some(&"Bundle"));
        assert_eq!(resources.last(), Some(&"ValueSet"));
        assert!(resources.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_registry_names_match_type_names() {
        for info in registry().iter() {
            assert_eq!(registry().get(info.name), Some(info));
        }
        assert_eq!(registry().require("Encounter").unwrap().name, Encounter::TYPE_NAME);
    }

    #[test]
    fn test_require_errors() {
        assert!(matches!(
            registry().require("Nope"),
            Err(Error::UnknownShape(name)) if name == "Nope"
        ));
        assert!(matches!(
            registry().require_resource("Coding"),
            Err(Error::NotAResource(name)) if name == "Coding"
        ));
        assert!(registry().require_resource("ValueSet").is_ok());
    }

    #[test]
    fn test_fields_and_choice_groups() {
        let info = ShapeInfo::of::<CodeSystemConcept>();
        assert_eq!(info.fields.first(), Some(&"id"));
        assert!(info.has_field("concept"));
        assert!(!info.has_field("resourceType"));

        let property = registry().get("CodeSystemConceptProperty").unwrap();
        assert!(property.fields.contains(&"value[x]"));
        assert!(property.has_field("valueBoolean"));
        assert!(!property.has_field("value"));
        assert!(!property.has_field("valueset"));

        let coding = Coding::default();
        assert_eq!(coding.type_name(), "Coding");
    }

    #[test]
    fn test_resource_type_tag() {
        let tag = ResourceTypeTag::<CodeSystem>::new();
        assert_eq!(tag.as_str(), "CodeSystem");
        assert_eq!(serde_json::to_value(tag).unwrap(), "CodeSystem");

        let ok: ResourceTypeTag<CodeSystem> =
            serde_json::from_value(serde_json::json!("CodeSystem")).unwrap();
        assert_eq!(ok, tag);

        let err =
            serde_json::from_value::<ResourceTypeTag<CodeSystem>>(serde_json::json!("ValueSet"))
                .unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }
}
