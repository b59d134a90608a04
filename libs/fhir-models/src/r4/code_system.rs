//! FHIR CodeSystem model
//!
//! Concepts nest: `CodeSystemConcept.concept` holds the child concepts of a
//! hierarchy, to any depth.

use crate::r4::choice;
use crate::r4::codes::{
    CodeSystemContentMode, CodeSystemHierarchyMeaning, FilterOperator, PropertyType,
    PublicationStatus,
};
use crate::r4::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative, UsageContext,
};
use crate::r4::primitives::{Code, DateTime, Decimal, Id, Integer, UnsignedInt, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR CodeSystem resource
///
/// Declares the existence of and describes a code system or code system supplement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<CodeSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Canonical identifier for this code system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: PublicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_meaning: Option<CodeSystemHierarchyMeaning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compositional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_needed: Option<bool>,
    pub content: CodeSystemContentMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<UnsignedInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<CodeSystemFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<CodeSystemProperty>>,
    /// Concepts in the code system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<CodeSystemConcept>>,
}

impl CodeSystem {
    /// Create a code system with only `status` and `content` set.
    pub fn new(status: PublicationStatus, content: CodeSystemContentMode) -> Self {
        Self {
            resource_type: ResourceTypeTag::new(),
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            url: None,
            identifier: None,
            version: None,
            name: None,
            title: None,
            status,
            experimental: None,
            date: None,
            publisher: None,
            contact: None,
            description: None,
            use_context: None,
            jurisdiction: None,
            purpose: None,
            copyright: None,
            case_sensitive: None,
            value_set: None,
            hierarchy_meaning: None,
            compositional: None,
            version_needed: None,
            content,
            supplements: None,
            count: None,
            filter: None,
            property: None,
            concept: None,
        }
    }
}

/// A concept defined in a code system
///
/// Concepts may contain child concepts, forming the code system hierarchy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that identifies concept
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Vec<CodeSystemConceptDesignation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<CodeSystemConceptProperty>>,
    /// Child concepts (is-a/contains/categorizes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<CodeSystemConcept>>,
}

impl CodeSystemConcept {
    pub fn new(code: String) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }
}

/// Additional representations for the concept
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemConceptDesignation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<Coding>,
    pub value: String,
}

impl CodeSystemConceptDesignation {
    pub fn new(value: String) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
}

/// Property value for the concept
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemConceptProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: String,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<CodeSystemConceptPropertyValue>,
}

impl CodeSystemConceptProperty {
    pub fn new(code: String) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }
}

/// `value[x]` of `CodeSystemConceptProperty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CodeSystemConceptPropertyValue {
    #[serde(rename = "valueCode")]
    Code(Code),
    #[serde(rename = "valueCoding")]
    Coding(Coding),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueInteger")]
    Integer(Integer),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[serde(rename = "valueDecimal")]
    Decimal(Decimal),
}

impl CodeSystemConceptPropertyValue {
    /// Type suffix of the populated member, e.g. `"Code"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Code(_) => "Code",
            Self::Coding(_) => "Coding",
            Self::String(_) => "String",
            Self::Integer(_) => "Integer",
            Self::Boolean(_) => "Boolean",
            Self::DateTime(_) => "DateTime",
            Self::Decimal(_) => "Decimal",
        }
    }
}

/// Filter that can be used in a value set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub operator: Vec<FilterOperator>,
    pub value: String,
}

impl CodeSystemFilter {
    pub fn new(code: String, operator: Vec<FilterOperator>, value: String) -> Self {
        Self {
            code,
            operator,
            value,
            ..Default::default()
        }
    }
}

/// Additional information supplied about each concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_: PropertyType,
}

impl CodeSystemProperty {
    pub fn new(code: String, type_: PropertyType) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code,
            uri: None,
            description: None,
            type_,
        }
    }
}

impl_shape!(CodeSystem, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "url", "identifier", "version", "name", "title", "status", "experimental",
    "date", "publisher", "contact", "description", "useContext", "jurisdiction", "purpose",
    "copyright", "caseSensitive", "valueSet", "hierarchyMeaning", "compositional", "versionNeeded",
    "content", "supplements", "count", "filter", "property", "concept",
]);
impl_shape!(CodeSystemConcept, BackboneElement, [
    "id", "extension", "modifierExtension", "code", "display", "definition", "designation",
    "property", "concept",
]);
impl_shape!(CodeSystemConceptDesignation, BackboneElement, [
    "id", "extension", "modifierExtension", "language", "use", "value",
]);
impl_shape!(CodeSystemConceptProperty, BackboneElement, [
    "id", "extension", "modifierExtension", "code", "value[x]",
]);
impl_shape!(CodeSystemFilter, BackboneElement, [
    "id", "extension", "modifierExtension", "code", "description", "operator", "value",
]);
impl_shape!(CodeSystemProperty, BackboneElement, [
    "id", "extension", "modifierExtension", "code", "uri", "description", "type",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn concept(code: &str, children: Vec<CodeSystemConcept>) -> CodeSystemConcept {
        CodeSystemConcept {
            concept: (!children.is_empty()).then_some(children),
            ..CodeSystemConcept::new(code.to_string())
        }
    }

    #[test]
    fn test_concept_hierarchy_three_levels() {
        let mut cs = CodeSystem::new(PublicationStatus::Active, CodeSystemContentMode::Complete);
        cs.concept = Some(vec![concept(
            "A",
            vec![concept("A.1", vec![concept("A.1.1", vec![])])],
        )]);

        let value = serde_json::to_value(&cs).unwrap();
        assert_eq!(value["concept"][0]["concept"][0]["concept"][0]["code"], "A.1.1");
        assert!(value["concept"][0]["concept"][0]["concept"][0]
            .get("concept")
            .is_none());

        let back: CodeSystem = serde_json::from_value(value).unwrap();
        assert_eq!(back, cs);
    }

    #[test]
    fn test_property_value_boolean_single_key() {
        let property = CodeSystemConceptProperty {
            value: Some(CodeSystemConceptPropertyValue::Boolean(true)),
            ..CodeSystemConceptProperty::new("notSelectable".to_string())
        };

        let value = serde_json::to_value(&property).unwrap();
        let object = value.as_object().unwrap();
        let value_keys: Vec<_> = object.keys().filter(|k| k.starts_with("value")).collect();
        assert_eq!(value_keys, ["valueBoolean"]);
        assert_eq!(object["valueBoolean"], true);

        let back: CodeSystemConceptProperty = serde_json::from_value(value).unwrap();
        assert_eq!(back.value.as_ref().map(|v| v.type_suffix()), Some("Boolean"));
    }

    #[test]
    fn test_property_without_value() {
        let property: CodeSystemConceptProperty =
            serde_json::from_value(json!({"code": "parent"})).unwrap();
        assert_eq!(property.value, None);
        assert_eq!(serde_json::to_value(&property).unwrap(), json!({"code": "parent"}));
    }

    #[test]
    fn test_property_value_wrong_type() {
        let err = serde_json::from_value::<CodeSystemConceptProperty>(json!({
            "code": "notSelectable",
            "valueBoolean": "yes"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let cs: CodeSystem = serde_json::from_value(json!({
            "resourceType": "CodeSystem",
            "status": "draft",
            "content": "not-present",
            "somethingElse": {"nested": [1, 2, 3]}
        }))
        .unwrap();
        assert_eq!(cs.content, CodeSystemContentMode::NotPresent);
        assert_eq!(
            serde_json::to_value(&cs).unwrap(),
            json!({"resourceType": "CodeSystem", "status": "draft", "content": "not-present"})
        );
    }

    #[test]
    fn test_missing_required_field() {
        let err = serde_json::from_value::<CodeSystem>(json!({
            "resourceType": "CodeSystem",
            "status": "draft"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `content`"));

        let err = serde_json::from_value::<CodeSystemConcept>(json!({"display": "x"}))
            .unwrap_err();
        assert!(err.to_string().contains("missing field `code`"));
    }
}
