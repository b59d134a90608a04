//! FHIR ValueSet model
//!
//! Expansion entries nest through `ValueSetExpansionContains.contains`.

use crate::r4::choice;
use crate::r4::codes::{FilterOperator, PublicationStatus};
use crate::r4::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative, UsageContext,
};
use crate::r4::primitives::{Code, Date, DateTime, Decimal, Id, Integer, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR ValueSet resource
///
/// A set of codes drawn from one or more code systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSet {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<ValueSet>,
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
    pub immutable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compose: Option<ValueSetCompose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansion: Option<ValueSetExpansion>,
}

impl ValueSet {
    pub fn new(status: PublicationStatus) -> Self {
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
            immutable: None,
            purpose: None,
            copyright: None,
            compose: None,
            expansion: None,
        }
    }
}

/// Content logical definition of the value set (CLD)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetCompose {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
    pub include: Vec<ValueSetComposeInclude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<ValueSetComposeInclude>>,
}

impl ValueSetCompose {
    pub fn new(include: Vec<ValueSetComposeInclude>) -> Self {
        Self {
            include,
            ..Default::default()
        }
    }
}

/// Include one or more codes from a code system or other value set(s)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetComposeInclude {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<ValueSetComposeIncludeConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<ValueSetComposeIncludeFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetComposeIncludeConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Vec<ValueSetComposeIncludeConceptDesignation>>,
}

impl ValueSetComposeIncludeConcept {
    pub fn new(code: String) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetComposeIncludeConceptDesignation {
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

impl ValueSetComposeIncludeConceptDesignation {
    pub fn new(value: String) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
}

/// Select codes/concepts by their properties (including relationships)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetComposeIncludeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub property: String,
    pub op: FilterOperator,
    pub value: String,
}

impl ValueSetComposeIncludeFilter {
    pub fn new(property: String, op: FilterOperator, value: String) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            property,
            op,
            value,
        }
    }
}

/// Used when the value set is "expanded"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetExpansion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub timestamp: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Vec<ValueSetExpansionParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Vec<ValueSetExpansionContains>>,
}

impl ValueSetExpansion {
    pub fn new(timestamp: DateTime) -> Self {
        Self {
            timestamp,
            ..Default::default()
        }
    }
}

/// Codes in the value set
///
/// Entries may contain nested entries, to any depth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetExpansionContains {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// If user cannot select this entry (`abstract` on the wire)
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Vec<ValueSetComposeIncludeConceptDesignation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Vec<ValueSetExpansionContains>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetExpansionParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<ValueSetExpansionParameterValue>,
}

impl ValueSetExpansionParameter {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

/// `value[x]` of `ValueSetExpansionParameter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueSetExpansionParameterValue {
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueInteger")]
    Integer(Integer),
    #[serde(rename = "valueDecimal")]
    Decimal(Decimal),
    #[serde(rename = "valueUri")]
    Uri(Uri),
    #[serde(rename = "valueCode")]
    Code(Code),
    #[serde(rename = "valueDateTime")]
    DateTime(DateTime),
}

impl ValueSetExpansionParameterValue {
    /// Type suffix of the populated member, e.g. `"String"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
            Self::Uri(_) => "Uri",
            Self::Code(_) => "Code",
            Self::DateTime(_) => "DateTime",
        }
    }
}

impl_shape!(ValueSet, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "url", "identifier", "version", "name", "title", "status", "experimental",
    "date", "publisher", "contact", "description", "useContext", "jurisdiction", "immutable",
    "purpose", "copyright", "compose", "expansion",
]);
impl_shape!(ValueSetCompose, BackboneElement, [
    "id", "extension", "modifierExtension", "lockedDate", "inactive", "include", "exclude",
]);
impl_shape!(ValueSetComposeInclude, BackboneElement, [
    "id", "extension", "modifierExtension", "system", "version", "concept", "filter", "valueSet",
]);
impl_shape!(ValueSetComposeIncludeConcept, BackboneElement, [
    "id", "extension", "modifierExtension", "code", "display", "designation",
]);
impl_shape!(ValueSetComposeIncludeConceptDesignation, BackboneElement, [
    "id", "extension", "modifierExtension", "language", "use", "value",
]);
impl_shape!(ValueSetComposeIncludeFilter, BackboneElement, [
    "id", "extension", "modifierExtension", "property", "op", "value",
]);
impl_shape!(ValueSetExpansion, BackboneElement, [
    "id", "extension", "modifierExtension", "identifier", "timestamp", "total", "offset",
    "parameter", "contains",
]);
impl_shape!(ValueSetExpansionContains, BackboneElement, [
    "id", "extension", "modifierExtension", "system", "abstract", "inactive", "version", "code",
    "display", "designation", "contains",
]);
impl_shape!(ValueSetExpansionParameter, BackboneElement, [
    "id", "extension", "modifierExtension", "name", "value[x]",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expansion_abstract_and_nested_contains() {
        let json = json!({
            "resourceType": "ValueSet",
            "status": "active",
            "expansion": {
                "timestamp": "2024-01-01T00:00:00Z",
                "total": 2,
                "parameter": [{"name": "excludeNested", "valueBoolean": false}],
                "contains": [{
                    "system": "http://example.org/cs",
                    "abstract": true,
                    "code": "A",
                    "contains": [{
                        "system": "http://example.org/cs",
                        "code": "A.1",
                        "contains": [{"system": "http://example.org/cs", "code": "A.1.1"}]
                    }]
                }]
            }
        });

        let vs: ValueSet = serde_json::from_value(json.clone()).unwrap();
        let expansion = vs.expansion.as_ref().unwrap();
        let top = &expansion.contains.as_ref().unwrap()[0];
        assert_eq!(top.abstract_, Some(true));
        assert_eq!(
            top.contains.as_ref().unwrap()[0].contains.as_ref().unwrap()[0]
                .code
                .as_deref(),
            Some("A.1.1")
        );
        assert_eq!(
            expansion.parameter.as_ref().unwrap()[0].value,
            Some(ValueSetExpansionParameterValue::Boolean(false))
        );

        assert_eq!(serde_json::to_value(&vs).unwrap(), json);
    }

    #[test]
    fn test_compose_include() {
        let include = ValueSetComposeInclude {
            system: Some("http://loinc.org".to_string()),
            filter: Some(vec![ValueSetComposeIncludeFilter::new(
                "parent".to_string(),
                FilterOperator::IsA,
                "LP43571-6".to_string(),
            )]),
            ..Default::default()
        };
        let vs = ValueSet {
            compose: Some(ValueSetCompose::new(vec![include])),
            ..ValueSet::new(PublicationStatus::Draft)
        };

        let value = serde_json::to_value(&vs).unwrap();
        assert_eq!(
            value["compose"],
            json!({
                "include": [{
                    "system": "http://loinc.org",
                    "filter": [{"property": "parent", "op": "is-a", "value": "LP43571-6"}]
                }]
            })
        );
        assert!(value.get("expansion").is_none());
    }

    #[test]
    fn test_expansion_requires_timestamp() {
        let err = serde_json::from_value::<ValueSetExpansion>(json!({"total": 0})).unwrap_err();
        assert!(err.to_string().contains("missing field `timestamp`"));
    }
}
