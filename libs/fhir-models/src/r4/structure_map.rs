//! FHIR StructureMap resource
//!
//! Rules nest through `StructureMapGroupRule.rule`.

use crate::r4::choice;
use crate::r4::codes::{
    PublicationStatus, StructureMapContextType, StructureMapGroupTypeMode, StructureMapInputMode,
    StructureMapModelMode, StructureMapSourceListMode, StructureMapTargetListMode,
    StructureMapTransform,
};
use crate::r4::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactDetail, ContactPoint,
    Contributor, Count, DataRequirement, Distance, Dosage, Duration, Expression, Extension,
    HumanName, Identifier, Meta, Money, Narrative, ParameterDefinition, Period, Quantity, Range,
    Ratio, Reference, RelatedArtifact, SampledData, Signature, Timing, TriggerDefinition,
    UsageContext,
};
use crate::r4::primitives::{
    Base64Binary, Canonical, Code, Date, DateTime, Decimal, Id, Instant, Integer, Markdown, Oid,
    PositiveInt, Time, UnsignedInt, Uri, Url, Uuid,
};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR StructureMap resource
///
/// A map describing the transformation of one set of structures into another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMap {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<StructureMap>,
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
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
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
    pub structure: Option<Vec<StructureMapStructure>>,
    /// Other maps used by this map (canonical URLs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<Vec<String>>,
    pub group: Vec<StructureMapGroup>,
}

impl StructureMap {
    /// Create a structure map from its required fields.
    pub fn new(
        url: String,
        name: String,
        status: PublicationStatus,
        group: Vec<StructureMapGroup>,
    ) -> Self {
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
            url,
            identifier: None,
            version: None,
            name,
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
            structure: None,
            import: None,
            group,
        }
    }
}

/// Named sections for reader convenience
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    /// Another group that this group adds rules to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub type_mode: StructureMapGroupTypeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub input: Vec<StructureMapGroupInput>,
    pub rule: Vec<StructureMapGroupRule>,
}

impl StructureMapGroup {
    pub fn new(
        name: String,
        type_mode: StructureMapGroupTypeMode,
        input: Vec<StructureMapGroupInput>,
        rule: Vec<StructureMapGroupRule>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            name,
            extends: None,
            type_mode,
            documentation: None,
            input,
            rule,
        }
    }
}

/// Named instance provided when invoking the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    pub mode: StructureMapInputMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl StructureMapGroupInput {
    pub fn new(name: String, mode: StructureMapInputMode) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            name,
            type_: None,
            mode,
            documentation: None,
        }
    }
}

/// Transform Rule from source to target
///
/// Rules may contain nested rules, to any depth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    pub source: Vec<StructureMapGroupRuleSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<StructureMapGroupRuleTarget>>,
    /// Rules contained in this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Vec<StructureMapGroupRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent: Option<Vec<StructureMapGroupRuleDependent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl StructureMapGroupRule {
    pub fn new(name: String, source: Vec<StructureMapGroupRuleSource>) -> Self {
        Self {
            name,
            source,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleDependent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    pub variable: Vec<String>,
}

impl StructureMapGroupRuleDependent {
    pub fn new(name: String, variable: Vec<String>) -> Self {
        Self {
            name,
            variable,
            ..Default::default()
        }
    }
}

/// Source inputs to the mapping
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub default_value: Option<StructureMapGroupRuleSourceDefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_mode: Option<StructureMapSourceListMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_message: Option<String>,
}

impl StructureMapGroupRuleSource {
    pub fn new(context: String) -> Self {
        Self {
            context,
            ..Default::default()
        }
    }
}

/// `defaultValue[x]` of `StructureMapGroupRuleSource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructureMapGroupRuleSourceDefaultValue {
    #[serde(rename = "defaultValueBase64Binary")]
    Base64Binary(Base64Binary),
    #[serde(rename = "defaultValueBoolean")]
    Boolean(bool),
    #[serde(rename = "defaultValueCanonical")]
    Canonical(Canonical),
    #[serde(rename = "defaultValueCode")]
    Code(Code),
    #[serde(rename = "defaultValueDate")]
    Date(Date),
    #[serde(rename = "defaultValueDateTime")]
    DateTime(DateTime),
    #[serde(rename = "defaultValueDecimal")]
    Decimal(Decimal),
    #[serde(rename = "defaultValueId")]
    Id(Id),
    #[serde(rename = "defaultValueInstant")]
    Instant(Instant),
    #[serde(rename = "defaultValueInteger")]
    Integer(Integer),
    #[serde(rename = "defaultValueMarkdown")]
    Markdown(Markdown),
    #[serde(rename = "defaultValueOid")]
    Oid(Oid),
    #[serde(rename = "defaultValuePositiveInt")]
    PositiveInt(PositiveInt),
    #[serde(rename = "defaultValueString")]
    String(String),
    #[serde(rename = "defaultValueTime")]
    Time(Time),
    #[serde(rename = "defaultValueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[serde(rename = "defaultValueUri")]
    Uri(Uri),
    #[serde(rename = "defaultValueUrl")]
    Url(Url),
    #[serde(rename = "defaultValueUuid")]
    Uuid(Uuid),
    #[serde(rename = "defaultValueAddress")]
    Address(Address),
    #[serde(rename = "defaultValueAge")]
    Age(Age),
    #[serde(rename = "defaultValueAnnotation")]
    Annotation(Annotation),
    #[serde(rename = "defaultValueAttachment")]
    Attachment(Attachment),
    #[serde(rename = "defaultValueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "defaultValueCoding")]
    Coding(Coding),
    #[serde(rename = "defaultValueContactPoint")]
    ContactPoint(ContactPoint),
    #[serde(rename = "defaultValueCount")]
    Count(Count),
    #[serde(rename = "defaultValueDistance")]
    Distance(Distance),
    #[serde(rename = "defaultValueDuration")]
    Duration(Duration),
    #[serde(rename = "defaultValueHumanName")]
    HumanName(HumanName),
    #[serde(rename = "defaultValueIdentifier")]
    Identifier(Identifier),
    #[serde(rename = "defaultValueMoney")]
    Money(Money),
    #[serde(rename = "defaultValuePeriod")]
    Period(Period),
    #[serde(rename = "defaultValueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "defaultValueRange")]
    Range(Range),
    #[serde(rename = "defaultValueRatio")]
    Ratio(Ratio),
    #[serde(rename = "defaultValueReference")]
    Reference(Reference),
    #[serde(rename = "defaultValueSampledData")]
    SampledData(SampledData),
    #[serde(rename = "defaultValueSignature")]
    Signature(Signature),
    #[serde(rename = "defaultValueTiming")]
    Timing(Timing),
    #[serde(rename = "defaultValueContactDetail")]
    ContactDetail(ContactDetail),
    #[serde(rename = "defaultValueContributor")]
    Contributor(Contributor),
    #[serde(rename = "defaultValueDataRequirement")]
    DataRequirement(DataRequirement),
    #[serde(rename = "defaultValueExpression")]
    Expression(Expression),
    #[serde(rename = "defaultValueParameterDefinition")]
    ParameterDefinition(ParameterDefinition),
    #[serde(rename = "defaultValueRelatedArtifact")]
    RelatedArtifact(RelatedArtifact),
    #[serde(rename = "defaultValueTriggerDefinition")]
    TriggerDefinition(TriggerDefinition),
    #[serde(rename = "defaultValueUsageContext")]
    UsageContext(UsageContext),
    #[serde(rename = "defaultValueDosage")]
    Dosage(Dosage),
    #[serde(rename = "defaultValueMeta")]
    Meta(Meta),
}

impl StructureMapGroupRuleSourceDefaultValue {
    /// Type suffix of the populated member, e.g. `"Base64Binary"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Base64Binary(_) => "Base64Binary",
            Self::Boolean(_) => "Boolean",
            Self::Canonical(_) => "Canonical",
            Self::Code(_) => "Code",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::Decimal(_) => "Decimal",
            Self::Id(_) => "Id",
            Self::Instant(_) => "Instant",
            Self::Integer(_) => "Integer",
            Self::Markdown(_) => "Markdown",
            Self::Oid(_) => "Oid",
            Self::PositiveInt(_) => "PositiveInt",
            Self::String(_) => "String",
            Self::Time(_) => "Time",
            Self::UnsignedInt(_) => "UnsignedInt",
            Self::Uri(_) => "Uri",
            Self::Url(_) => "Url",
            Self::Uuid(_) => "Uuid",
            Self::Address(_) => "Address",
            Self::Age(_) => "Age",
            Self::Annotation(_) => "Annotation",
            Self::Attachment(_) => "Attachment",
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Coding(_) => "Coding",
            Self::ContactPoint(_) => "ContactPoint",
            Self::Count(_) => "Count",
            Self::Distance(_) => "Distance",
            Self::Duration(_) => "Duration",
            Self::HumanName(_) => "HumanName",
            Self::Identifier(_) => "Identifier",
            Self::Money(_) => "Money",
            Self::Period(_) => "Period",
            Self::Quantity(_) => "Quantity",
            Self::Range(_) => "Range",
            Self::Ratio(_) => "Ratio",
            Self::Reference(_) => "Reference",
            Self::SampledData(_) => "SampledData",
            Self::Signature(_) => "Signature",
            Self::Timing(_) => "Timing",
            Self::ContactDetail(_) => "ContactDetail",
            Self::Contributor(_) => "Contributor",
            Self::DataRequirement(_) => "DataRequirement",
            Self::Expression(_) => "Expression",
            Self::ParameterDefinition(_) => "ParameterDefinition",
            Self::RelatedArtifact(_) => "RelatedArtifact",
            Self::TriggerDefinition(_) => "TriggerDefinition",
            Self::UsageContext(_) => "UsageContext",
            Self::Dosage(_) => "Dosage",
            Self::Meta(_) => "Meta",
        }
    }
}

/// Content to create because of this mapping rule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_type: Option<StructureMapContextType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_mode: Option<Vec<StructureMapTargetListMode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<StructureMapTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Vec<StructureMapGroupRuleTargetParameter>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleTargetParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<StructureMapGroupRuleTargetParameterValue>,
}

/// `value[x]` of `StructureMapGroupRuleTargetParameter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructureMapGroupRuleTargetParameterValue {
    #[serde(rename = "valueId")]
    Id(Id),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueInteger")]
    Integer(Integer),
    #[serde(rename = "valueDecimal")]
    Decimal(Decimal),
}

impl StructureMapGroupRuleTargetParameterValue {
    /// Type suffix of the populated member, e.g. `"Id"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Id(_) => "Id",
            Self::String(_) => "String",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
        }
    }
}

/// Structure Definition used by this map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapStructure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: String,
    pub mode: StructureMapModelMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl StructureMapStructure {
    pub fn new(url: String, mode: StructureMapModelMode) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            url,
            mode,
            alias: None,
            documentation: None,
        }
    }
}

impl_shape!(StructureMap, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "url", "identifier", "version", "name", "title", "status", "experimental",
    "date", "publisher", "contact", "description", "useContext", "jurisdiction", "purpose",
    "copyright", "structure", "import", "group",
]);
impl_shape!(StructureMapGroup, BackboneElement, [
    "id", "extension", "modifierExtension", "name", "extends", "typeMode", "documentation", "input",
    "rule",
]);
impl_shape!(StructureMapGroupInput, BackboneElement, [
    "id", "extension", "modifierExtension", "name", "type", "mode", "documentation",
]);
impl_shape!(StructureMapGroupRule, BackboneElement, [
    "id", "extension", "modifierExtension", "name", "source", "target", "rule", "dependent",
    "documentation",
]);
impl_shape!(StructureMapGroupRuleDependent, BackboneElement, [
    "id", "extension", "modifierExtension", "name", "variable",
]);
impl_shape!(StructureMapGroupRuleSource, BackboneElement, [
    "id", "extension", "modifierExtension", "context", "min", "max", "type", "defaultValue[x]",
    "element", "listMode", "variable", "condition", "check", "logMessage",
]);
impl_shape!(StructureMapGroupRuleTarget, BackboneElement, [
    "id", "extension", "modifierExtension", "context", "contextType", "element", "variable",
    "listMode", "listRuleId", "transform", "parameter",
]);
impl_shape!(StructureMapGroupRuleTargetParameter, BackboneElement, [
    "id", "extension", "modifierExtension", "value[x]",
]);
impl_shape!(StructureMapStructure, BackboneElement, [
    "id", "extension", "modifierExtension", "url", "mode", "alias", "documentation",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn copy_rule(name: &str, rules: Vec<StructureMapGroupRule>) -> StructureMapGroupRule {
        let source = StructureMapGroupRuleSource {
            element: Some(name.to_string()),
            variable: Some("v".to_string()),
            ..StructureMapGroupRuleSource::new("src".to_string())
        };
        StructureMapGroupRule {
            rule: (!rules.is_empty()).then_some(rules),
            ..StructureMapGroupRule::new(name.to_string(), vec![source])
        }
    }

    #[test]
    fn test_import_and_extends_keys() {
        let group = StructureMapGroup {
            extends: Some("BaseGroup".to_string()),
            ..StructureMapGroup::new(
                "Main".to_string(),
                StructureMapGroupTypeMode::TypeAndTypes,
                vec![StructureMapGroupInput::new("src".to_string(), StructureMapInputMode::Source)],
                vec![copy_rule("name", vec![])],
            )
        };
        let map = StructureMap {
            import: Some(vec!["http://example.org/fhir/StructureMap/base".to_string()]),
            ..StructureMap::new(
                "http://example.org/fhir/StructureMap/main".to_string(),
                "Main".to_string(),
                PublicationStatus::Draft,
                vec![group],
            )
        };

        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["resourceType"], "StructureMap");
        assert_eq!(value["import"][0], "http://example.org/fhir/StructureMap/base");
        assert_eq!(value["group"][0]["extends"], "BaseGroup");
        assert_eq!(value["group"][0]["typeMode"], "type-and-types");
        assert_eq!(value["group"][0]["input"][0], json!({"name": "src", "mode": "source"}));

        let back: StructureMap = serde_json::from_value(value).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_nested_rules() {
        let rule = copy_rule("outer", vec![copy_rule("middle", vec![copy_rule("inner", vec![])])]);

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["rule"][0]["rule"][0]["name"], "inner");
        assert_eq!(value["rule"][0]["rule"][0]["source"][0]["context"], "src");

        let back: StructureMapGroupRule = serde_json::from_value(value).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_source_default_value() {
        let source: StructureMapGroupRuleSource = serde_json::from_value(json!({
            "context": "src",
            "type": "string",
            "defaultValueString": "unknown",
            "listMode": "first"
        }))
        .unwrap();

        assert_eq!(source.type_.as_deref(), Some("string"));
        assert_eq!(
            source.default_value,
            Some(StructureMapGroupRuleSourceDefaultValue::String("unknown".to_string()))
        );
        assert_eq!(source.list_mode, Some(StructureMapSourceListMode::First));
    }

    #[test]
    fn test_group_requires_rule() {
        let err = serde_json::from_value::<StructureMapGroup>(json!({
            "name": "Main",
            "typeMode": "none",
            "input": [{"name": "src", "mode": "source"}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `rule`"));
    }
}
