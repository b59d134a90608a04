//! Metadata datatypes used by knowledge artifacts

use crate::r4::choice::{self, Subject};
use crate::r4::codes::{
    ContributorType, OperationParameterUse, RelatedArtifactType, SortDirection, TriggerType,
};
use crate::r4::datatypes::{
    Attachment, CodeableConcept, Coding, ContactPoint, Duration, Extension, Period, Quantity, Range,
    Reference, Timing,
};
use crate::r4::primitives::{Date, DateTime, Integer, PositiveInt};
use crate::shape::impl_shape;
use serde::{Deserialize, Serialize};

/// Contact information
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: ContributorType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,
}

impl Contributor {
    pub fn new(type_: ContributorType, name: String) -> Self {
        Self {
            id: None,
            extension: None,
            type_,
            name,
            contact: None,
        }
    }
}

/// Describes a required data item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<String>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub subject: Option<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_support: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_filter: Option<Vec<DataRequirementCodeFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<Vec<DataRequirementDateFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<DataRequirementSort>>,
}

impl DataRequirement {
    pub fn new(type_: String) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementCodeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Coding>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementDateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_param: Option<String>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<DataRequirementDateFilterValue>,
}

/// `value[x]` of `DataRequirementDateFilter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataRequirementDateFilterValue {
    #[serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[serde(rename = "valuePeriod")]
    Period(Period),
    #[serde(rename = "valueDuration")]
    Duration(Duration),
}

impl DataRequirementDateFilterValue {
    /// Type suffix of the populated member, e.g. `"DateTime"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::DateTime(_) => "DateTime",
            Self::Period(_) => "Period",
            Self::Duration(_) => "Duration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementSort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    pub path: String,
    pub direction: SortDirection,
}

impl DataRequirementSort {
    pub fn new(path: String, direction: SortDirection) -> Self {
        Self {
            id: None,
            extension: None,
            path,
            direction,
        }
    }
}

/// An expression that can be used to generate a value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Expression {
    pub fn new(language: String) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }
}

/// Definition of a parameter to a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "use")]
    pub use_: OperationParameterUse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl ParameterDefinition {
    pub fn new(use_: OperationParameterUse, type_: String) -> Self {
        Self {
            id: None,
            extension: None,
            name: None,
            use_,
            min: None,
            max: None,
            documentation: None,
            type_,
            profile: None,
        }
    }
}

/// Related artifacts for a knowledge resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArtifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: RelatedArtifactType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl RelatedArtifact {
    pub fn new(type_: RelatedArtifactType) -> Self {
        Self {
            id: None,
            extension: None,
            type_,
            label: None,
            display: None,
            citation: None,
            url: None,
            document: None,
            resource: None,
        }
    }
}

/// Defines an expected trigger for a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: TriggerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub timing: Option<TriggerDefinitionTiming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<DataRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expression>,
}

impl TriggerDefinition {
    pub fn new(type_: TriggerType) -> Self {
        Self {
            id: None,
            extension: None,
            type_,
            name: None,
            timing: None,
            data: None,
            condition: None,
        }
    }
}

/// `timing[x]` of `TriggerDefinition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TriggerDefinitionTiming {
    #[serde(rename = "timingTiming")]
    Timing(Timing),
    #[serde(rename = "timingReference")]
    Reference(Reference),
    #[serde(rename = "timingDate")]
    Date(Date),
    #[serde(rename = "timingDateTime")]
    DateTime(DateTime),
}

impl TriggerDefinitionTiming {
    /// Type suffix of the populated member, e.g. `"Timing"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Timing(_) => "Timing",
            Self::Reference(_) => "Reference",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
        }
    }
}

/// Describes the context of use for a conformance or knowledge resource
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    pub code: Coding,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<UsageContextValue>,
}

impl UsageContext {
    pub fn new(code: Coding) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }
}

/// `value[x]` of `UsageContext`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UsageContextValue {
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueRange")]
    Range(Range),
    #[serde(rename = "valueReference")]
    Reference(Reference),
}

impl UsageContextValue {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Quantity(_) => "Quantity",
            Self::Range(_) => "Range",
            Self::Reference(_) => "Reference",
        }
    }
}

impl_shape!(ContactDetail, ComplexType, ["id", "extension", "name", "telecom"]);
impl_shape!(Contributor, ComplexType, ["id", "extension", "type", "name", "contact"]);
impl_shape!(DataRequirement, ComplexType, [
    "id", "extension", "type", "profile", "subject[x]", "mustSupport", "codeFilter", "dateFilter",
    "limit", "sort",
]);
impl_shape!(DataRequirementCodeFilter, BackboneElement, [
    "id", "extension", "path", "searchParam", "valueSet", "code",
]);
impl_shape!(DataRequirementDateFilter, BackboneElement, [
    "id", "extension", "path", "searchParam", "value[x]",
]);
impl_shape!(DataRequirementSort, BackboneElement, ["id", "extension", "path", "direction"]);
impl_shape!(Expression, ComplexType, [
    "id", "extension", "description", "name", "language", "expression", "reference",
]);
impl_shape!(ParameterDefinition, ComplexType, [
    "id", "extension", "name", "use", "min", "max", "documentation", "type", "profile",
]);
impl_shape!(RelatedArtifact, ComplexType, [
    "id", "extension", "type", "label", "display", "citation", "url", "document", "resource",
]);
impl_shape!(TriggerDefinition, ComplexType, [
    "id", "extension", "type", "name", "timing[x]", "data", "condition",
]);
impl_shape!(UsageContext, ComplexType, ["id", "extension", "code", "value[x]"]);
