//! Choice groups shared across unrelated shapes
//!
//! A FHIR choice element `name[x]` becomes one `Option<Enum>` field that is
//! flattened into its parent: each variant is written under its own prefixed key
//! (`valueBoolean`, `valueQuantity`, ...), so at most one member can ever be set.

use crate::located;
use crate::r4::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactDetail, ContactPoint,
    Contributor, Count, DataRequirement, Distance, Dosage, Duration, Expression, HumanName,
    Identifier, Meta, Money, ParameterDefinition, Period, Quantity, Range, Ratio, Reference,
    RelatedArtifact, SampledData, Signature, Timing, TriggerDefinition, UsageContext,
};
use crate::r4::primitives::{
    Base64Binary, Canonical, Code, Date, DateTime, Decimal, Id, Instant, Integer, Markdown, Oid,
    PositiveInt, Time, UnsignedInt, Uri, Url, Uuid,
};
use serde::{Deserialize, Deserializer, Serialize};

/// serde's `FlatMapDeserializer` fails with "no variant of enum {name} found in
/// flattened data" when none of the enum's keys are present. It has no error
/// kind for this, so the wording is all there is to match on.
const NO_MEMBER_PRESENT: &str = "no variant of enum";

/// Reads an optional, flattened choice group.
///
/// serde reports a flattened enum without any matching key as an error, which for
/// an optional group just means the group is absent. Any other error (a matching
/// key holding the wrong type) is passed on, located under the member's wire name.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match located::deserialize(deserializer) {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.to_string().starts_with(NO_MEMBER_PRESENT) => Ok(None),
        Err(err) => Err(err),
    }
}

/// `subject[x]` of `PlanDefinition`, `PlanDefinitionAction` and `DataRequirement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "subjectReference")]
    Reference(Reference),
}

impl Subject {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Reference(_) => "Reference",
        }
    }
}

/// Value of any FHIR datatype.
///
/// The open `value[x]` used by `Extension`, `TaskInput` and `TaskOutput`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OpenValue {
    #[serde(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueCanonical")]
    Canonical(Canonical),
    #[serde(rename = "valueCode")]
    Code(Code),
    #[serde(rename = "valueDate")]
    Date(Date),
    #[serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[serde(rename = "valueDecimal")]
    Decimal(Decimal),
    #[serde(rename = "valueId")]
    Id(Id),
    #[serde(rename = "valueInstant")]
    Instant(Instant),
    #[serde(rename = "valueInteger")]
    Integer(Integer),
    #[serde(rename = "valueMarkdown")]
    Markdown(Markdown),
    #[serde(rename = "valueOid")]
    Oid(Oid),
    #[serde(rename = "valuePositiveInt")]
    PositiveInt(PositiveInt),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueTime")]
    Time(Time),
    #[serde(rename = "valueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[serde(rename = "valueUri")]
    Uri(Uri),
    #[serde(rename = "valueUrl")]
    Url(Url),
    #[serde(rename = "valueUuid")]
    Uuid(Uuid),
    #[serde(rename = "valueAddress")]
    Address(Address),
    #[serde(rename = "valueAge")]
    Age(Age),
    #[serde(rename = "valueAnnotation")]
    Annotation(Annotation),
    #[serde(rename = "valueAttachment")]
    Attachment(Attachment),
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "valueCoding")]
    Coding(Coding),
    #[serde(rename = "valueContactPoint")]
    ContactPoint(ContactPoint),
    #[serde(rename = "valueCount")]
    Count(Count),
    #[serde(rename = "valueDistance")]
    Distance(Distance),
    #[serde(rename = "valueDuration")]
    Duration(Duration),
    #[serde(rename = "valueHumanName")]
    HumanName(HumanName),
    #[serde(rename = "valueIdentifier")]
    Identifier(Identifier),
    #[serde(rename = "valueMoney")]
    Money(Money),
    #[serde(rename = "valuePeriod")]
    Period(Period),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueRange")]
    Range(Range),
    #[serde(rename = "valueRatio")]
    Ratio(Ratio),
    #[serde(rename = "valueReference")]
    Reference(Reference),
    #[serde(rename = "valueSampledData")]
    SampledData(SampledData),
    #[serde(rename = "valueSignature")]
    Signature(Signature),
    #[serde(rename = "valueTiming")]
    Timing(Timing),
    #[serde(rename = "valueContactDetail")]
    ContactDetail(ContactDetail),
    #[serde(rename = "valueContributor")]
    Contributor(Contributor),
    #[serde(rename = "valueDataRequirement")]
    DataRequirement(DataRequirement),
    #[serde(rename = "valueExpression")]
    Expression(Expression),
    #[serde(rename = "valueParameterDefinition")]
    ParameterDefinition(ParameterDefinition),
    #[serde(rename = "valueRelatedArtifact")]
    RelatedArtifact(RelatedArtifact),
    #[serde(rename = "valueTriggerDefinition")]
    TriggerDefinition(TriggerDefinition),
    #[serde(rename = "valueUsageContext")]
    UsageContext(UsageContext),
    #[serde(rename = "valueDosage")]
    Dosage(Dosage),
    #[serde(rename = "valueMeta")]
    Meta(Meta),
}

impl OpenValue {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        name: String,
        #[serde(flatten, deserialize_with = "optional")]
        subject: Option<Subject>,
    }

    #[test]
    fn test_absent_group_is_none() {
        let holder: Holder = serde_json::from_value(json!({"name": "a", "other": 1})).unwrap();
        assert_eq!(holder.subject, None);
        assert_eq!(serde_json::to_value(&holder).unwrap(), json!({"name": "a"}));
    }

    #[test]
    fn test_present_group() {
        let holder: Holder = serde_json::from_value(json!({
            "name": "a",
            "subjectReference": {"reference": "Group/1"}
        }))
        .unwrap();
        assert_eq!(holder.subject.as_ref().map(Subject::type_suffix), Some("Reference"));
    }

    #[test]
    fn test_mistyped_member_is_an_error() {
        let err = serde_json::from_value::<Holder>(json!({
            "name": "a",
            "subjectReference": "Group/1"
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("at `subjectReference`: invalid type"));
    }

    #[test]
    fn test_mistyped_nested_member_is_located() {
        let err = serde_json::from_value::<Holder>(json!({
            "name": "a",
            "subjectCodeableConcept": {"coding": [{"code": "a"}, {"code": 7}]}
        }))
        .unwrap_err();
        assert!(
            err.to_string().starts_with("at `subjectCodeableConcept.coding[1].code`: invalid type"),
            "{err}"
        );
    }

    #[derive(Debug, Deserialize)]
    struct Required {
        #[serde(flatten)]
        #[allow(dead_code)]
        subject: Subject,
    }

    #[test]
    fn test_serde_wording_for_absent_group() {
        let err = serde_json::from_value::<Required>(json!({"name": "a"})).unwrap_err();
        assert!(err.to_string().starts_with(NO_MEMBER_PRESENT), "{err}");
    }

    #[test]
    fn test_open_value_suffix() {
        let value: OpenValue = serde_json::from_value(json!({"valueUnsignedInt": 7})).unwrap();
        assert_eq!(value, OpenValue::UnsignedInt(7));
        assert_eq!(value.type_suffix(), "UnsignedInt");
    }
}
