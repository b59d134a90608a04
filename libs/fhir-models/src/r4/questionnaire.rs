//! FHIR Questionnaire resource
//!
//! Items nest through `QuestionnaireItem.item`.

use crate::r4::choice;
use crate::r4::codes::{
    EnableWhenBehavior, PublicationStatus, QuestionnaireItemOperator, QuestionnaireItemType,
    ResourceType,
};
use crate::r4::datatypes::{
    Attachment, CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative,
    Period, Quantity, Reference, UsageContext,
};
use crate::r4::primitives::{Code, Date, DateTime, Decimal, Id, Integer, Time, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR Questionnaire resource
///
/// A structured set of questions intended to guide the collection of answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<Questionnaire>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<Vec<String>>,
    pub status: PublicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    /// Resource that can be subject of QuestionnaireResponse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<Vec<ResourceType>>,
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
    pub approval_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Coding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<QuestionnaireItem>>,
}

impl Questionnaire {
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
            derived_from: None,
            status,
            experimental: None,
            subject_type: None,
            date: None,
            publisher: None,
            contact: None,
            description: None,
            use_context: None,
            jurisdiction: None,
            purpose: None,
            copyright: None,
            approval_date: None,
            last_review_date: None,
            effective_period: None,
            code: None,
            item: None,
        }
    }
}

/// Questions and sections within the Questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Unique id for item in questionnaire
    pub link_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Coding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub type_: QuestionnaireItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_when: Option<Vec<QuestionnaireItemEnableWhen>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_behavior: Option<EnableWhenBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeats: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_value_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_option: Option<Vec<QuestionnaireItemAnswerOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<Vec<QuestionnaireItemInitial>>,
    /// Nested questionnaire items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<QuestionnaireItem>>,
}

impl QuestionnaireItem {
    pub fn new(link_id: String, type_: QuestionnaireItemType) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            link_id,
            definition: None,
            code: None,
            prefix: None,
            text: None,
            type_,
            enable_when: None,
            enable_behavior: None,
            required: None,
            repeats: None,
            read_only: None,
            max_length: None,
            answer_value_set: None,
            answer_option: None,
            initial: None,
            item: None,
        }
    }
}

/// Permitted answer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItemAnswerOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<QuestionnaireItemAnswerOptionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_selected: Option<bool>,
}

/// `value[x]` of `QuestionnaireItemAnswerOption`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionnaireItemAnswerOptionValue {
    #[serde(rename = "valueInteger")]
    Integer(Integer),
    #[serde(rename = "valueDate")]
    Date(Date),
    #[serde(rename = "valueTime")]
    Time(Time),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueCoding")]
    Coding(Coding),
    #[serde(rename = "valueReference")]
    Reference(Reference),
}

impl QuestionnaireItemAnswerOptionValue {
    /// Type suffix of the populated member, e.g. `"Integer"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::String(_) => "String",
            Self::Coding(_) => "Coding",
            Self::Reference(_) => "Reference",
        }
    }
}

/// Only allow data when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItemEnableWhen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub question: String,
    pub operator: QuestionnaireItemOperator,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub answer: Option<QuestionnaireItemEnableWhenAnswer>,
}

impl QuestionnaireItemEnableWhen {
    pub fn new(question: String, operator: QuestionnaireItemOperator) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            question,
            operator,
            answer: None,
        }
    }
}

/// `answer[x]` of `QuestionnaireItemEnableWhen`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionnaireItemEnableWhenAnswer {
    #[serde(rename = "answerBoolean")]
    Boolean(bool),
    #[serde(rename = "answerDecimal")]
    Decimal(Decimal),
    #[serde(rename = "answerInteger")]
    Integer(Integer),
    #[serde(rename = "answerDate")]
    Date(Date),
    #[serde(rename = "answerDateTime")]
    DateTime(DateTime),
    #[serde(rename = "answerTime")]
    Time(Time),
    #[serde(rename = "answerString")]
    String(String),
    #[serde(rename = "answerCoding")]
    Coding(Coding),
    #[serde(rename = "answerQuantity")]
    Quantity(Quantity),
    #[serde(rename = "answerReference")]
    Reference(Reference),
}

impl QuestionnaireItemEnableWhenAnswer {
    /// Type suffix of the populated member, e.g. `"Boolean"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Decimal(_) => "Decimal",
            Self::Integer(_) => "Integer",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::Time(_) => "Time",
            Self::String(_) => "String",
            Self::Coding(_) => "Coding",
            Self::Quantity(_) => "Quantity",
            Self::Reference(_) => "Reference",
        }
    }
}

/// Initial value(s) when item is first rendered
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItemInitial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<QuestionnaireItemInitialValue>,
}

/// `value[x]` of `QuestionnaireItemInitial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionnaireItemInitialValue {
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueDecimal")]
    Decimal(Decimal),
    #[serde(rename = "valueInteger")]
    Integer(Integer),
    #[serde(rename = "valueDate")]
    Date(Date),
    #[serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[serde(rename = "valueTime")]
    Time(Time),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueUri")]
    Uri(Uri),
    #[serde(rename = "valueAttachment")]
    Attachment(Attachment),
    #[serde(rename = "valueCoding")]
    Coding(Coding),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueReference")]
    Reference(Reference),
}

impl QuestionnaireItemInitialValue {
    /// Type suffix of the populated member, e.g. `"Boolean"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Decimal(_) => "Decimal",
            Self::Integer(_) => "Integer",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::Time(_) => "Time",
            Self::String(_) => "String",
            Self::Uri(_) => "Uri",
            Self::Attachment(_) => "Attachment",
            Self::Coding(_) => "Coding",
            Self::Quantity(_) => "Quantity",
            Self::Reference(_) => "Reference",
        }
    }
}

impl_shape!(Questionnaire, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "url", "identifier", "version", "name", "title", "derivedFrom", "status",
    "experimental", "subjectType", "date", "publisher", "contact", "description", "useContext",
    "jurisdiction", "purpose", "copyright", "approvalDate", "lastReviewDate", "effectivePeriod",
    "code", "item",
]);
impl_shape!(QuestionnaireItem, BackboneElement, [
    "id", "extension", "modifierExtension", "linkId", "definition", "code", "prefix", "text",
    "type", "enableWhen", "enableBehavior", "required", "repeats", "readOnly", "maxLength",
    "answerValueSet", "answerOption", "initial", "item",
]);
impl_shape!(QuestionnaireItemAnswerOption, BackboneElement, [
    "id", "extension", "modifierExtension", "value[x]", "initialSelected",
]);
impl_shape!(QuestionnaireItemEnableWhen, BackboneElement, [
    "id", "extension", "modifierExtension", "question", "operator", "answer[x]",
]);
impl_shape!(QuestionnaireItemInitial, BackboneElement, [
    "id", "extension", "modifierExtension", "value[x]",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_items() {
        let json = json!({
            "resourceType": "Questionnaire",
            "status": "active",
            "subjectType": ["Patient"],
            "item": [{
                "linkId": "1",
                "type": "group",
                "item": [{
                    "linkId": "1.1",
                    "type": "group",
                    "item": [{
                        "linkId": "1.1.1",
                        "text": "Smoker?",
                        "type": "boolean"
                    }]
                }]
            }]
        });

        let q: Questionnaire = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(q.subject_type, Some(vec![ResourceType::Patient]));

        let group = &q.item.as_ref().unwrap()[0];
        let leaf = &group.item.as_ref().unwrap()[0].item.as_ref().unwrap()[0];
        assert_eq!(leaf.link_id, "1.1.1");
        assert_eq!(leaf.type_, QuestionnaireItemType::Boolean);

        assert_eq!(serde_json::to_value(&q).unwrap(), json);
    }

    #[test]
    fn test_enable_when_answer() {
        let condition = QuestionnaireItemEnableWhen {
            answer: Some(QuestionnaireItemEnableWhenAnswer::Boolean(true)),
            ..QuestionnaireItemEnableWhen::new(
                "1.1.1".to_string(),
                QuestionnaireItemOperator::Equal,
            )
        };
        let item = QuestionnaireItem {
            enable_when: Some(vec![condition]),
            ..QuestionnaireItem::new("2".to_string(), QuestionnaireItemType::Integer)
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "linkId": "2",
                "type": "integer",
                "enableWhen": [{"question": "1.1.1", "operator": "=", "answerBoolean": true}]
            })
        );

        let back: QuestionnaireItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_answer_option_coding() {
        let option: QuestionnaireItemAnswerOption = serde_json::from_value(json!({
            "valueCoding": {"system": "http://loinc.org", "code": "LA33-6"},
            "initialSelected": true
        }))
        .unwrap();

        match option.value {
            Some(QuestionnaireItemAnswerOptionValue::Coding(ref coding)) => {
                assert_eq!(coding.code.as_deref(), Some("LA33-6"));
            }
            ref other => panic!("unexpected answer option value: {other:?}"),
        }
        assert_eq!(option.initial_selected, Some(true));
    }

    #[test]
    fn test_item_requires_type() {
        let err = serde_json::from_value::<QuestionnaireItem>(json!({"linkId": "1"}))
            .unwrap_err();
        assert!(err.to_string().contains("missing field `type`"));
    }
}
