//! FHIR Task resource

use crate::r4::choice::{self, OpenValue};
use crate::r4::codes::{RequestPriority, TaskStatus};
use crate::r4::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::r4::primitives::{Canonical, Code, DateTime, Id, PositiveInt, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR Task resource
///
/// A task to be performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<Task>,
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
    pub identifier: Option<Vec<Identifier>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub instantiates: Option<TaskInstantiates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_status: Option<CodeableConcept>,
    /// Request intent; a code from the RequestIntent value set
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Reference>,
    /// Beneficiary of the Task (`for` on the wire)
    #[serde(rename = "for", skip_serializing_if = "Option::is_none")]
    pub for_: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer_type: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_history: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<TaskRestriction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<TaskInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<TaskOutput>>,
}

impl Task {
    pub fn new(status: TaskStatus, intent: String) -> Self {
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
            identifier: None,
            instantiates: None,
            based_on: None,
            group_identifier: None,
            part_of: None,
            status,
            status_reason: None,
            business_status: None,
            intent,
            priority: None,
            code: None,
            description: None,
            focus: None,
            for_: None,
            encounter: None,
            execution_period: None,
            authored_on: None,
            last_modified: None,
            requester: None,
            performer_type: None,
            owner: None,
            location: None,
            reason_code: None,
            reason_reference: None,
            insurance: None,
            note: None,
            relevant_history: None,
            restriction: None,
            input: None,
            output: None,
        }
    }
}

/// `instantiates[x]` of `Task`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskInstantiates {
    #[serde(rename = "instantiatesCanonical")]
    Canonical(Canonical),
    #[serde(rename = "instantiatesUri")]
    Uri(Uri),
}

impl TaskInstantiates {
    /// Type suffix of the populated member, e.g. `"Canonical"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Canonical(_) => "Canonical",
            Self::Uri(_) => "Uri",
        }
    }
}

/// Information used to perform task
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<OpenValue>,
}

impl TaskInput {
    pub fn new(type_: CodeableConcept) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }
}

/// Information produced as part of task
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<OpenValue>,
}

impl TaskOutput {
    pub fn new(type_: CodeableConcept) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }
}

/// Constraints on fulfillment tasks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRestriction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Vec<Reference>>,
}

impl_shape!(Task, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "identifier", "instantiates[x]", "basedOn", "groupIdentifier", "partOf",
    "status", "statusReason", "businessStatus", "intent", "priority", "code", "description",
    "focus", "for", "encounter", "executionPeriod", "authoredOn", "lastModified", "requester",
    "performerType", "owner", "location", "reasonCode", "reasonReference", "insurance", "note",
    "relevantHistory", "restriction", "input", "output",
]);
impl_shape!(TaskInput, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "value[x]",
]);
impl_shape!(TaskOutput, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "value[x]",
]);
impl_shape!(TaskRestriction, BackboneElement, [
    "id", "extension", "modifierExtension", "repetitions", "period", "recipient",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn concept(text: &str) -> CodeableConcept {
        CodeableConcept {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_for_key() {
        let task = Task {
            for_: Some(Reference {
                reference: Some("Patient/example".to_string()),
                ..Default::default()
            }),
            ..Task::new(TaskStatus::Requested, "order".to_string())
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "resourceType": "Task",
                "status": "requested",
                "intent": "order",
                "for": {"reference": "Patient/example"}
            })
        );

        let back: Task = serde_json::from_value(value).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_open_value_inputs() {
        let task: Task = serde_json::from_value(json!({
            "resourceType": "Task",
            "status": "in-progress",
            "intent": "plan",
            "instantiatesCanonical": "http://example.org/fhir/ActivityDefinition/lab",
            "input": [
                {"type": {"text": "fasting"}, "valueBoolean": true},
                {"type": {"text": "weight"}, "valueQuantity": {"value": 72.5, "unit": "kg"}}
            ],
            "output": [{"type": {"text": "result"}, "valueString": "negative"}]
        }))
        .unwrap();

        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(matches!(task.instantiates, Some(TaskInstantiates::Canonical(_))));

        let input = task.input.as_ref().unwrap();
        assert_eq!(input[0].value, Some(OpenValue::Boolean(true)));
        assert_eq!(input[1].value.as_ref().map(|v| v.type_suffix()), Some("Quantity"));

        let output = &task.output.as_ref().unwrap()[0];
        assert_eq!(output.type_, concept("result"));
        assert_eq!(output.value, Some(OpenValue::String("negative".to_string())));
    }

    #[test]
    fn test_input_without_value() {
        let input = TaskInput::new(concept("note"));
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({"type": {"text": "note"}}));
    }
}
