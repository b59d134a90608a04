//! FHIR PlanDefinition resource
//!
//! Actions nest through `PlanDefinitionAction.action`.

use crate::r4::choice::{self, Subject};
use crate::r4::codes::{
    ActionCardinalityBehavior, ActionConditionKind, ActionGroupingBehavior, ActionParticipantType,
    ActionPrecheckBehavior, ActionRelationshipType, ActionRequiredBehavior, ActionSelectionBehavior,
    PublicationStatus, RequestPriority,
};
use crate::r4::datatypes::{
    Age, CodeableConcept, ContactDetail, DataRequirement, Duration, Expression, Extension,
    Identifier, Meta, Narrative, Period, Quantity, Range, RelatedArtifact, Timing,
    TriggerDefinition, UsageContext,
};
use crate::r4::primitives::{Canonical, Code, Date, DateTime, Id, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR PlanDefinition resource
///
/// A pre-defined group of actions to be taken in particular circumstances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<PlanDefinition>,
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
    pub subtitle: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    pub status: PublicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub subject: Option<Subject>,
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
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<ContactDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<Vec<ContactDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<Vec<ContactDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endorser: Option<Vec<ContactDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Vec<PlanDefinitionGoal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<PlanDefinitionAction>>,
}

impl PlanDefinition {
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
            subtitle: None,
            type_: None,
            status,
            experimental: None,
            subject: None,
            date: None,
            publisher: None,
            contact: None,
            description: None,
            use_context: None,
            jurisdiction: None,
            purpose: None,
            usage: None,
            copyright: None,
            approval_date: None,
            last_review_date: None,
            effective_period: None,
            topic: None,
            author: None,
            editor: None,
            reviewer: None,
            endorser: None,
            related_artifact: None,
            library: None,
            goal: None,
            action: None,
        }
    }
}

/// Action defined by the plan
///
/// Actions may contain nested actions, to any depth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_equivalent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<RelatedArtifact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Vec<String>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub subject: Option<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Vec<TriggerDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<PlanDefinitionActionCondition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<DataRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<DataRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_action: Option<Vec<PlanDefinitionActionRelatedAction>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub timing: Option<PlanDefinitionActionTiming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<PlanDefinitionActionParticipant>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping_behavior: Option<ActionGroupingBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_behavior: Option<ActionSelectionBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_behavior: Option<ActionRequiredBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precheck_behavior: Option<ActionPrecheckBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality_behavior: Option<ActionCardinalityBehavior>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub definition: Option<PlanDefinitionActionDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_value: Option<Vec<PlanDefinitionActionDynamicValue>>,
    /// A sub-action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<PlanDefinitionAction>>,
}

/// `timing[x]` of `PlanDefinitionAction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanDefinitionActionTiming {
    #[serde(rename = "timingDateTime")]
    DateTime(DateTime),
    #[serde(rename = "timingAge")]
    Age(Age),
    #[serde(rename = "timingPeriod")]
    Period(Period),
    #[serde(rename = "timingDuration")]
    Duration(Duration),
    #[serde(rename = "timingRange")]
    Range(Range),
    #[serde(rename = "timingTiming")]
    Timing(Timing),
}

impl PlanDefinitionActionTiming {
    /// Type suffix of the populated member, e.g. `"DateTime"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::DateTime(_) => "DateTime",
            Self::Age(_) => "Age",
            Self::Period(_) => "Period",
            Self::Duration(_) => "Duration",
            Self::Range(_) => "Range",
            Self::Timing(_) => "Timing",
        }
    }
}

/// `definition[x]` of `PlanDefinitionAction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanDefinitionActionDefinition {
    #[serde(rename = "definitionCanonical")]
    Canonical(Canonical),
    #[serde(rename = "definitionUri")]
    Uri(Uri),
}

impl PlanDefinitionActionDefinition {
    /// Type suffix of the populated member, e.g. `"Canonical"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Canonical(_) => "Canonical",
            Self::Uri(_) => "Uri",
        }
    }
}

/// Whether or not the action is applicable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub kind: ActionConditionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

impl PlanDefinitionActionCondition {
    pub fn new(kind: ActionConditionKind) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            kind,
            expression: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionDynamicValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionParticipant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: ActionParticipantType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,
}

impl PlanDefinitionActionParticipant {
    pub fn new(type_: ActionParticipantType) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            type_,
            role: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionRelatedAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub action_id: String,
    pub relationship: ActionRelationshipType,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub offset: Option<PlanDefinitionActionRelatedActionOffset>,
}

impl PlanDefinitionActionRelatedAction {
    pub fn new(action_id: String, relationship: ActionRelationshipType) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            action_id,
            relationship,
            offset: None,
        }
    }
}

/// `offset[x]` of `PlanDefinitionActionRelatedAction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanDefinitionActionRelatedActionOffset {
    #[serde(rename = "offsetDuration")]
    Duration(Duration),
    #[serde(rename = "offsetRange")]
    Range(Range),
}

impl PlanDefinitionActionRelatedActionOffset {
    /// Type suffix of the populated member, e.g. `"Duration"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Duration(_) => "Duration",
            Self::Range(_) => "Range",
        }
    }
}

/// What the plan is trying to accomplish
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,
    pub description: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<RelatedArtifact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<PlanDefinitionGoalTarget>>,
}

impl PlanDefinitionGoal {
    pub fn new(description: CodeableConcept) -> Self {
        Self {
            description,
            ..Default::default()
        }
    }
}

/// Target outcome for the goal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionGoalTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<CodeableConcept>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub detail: Option<PlanDefinitionGoalTargetDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<Duration>,
}

/// `detail[x]` of `PlanDefinitionGoalTarget`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanDefinitionGoalTargetDetail {
    #[serde(rename = "detailQuantity")]
    Quantity(Quantity),
    #[serde(rename = "detailRange")]
    Range(Range),
    #[serde(rename = "detailCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

impl PlanDefinitionGoalTargetDetail {
    /// Type suffix of the populated member, e.g. `"Quantity"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Quantity(_) => "Quantity",
            Self::Range(_) => "Range",
            Self::CodeableConcept(_) => "CodeableConcept",
        }
    }
}

impl_shape!(PlanDefinition, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "url", "identifier", "version", "name", "title", "subtitle", "type",
    "status", "experimental", "subject[x]", "date", "publisher", "contact", "description",
    "useContext", "jurisdiction", "purpose", "usage", "copyright", "approvalDate", "lastReviewDate",
    "effectivePeriod", "topic", "author", "editor", "reviewer", "endorser", "relatedArtifact",
    "library", "goal", "action",
]);
impl_shape!(PlanDefinitionAction, BackboneElement, [
    "id", "extension", "modifierExtension", "prefix", "title", "description", "textEquivalent",
    "priority", "code", "reason", "documentation", "goalId", "subject[x]", "trigger", "condition",
    "input", "output", "relatedAction", "timing[x]", "participant", "type", "groupingBehavior",
    "selectionBehavior", "requiredBehavior", "precheckBehavior", "cardinalityBehavior",
    "definition[x]", "transform", "dynamicValue", "action",
]);
impl_shape!(PlanDefinitionActionCondition, BackboneElement, [
    "id", "extension", "modifierExtension", "kind", "expression",
]);
impl_shape!(PlanDefinitionActionDynamicValue, BackboneElement, [
    "id", "extension", "modifierExtension", "path", "expression",
]);
impl_shape!(PlanDefinitionActionParticipant, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "role",
]);
impl_shape!(PlanDefinitionActionRelatedAction, BackboneElement, [
    "id", "extension", "modifierExtension", "actionId", "relationship", "offset[x]",
]);
impl_shape!(PlanDefinitionGoal, BackboneElement, [
    "id", "extension", "modifierExtension", "category", "description", "priority", "start",
    "addresses", "documentation", "target",
]);
impl_shape!(PlanDefinitionGoalTarget, BackboneElement, [
    "id", "extension", "modifierExtension", "measure", "detail[x]", "due",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::Reference;
    use serde_json::json;

    #[test]
    fn test_nested_actions() {
        let json = json!({
            "resourceType": "PlanDefinition",
            "status": "draft",
            "subjectCodeableConcept": {
                "coding": [{"system": "http://hl7.org/fhir/resource-types", "code": "Patient"}]
            },
            "action": [{
                "title": "Screening",
                "action": [{
                    "title": "Questionnaire",
                    "definitionCanonical": "http://example.org/fhir/Questionnaire/phq-9",
                    "action": [{
                        "title": "Follow up",
                        "timingDuration": {"value": 2.5, "unit": "wk"}
                    }]
                }]
            }]
        });

        let plan: PlanDefinition = serde_json::from_value(json.clone()).unwrap();
        assert!(matches!(plan.subject, Some(Subject::CodeableConcept(_))));

        let screening = &plan.action.as_ref().unwrap()[0];
        assert_eq!(screening.title.as_deref(), Some("Screening"));
        assert_eq!(screening.definition, None);

        let questionnaire = &screening.action.as_ref().unwrap()[0];
        assert_eq!(
            questionnaire.definition.as_ref().map(|d| d.type_suffix()),
            Some("Canonical")
        );

        let follow_up = &questionnaire.action.as_ref().unwrap()[0];
        assert_eq!(follow_up.timing.as_ref().map(|t| t.type_suffix()), Some("Duration"));

        assert_eq!(serde_json::to_value(&plan).unwrap(), json);
    }

    #[test]
    fn test_subject_reference() {
        let action = PlanDefinitionAction {
            subject: Some(Subject::Reference(Reference {
                reference: Some("Group/cohort".to_string()),
                ..Default::default()
            })),
            ..Default::default()
        };

        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({"subjectReference": {"reference": "Group/cohort"}}));
    }

    #[test]
    fn test_related_action_offset() {
        let related: PlanDefinitionActionRelatedAction = serde_json::from_value(json!({
            "actionId": "screening",
            "relationship": "after-end",
            "offsetDuration": {"value": 1, "unit": "d"}
        }))
        .unwrap();

        assert_eq!(related.relationship, ActionRelationshipType::AfterEnd);
        assert!(matches!(
            related.offset,
            Some(PlanDefinitionActionRelatedActionOffset::Duration(_))
        ));
    }
}
