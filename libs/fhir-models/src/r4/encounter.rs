//! FHIR Encounter resource
//!
//! Note the `class` wire key on `Encounter` and `EncounterClassHistory`.

use crate::r4::codes::{EncounterLocationStatus, EncounterStatus};
use crate::r4::datatypes::{
    CodeableConcept, Coding, Duration, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::r4::primitives::{Code, Id, PositiveInt, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR Encounter resource
///
/// An interaction between a patient and healthcare provider(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<Encounter>,
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
    pub status: EncounterStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_history: Option<Vec<EncounterStatusHistory>>,
    /// Classification of patient encounter (`class` on the wire)
    pub class: Coding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_history: Option<Vec<EncounterClassHistory>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_of_care: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<EncounterParticipant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<EncounterDiagnosis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<EncounterHospitalization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<EncounterLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,
}

impl Encounter {
    pub fn new(status: EncounterStatus, class: Coding) -> Self {
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
            status,
            status_history: None,
            class,
            class_history: None,
            type_: None,
            service_type: None,
            priority: None,
            subject: None,
            episode_of_care: None,
            based_on: None,
            participant: None,
            appointment: None,
            period: None,
            length: None,
            reason_code: None,
            reason_reference: None,
            diagnosis: None,
            account: None,
            hospitalization: None,
            location: None,
            service_provider: None,
            part_of: None,
        }
    }
}

/// List of past encounter classes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterClassHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub class: Coding,
    pub period: Period,
}

impl EncounterClassHistory {
    pub fn new(class: Coding, period: Period) -> Self {
        Self {
            class,
            period,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterDiagnosis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub condition: Reference,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<PositiveInt>,
}

impl EncounterDiagnosis {
    pub fn new(condition: Reference) -> Self {
        Self {
            condition,
            ..Default::default()
        }
    }
}

/// Details about the admission to a healthcare service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterHospitalization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_admission_identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admit_source: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_admission: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_courtesy: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_arrangement: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_disposition: Option<CodeableConcept>,
}

/// List of locations where the patient has been
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub location: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EncounterLocationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl EncounterLocation {
    pub fn new(location: Reference) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterParticipant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<Reference>,
}

/// List of past encounter statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterStatusHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub status: EncounterStatus,
    pub period: Period,
}

impl EncounterStatusHistory {
    pub fn new(status: EncounterStatus, period: Period) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            status,
            period,
        }
    }
}

impl_shape!(Encounter, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "identifier", "status", "statusHistory", "class", "classHistory", "type",
    "serviceType", "priority", "subject", "episodeOfCare", "basedOn", "participant", "appointment",
    "period", "length", "reasonCode", "reasonReference", "diagnosis", "account", "hospitalization",
    "location", "serviceProvider", "partOf",
]);
impl_shape!(EncounterClassHistory, BackboneElement, [
    "id", "extension", "modifierExtension", "class", "period",
]);
impl_shape!(EncounterDiagnosis, BackboneElement, [
    "id", "extension", "modifierExtension", "condition", "use", "rank",
]);
impl_shape!(EncounterHospitalization, BackboneElement, [
    "id", "extension", "modifierExtension", "preAdmissionIdentifier", "origin", "admitSource",
    "reAdmission", "dietPreference", "specialCourtesy", "specialArrangement", "destination",
    "dischargeDisposition",
]);
impl_shape!(EncounterLocation, BackboneElement, [
    "id", "extension", "modifierExtension", "location", "status", "physicalType", "period",
]);
impl_shape!(EncounterParticipant, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "period", "individual",
]);
impl_shape!(EncounterStatusHistory, BackboneElement, [
    "id", "extension", "modifierExtension", "status", "period",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ambulatory() -> Coding {
        Coding {
            system: Some("http://terminology.hl7.org/CodeSystem/v3-ActCode".to_string()),
            code: Some("AMB".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_class_key() {
        let encounter = Encounter {
            class_history: Some(vec![EncounterClassHistory::new(
                ambulatory(),
                Period {
                    start: Some("2024-03-01".to_string()),
                    ..Default::default()
                },
            )]),
            ..Encounter::new(EncounterStatus::Finished, ambulatory())
        };

        let value = serde_json::to_value(&encounter).unwrap();
        assert_eq!(value["class"]["code"], "AMB");
        assert_eq!(value["classHistory"][0]["class"]["code"], "AMB");
        assert_eq!(value["classHistory"][0]["period"], json!({"start": "2024-03-01"}));

        let back: Encounter = serde_json::from_value(value).unwrap();
        assert_eq!(back, encounter);
    }

    #[test]
    fn test_encounter_requires_class() {
        let err = serde_json::from_value::<Encounter>(json!({
            "resourceType": "Encounter",
            "status": "planned"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `class`"));
    }

    #[test]
    fn test_wrong_resource_type() {
        let err = serde_json::from_value::<Encounter>(json!({
            "resourceType": "Task",
            "status": "planned",
            "class": {"code": "AMB"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("resourceType `Task` does not match `Encounter`"));
    }
}
