//! FHIR MedicationKnowledge resource

use crate::r4::choice;
use crate::r4::codes::MedicationKnowledgeStatusCodes;
use crate::r4::datatypes::{
    CodeableConcept, Dosage, Duration, Extension, Meta, Money, Narrative, Quantity, Ratio,
    Reference,
};
use crate::r4::primitives::{Base64Binary, Code, Id, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR MedicationKnowledge resource
///
/// Information about a medication that is used to support knowledge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledge {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<MedicationKnowledge>,
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
    pub code: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicationKnowledgeStatusCodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_form: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonym: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_medication_knowledge: Option<Vec<MedicationKnowledgeRelatedMedicationKnowledge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_medication: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monograph: Option<Vec<MedicationKnowledgeMonograph>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<Vec<MedicationKnowledgeIngredient>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_route: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Vec<MedicationKnowledgeCost>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_program: Option<Vec<MedicationKnowledgeMonitoringProgram>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administration_guidelines: Option<Vec<MedicationKnowledgeAdministrationGuidelines>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medicine_classification: Option<Vec<MedicationKnowledgeMedicineClassification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<MedicationKnowledgePackaging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_characteristic: Option<Vec<MedicationKnowledgeDrugCharacteristic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contraindication: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory: Option<Vec<MedicationKnowledgeRegulatory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinetics: Option<Vec<MedicationKnowledgeKinetics>>,
}

/// Guidelines for administration of the medication
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeAdministrationGuidelines {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<Vec<MedicationKnowledgeAdministrationGuidelinesDosage>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub indication: Option<MedicationKnowledgeAdministrationGuidelinesIndication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_characteristics:
        Option<Vec<MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics>>,
}

/// `indication[x]` of `MedicationKnowledgeAdministrationGuidelines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MedicationKnowledgeAdministrationGuidelinesIndication {
    #[serde(rename = "indicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "indicationReference")]
    Reference(Reference),
}

impl MedicationKnowledgeAdministrationGuidelinesIndication {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Reference(_) => "Reference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeAdministrationGuidelinesDosage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    pub dosage: Vec<Dosage>,
}

impl MedicationKnowledgeAdministrationGuidelinesDosage {
    pub fn new(type_: CodeableConcept, dosage: Vec<Dosage>) -> Self {
        Self {
            type_,
            dosage,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub characteristic:
        Option<MedicationKnowledgeAdministrationGuidelinesPatientCharacteristicsCharacteristic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<String>>,
}

/// `characteristic[x]` of `MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MedicationKnowledgeAdministrationGuidelinesPatientCharacteristicsCharacteristic {
    #[serde(rename = "characteristicCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "characteristicQuantity")]
    Quantity(Quantity),
}

impl MedicationKnowledgeAdministrationGuidelinesPatientCharacteristicsCharacteristic {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Quantity(_) => "Quantity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub cost: Money,
}

impl MedicationKnowledgeCost {
    pub fn new(type_: CodeableConcept, cost: Money) -> Self {
        Self {
            type_,
            cost,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeDrugCharacteristic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<MedicationKnowledgeDrugCharacteristicValue>,
}

/// `value[x]` of `MedicationKnowledgeDrugCharacteristic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MedicationKnowledgeDrugCharacteristicValue {
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
}

impl MedicationKnowledgeDrugCharacteristicValue {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::String(_) => "String",
            Self::Quantity(_) => "Quantity",
            Self::Base64Binary(_) => "Base64Binary",
        }
    }
}

/// Active or inactive ingredient
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeIngredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub item: Option<MedicationKnowledgeIngredientItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Ratio>,
}

/// `item[x]` of `MedicationKnowledgeIngredient`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MedicationKnowledgeIngredientItem {
    #[serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "itemReference")]
    Reference(Reference),
}

impl MedicationKnowledgeIngredientItem {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Reference(_) => "Reference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeKinetics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_under_curve: Option<Vec<Quantity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lethal_dose50: Option<Vec<Quantity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_life_period: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeMedicineClassification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Vec<CodeableConcept>>,
}

impl MedicationKnowledgeMedicineClassification {
    pub fn new(type_: CodeableConcept) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeMonitoringProgram {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeMonograph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgePackaging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

/// Regulatory information about a medication
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeRegulatory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub regulatory_authority: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<Vec<MedicationKnowledgeRegulatorySubstitution>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<MedicationKnowledgeRegulatorySchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dispense: Option<MedicationKnowledgeRegulatoryMaxDispense>,
}

impl MedicationKnowledgeRegulatory {
    pub fn new(regulatory_authority: Reference) -> Self {
        Self {
            regulatory_authority,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeRegulatoryMaxDispense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub quantity: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Duration>,
}

impl MedicationKnowledgeRegulatoryMaxDispense {
    pub fn new(quantity: Quantity) -> Self {
        Self {
            quantity,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeRegulatorySchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub schedule: CodeableConcept,
}

impl MedicationKnowledgeRegulatorySchedule {
    pub fn new(schedule: CodeableConcept) -> Self {
        Self {
            schedule,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeRegulatorySubstitution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    pub allowed: bool,
}

impl MedicationKnowledgeRegulatorySubstitution {
    pub fn new(type_: CodeableConcept, allowed: bool) -> Self {
        Self {
            type_,
            allowed,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationKnowledgeRelatedMedicationKnowledge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    pub reference: Vec<Reference>,
}

impl MedicationKnowledgeRelatedMedicationKnowledge {
    pub fn new(type_: CodeableConcept, reference: Vec<Reference>) -> Self {
        Self {
            type_,
            reference,
            ..Default::default()
        }
    }
}

impl_shape!(MedicationKnowledge, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "code", "status", "manufacturer", "doseForm", "amount", "synonym",
    "relatedMedicationKnowledge", "associatedMedication", "productType", "monograph", "ingredient",
    "preparationInstruction", "intendedRoute", "cost", "monitoringProgram",
    "administrationGuidelines", "medicineClassification", "packaging", "drugCharacteristic",
    "contraindication", "regulatory", "kinetics",
]);
impl_shape!(MedicationKnowledgeAdministrationGuidelines, BackboneElement, [
    "id", "extension", "modifierExtension", "dosage", "indication[x]", "patientCharacteristics",
]);
impl_shape!(MedicationKnowledgeAdministrationGuidelinesDosage, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "dosage",
]);
impl_shape!(MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics, BackboneElement, [
    "id", "extension", "modifierExtension", "characteristic[x]", "value",
]);
impl_shape!(MedicationKnowledgeCost, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "source", "cost",
]);
impl_shape!(MedicationKnowledgeDrugCharacteristic, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "value[x]",
]);
impl_shape!(MedicationKnowledgeIngredient, BackboneElement, [
    "id", "extension", "modifierExtension", "item[x]", "isActive", "strength",
]);
impl_shape!(MedicationKnowledgeKinetics, BackboneElement, [
    "id", "extension", "modifierExtension", "areaUnderCurve", "lethalDose50", "halfLifePeriod",
]);
impl_shape!(MedicationKnowledgeMedicineClassification, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "classification",
]);
impl_shape!(MedicationKnowledgeMonitoringProgram, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "name",
]);
impl_shape!(MedicationKnowledgeMonograph, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "source",
]);
impl_shape!(MedicationKnowledgePackaging, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "quantity",
]);
impl_shape!(MedicationKnowledgeRegulatory, BackboneElement, [
    "id", "extension", "modifierExtension", "regulatoryAuthority", "substitution", "schedule",
    "maxDispense",
]);
impl_shape!(MedicationKnowledgeRegulatoryMaxDispense, BackboneElement, [
    "id", "extension", "modifierExtension", "quantity", "period",
]);
impl_shape!(MedicationKnowledgeRegulatorySchedule, BackboneElement, [
    "id", "extension", "modifierExtension", "schedule",
]);
impl_shape!(MedicationKnowledgeRegulatorySubstitution, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "allowed",
]);
impl_shape!(MedicationKnowledgeRelatedMedicationKnowledge, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "reference",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference(target: &str) -> Reference {
        Reference {
            reference: Some(target.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ingredient_item_and_max_dispense() {
        let knowledge = MedicationKnowledge {
            ingredient: Some(vec![MedicationKnowledgeIngredient {
                item: Some(MedicationKnowledgeIngredientItem::Reference(reference(
                    "Substance/acetaminophen",
                ))),
                is_active: Some(true),
                ..Default::default()
            }]),
            regulatory: Some(vec![MedicationKnowledgeRegulatory {
                max_dispense: Some(MedicationKnowledgeRegulatoryMaxDispense::new(Quantity {
                    value: Some(30.into()),
                    unit: Some("tablet".to_string()),
                    ..Default::default()
                })),
                ..MedicationKnowledgeRegulatory::new(reference("Organization/fda"))
            }]),
            ..Default::default()
        };

        let value = serde_json::to_value(&knowledge).unwrap();
        assert_eq!(
            value,
            json!({
                "resourceType": "MedicationKnowledge",
                "ingredient": [{
                    "itemReference": {"reference": "Substance/acetaminophen"},
                    "isActive": true
                }],
                "regulatory": [{
                    "regulatoryAuthority": {"reference": "Organization/fda"},
                    "maxDispense": {"quantity": {"value": 30, "unit": "tablet"}}
                }]
            })
        );

        let back: MedicationKnowledge = serde_json::from_value(value).unwrap();
        assert_eq!(back, knowledge);
        let item = back.ingredient.as_ref().and_then(|i| i[0].item.as_ref()).unwrap();
        assert_eq!(item.type_suffix(), "Reference");
    }
}
