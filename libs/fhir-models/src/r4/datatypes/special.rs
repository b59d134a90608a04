//! Special-purpose FHIR datatypes

use crate::r4::choice::{self, OpenValue};
use crate::r4::codes::NarrativeStatus;
use crate::r4::datatypes::{CodeableConcept, Coding, Identifier, Quantity, Range, Ratio, Timing};
use crate::r4::primitives::{Instant, Integer};
use crate::shape::impl_shape;
use serde::{Deserialize, Serialize};

/// Optional extension element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    /// Identifies the meaning of the extension
    pub url: String,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<OpenValue>,
}

impl Extension {
    pub fn new(url: String) -> Self {
        Self {
            url,
            ..Default::default()
        }
    }
}

/// A reference from one resource to another
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// How the medication is/was taken or should be taken
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dosage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_instruction: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub as_needed: Option<DosageAsNeeded>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_and_rate: Option<Vec<DosageDoseAndRate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_period: Option<Ratio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_administration: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_lifetime: Option<Quantity>,
}

/// `asNeeded[x]` of `Dosage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DosageAsNeeded {
    #[serde(rename = "asNeededBoolean")]
    Boolean(bool),
    #[serde(rename = "asNeededCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

impl DosageAsNeeded {
    /// Type suffix of the populated member, e.g. `"Boolean"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::CodeableConcept(_) => "CodeableConcept",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosageDoseAndRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub dose: Option<DosageDoseAndRateDose>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub rate: Option<DosageDoseAndRateRate>,
}

/// `dose[x]` of `DosageDoseAndRate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DosageDoseAndRateDose {
    #[serde(rename = "doseRange")]
    Range(Range),
    #[serde(rename = "doseQuantity")]
    Quantity(Quantity),
}

impl DosageDoseAndRateDose {
    /// Type suffix of the populated member, e.g. `"Range"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Range(_) => "Range",
            Self::Quantity(_) => "Quantity",
        }
    }
}

/// `rate[x]` of `DosageDoseAndRate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DosageDoseAndRateRate {
    #[serde(rename = "rateRatio")]
    Ratio(Ratio),
    #[serde(rename = "rateRange")]
    Range(Range),
    #[serde(rename = "rateQuantity")]
    Quantity(Quantity),
}

impl DosageDoseAndRateRate {
    /// Type suffix of the populated member, e.g. `"Ratio"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Ratio(_) => "Ratio",
            Self::Range(_) => "Range",
            Self::Quantity(_) => "Quantity",
        }
    }
}

/// Metadata about a resource
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<Coding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<Coding>>,
}

/// Human-readable summary of the resource (essential clinical and business information)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    pub status: NarrativeStatus,
    /// Limited xhtml content
    pub div: String,
}

impl Narrative {
    pub fn new(status: NarrativeStatus, div: String) -> Self {
        Self {
            id: None,
            extension: None,
            status,
            div,
        }
    }
}

impl_shape!(Extension, ComplexType, ["id", "extension", "url", "value[x]"]);
impl_shape!(Reference, ComplexType, [
    "id", "extension", "reference", "type", "identifier", "display",
]);
impl_shape!(Dosage, ComplexType, [
    "id", "extension", "modifierExtension", "sequence", "text", "additionalInstruction",
    "patientInstruction", "timing", "asNeeded[x]", "site", "route", "method", "doseAndRate",
    "maxDosePerPeriod", "maxDosePerAdministration", "maxDosePerLifetime",
]);
impl_shape!(DosageDoseAndRate, BackboneElement, ["id", "extension", "type", "dose[x]", "rate[x]"]);
impl_shape!(Meta, ComplexType, [
    "id", "extension", "versionId", "lastUpdated", "source", "profile", "security", "tag",
]);
impl_shape!(Narrative, ComplexType, ["id", "extension", "status", "div"]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::Identifier;
    use serde_json::json;

    #[test]
    fn test_nested_extensions() {
        let ext: Extension = serde_json::from_value(json!({
            "url": "http://example.org/fhir/StructureDefinition/outer",
            "extension": [
                {"url": "flag", "valueBoolean": true},
                {"url": "label", "valueString": "primary"}
            ]
        }))
        .unwrap();

        assert_eq!(ext.value, None);
        let inner = ext.extension.as_ref().unwrap();
        assert_eq!(inner[0].value, Some(OpenValue::Boolean(true)));
        assert_eq!(inner[1].value.as_ref().map(|v| v.type_suffix()), Some("String"));
    }

    #[test]
    fn test_extension_requires_url() {
        let err = serde_json::from_value::<Extension>(json!({"valueCode": "x"})).unwrap_err();
        assert!(err.to_string().contains("missing field `url`"));
    }

    #[test]
    fn test_reference_identifier_cycle() {
        let reference = Reference {
            identifier: Some(Identifier {
                system: Some("urn:oid:2.16.840.1.113883.4.1".to_string()),
                value: Some("123-45-6789".to_string()),
                assigner: Some(Box::new(Reference {
                    display: Some("SSA".to_string()),
                    ..Default::default()
                })),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&reference).unwrap();
        assert_eq!(value["identifier"]["assigner"], json!({"display": "SSA"}));

        let back: Reference = serde_json::from_value(value).unwrap();
        assert_eq!(back, reference);
    }

    #[test]
    fn test_dosage_as_needed() {
        let dosage: Dosage = serde_json::from_value(json!({
            "text": "1 tablet as needed",
            "asNeededBoolean": true,
            "doseAndRate": [{"doseQuantity": {"value": 1.5, "unit": "tablet"}}]
        }))
        .unwrap();

        assert_eq!(dosage.as_needed, Some(DosageAsNeeded::Boolean(true)));
        let dose = &dosage.dose_and_rate.as_ref().unwrap()[0];
        assert!(matches!(dose.dose, Some(DosageDoseAndRateDose::Quantity(_))));
        assert_eq!(dose.rate, None);
    }
}
