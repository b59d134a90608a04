//! FHIR MolecularSequence resource

use crate::r4::codes::{OrientationType, QualityType, RepositoryType, SequenceType, StrandType};
use crate::r4::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Narrative, Quantity, Reference,
};
use crate::r4::primitives::{Code, Decimal, Id, Integer, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR MolecularSequence resource
///
/// Raw data describing a biological sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequence {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<MolecularSequence>,
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
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<SequenceType>,
    pub coordinate_system: Integer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq: Option<MolecularSequenceReferenceSeq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Vec<MolecularSequenceVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_seq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Vec<MolecularSequenceQuality>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_coverage: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Vec<MolecularSequenceRepository>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_variant: Option<Vec<MolecularSequenceStructureVariant>>,
}

impl MolecularSequence {
    /// Create a sequence with only the coordinate system set (0 or 1 based).
    pub fn new(coordinate_system: Integer) -> Self {
        Self {
            coordinate_system,
            ..Default::default()
        }
    }
}

/// Quality measures of the sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceQuality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: QualityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_sequence: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,
    /// True positives from the perspective of the truth data
    #[serde(rename = "truthTP", skip_serializing_if = "Option::is_none")]
    pub truth_tp: Option<Decimal>,
    #[serde(rename = "queryTP", skip_serializing_if = "Option::is_none")]
    pub query_tp: Option<Decimal>,
    #[serde(rename = "truthFN", skip_serializing_if = "Option::is_none")]
    pub truth_fn: Option<Decimal>,
    #[serde(rename = "queryFP", skip_serializing_if = "Option::is_none")]
    pub query_fp: Option<Decimal>,
    /// False positives where the non-REF alleles in the truth and query call sets match
    #[serde(rename = "gtFP", skip_serializing_if = "Option::is_none")]
    pub gt_fp: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_score: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roc: Option<MolecularSequenceQualityRoc>,
}

impl MolecularSequenceQuality {
    pub fn new(type_: QualityType) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            type_,
            standard_sequence: None,
            start: None,
            end: None,
            score: None,
            method: None,
            truth_tp: None,
            query_tp: None,
            truth_fn: None,
            query_fp: None,
            gt_fp: None,
            precision: None,
            recall: None,
            f_score: None,
            roc: None,
        }
    }
}

/// Receiver Operator Characteristic (ROC) curve
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceQualityRoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Vec<Integer>>,
    #[serde(rename = "numTP", skip_serializing_if = "Option::is_none")]
    pub num_tp: Option<Vec<Integer>>,
    #[serde(rename = "numFP", skip_serializing_if = "Option::is_none")]
    pub num_fp: Option<Vec<Integer>>,
    #[serde(rename = "numFN", skip_serializing_if = "Option::is_none")]
    pub num_fn: Option<Vec<Integer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<Vec<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Vec<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_measure: Option<Vec<Decimal>>,
}

/// A sequence used as reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceReferenceSeq {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genome_build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<OrientationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq_id: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq_pointer: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_seq_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strand: Option<StrandType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_end: Option<Integer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: RepositoryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variantset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readset_id: Option<String>,
}

impl MolecularSequenceRepository {
    pub fn new(type_: RepositoryType) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            type_,
            url: None,
            name: None,
            dataset_id: None,
            variantset_id: None,
            readset_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceStructureVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer: Option<MolecularSequenceStructureVariantOuter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<MolecularSequenceStructureVariantInner>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceStructureVariantInner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Integer>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceStructureVariantOuter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Integer>,
}

/// Variant in sequence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularSequenceVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cigar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_pointer: Option<Reference>,
}

impl_shape!(MolecularSequence, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "identifier", "type", "coordinateSystem", "patient", "specimen", "device",
    "performer", "quantity", "referenceSeq", "variant", "observedSeq", "quality", "readCoverage",
    "repository", "pointer", "structureVariant",
]);
impl_shape!(MolecularSequenceQuality, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "standardSequence", "start", "end", "score",
    "method", "truthTP", "queryTP", "truthFN", "queryFP", "gtFP", "precision", "recall", "fScore",
    "roc",
]);
impl_shape!(MolecularSequenceQualityRoc, BackboneElement, [
    "id", "extension", "modifierExtension", "score", "numTP", "numFP", "numFN", "precision",
    "sensitivity", "fMeasure",
]);
impl_shape!(MolecularSequenceReferenceSeq, BackboneElement, [
    "id", "extension", "modifierExtension", "chromosome", "genomeBuild", "orientation",
    "referenceSeqId", "referenceSeqPointer", "referenceSeqString", "strand", "windowStart",
    "windowEnd",
]);
impl_shape!(MolecularSequenceRepository, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "url", "name", "datasetId", "variantsetId",
    "readsetId",
]);
impl_shape!(MolecularSequenceStructureVariant, BackboneElement, [
    "id", "extension", "modifierExtension", "variantType", "exact", "length", "outer", "inner",
]);
impl_shape!(MolecularSequenceStructureVariantInner, BackboneElement, [
    "id", "extension", "modifierExtension", "start", "end",
]);
impl_shape!(MolecularSequenceStructureVariantOuter, BackboneElement, [
    "id", "extension", "modifierExtension", "start", "end",
]);
impl_shape!(MolecularSequenceVariant, BackboneElement, [
    "id", "extension", "modifierExtension", "start", "end", "observedAllele", "referenceAllele",
    "cigar", "variantPointer",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quality_metric_keys() {
        let quality = MolecularSequenceQuality {
            truth_tp: Some("129481.5".parse().unwrap()),
            query_fp: Some("1.25".parse().unwrap()),
            gt_fp: Some("2.5".parse().unwrap()),
            roc: Some(MolecularSequenceQualityRoc {
                num_tp: Some(vec![1, 2]),
                num_fn: Some(vec![3]),
                ..Default::default()
            }),
            ..MolecularSequenceQuality::new(QualityType::Snp)
        };

        let value = serde_json::to_value(&quality).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "snp",
                "truthTP": 129481.5,
                "queryFP": 1.25,
                "gtFP": 2.5,
                "roc": {"numTP": [1, 2], "numFN": [3]}
            })
        );

        let back: MolecularSequenceQuality = serde_json::from_value(value).unwrap();
        assert_eq!(back, quality);
    }

    #[test]
    fn test_coordinate_system_required() {
        let seq = MolecularSequence::new(0);
        assert_eq!(
            serde_json::to_value(&seq).unwrap(),
            json!({"resourceType": "MolecularSequence", "coordinateSystem": 0})
        );

        let err = serde_json::from_value::<MolecularSequence>(json!({
            "resourceType": "MolecularSequence"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `coordinateSystem`"));
    }
}
