//! FHIR Claim resource
//!
//! A provider's request for adjudication or reimbursement. The shared choice
//! groups defined here (`ClaimItemServiced`, `ClaimItemLocation`, ...) are reused
//! by ClaimResponse and ExplanationOfBenefit.

use crate::r4::choice;
use crate::r4::codes::{FinancialResourceStatusCodes, Use};
use crate::r4::datatypes::{
    Address, Attachment, CodeableConcept, Extension, Identifier, Meta, Money, Narrative, Period,
    Quantity, Reference,
};
use crate::r4::primitives::{Code, Date, DateTime, Decimal, Id, PositiveInt, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR Claim resource
///
/// A provider-issued list of professional services and products which have been
/// provided, or are to be provided, to a patient, sent to an insurer for
/// reimbursement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<Claim>,
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
    pub status: FinancialResourceStatusCodes,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<CodeableConcept>,
    /// Claim, preauthorization or predetermination
    #[serde(rename = "use")]
    pub use_: Use,
    pub patient: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_period: Option<Period>,
    pub created: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterer: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer: Option<Reference>,
    pub provider: Reference,
    pub priority: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds_reserve: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<ClaimRelated>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prescription: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<ClaimPayee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team: Option<Vec<ClaimCareTeam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_info: Option<Vec<ClaimSupportingInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<ClaimDiagnosis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Vec<ClaimProcedure>>,
    /// Financial instruments for reimbursement; at least one entry is required.
    pub insurance: Vec<ClaimInsurance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accident: Option<ClaimAccident>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<ClaimItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,
}

impl Claim {
    /// Create a claim with its required fields set and everything else absent.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        status: FinancialResourceStatusCodes,
        type_: CodeableConcept,
        use_: Use,
        patient: Reference,
        created: DateTime,
        provider: Reference,
        priority: CodeableConcept,
        insurance: Vec<ClaimInsurance>,
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
            identifier: None,
            status,
            type_,
            sub_type: None,
            use_,
            patient,
            billable_period: None,
            created,
            enterer: None,
            insurer: None,
            provider,
            priority,
            funds_reserve: None,
            related: None,
            prescription: None,
            original_prescription: None,
            payee: None,
            referral: None,
            facility: None,
            care_team: None,
            supporting_info: None,
            diagnosis: None,
            procedure: None,
            insurance,
            accident: None,
            item: None,
            total: None,
        }
    }
}

/// Details of an event that resulted in injuries addressed by the claim
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAccident {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub date: Date,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub location: Option<ClaimAccidentLocation>,
}

impl ClaimAccident {
    pub fn new(date: Date) -> Self {
        Self {
            date,
            ..Default::default()
        }
    }
}

/// `location[x]` of `ClaimAccident` and `ExplanationOfBenefitAccident`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClaimAccidentLocation {
    #[serde(rename = "locationAddress")]
    Address(Address),
    #[serde(rename = "locationReference")]
    Reference(Reference),
}

impl ClaimAccidentLocation {
    /// Type suffix of the populated member, e.g. `"Address"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Address(_) => "Address",
            Self::Reference(_) => "Reference",
        }
    }
}

/// Members of the care team
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimCareTeam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub provider: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<CodeableConcept>,
}

impl ClaimCareTeam {
    pub fn new(sequence: PositiveInt, provider: Reference) -> Self {
        Self {
            sequence,
            provider,
            ..Default::default()
        }
    }
}

/// Pertinent diagnosis information
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDiagnosis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub diagnosis: Option<ClaimDiagnosisDiagnosis>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_admission: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<CodeableConcept>,
}

impl ClaimDiagnosis {
    pub fn new(sequence: PositiveInt) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }
}

/// `diagnosis[x]` of `ClaimDiagnosis` and `ExplanationOfBenefitDiagnosis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClaimDiagnosisDiagnosis {
    #[serde(rename = "diagnosisCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "diagnosisReference")]
    Reference(Reference),
}

impl ClaimDiagnosisDiagnosis {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Reference(_) => "Reference",
        }
    }
}

/// Patient insurance information
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInsurance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub focal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
    pub coverage: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_arrangement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_response: Option<Reference>,
}

impl ClaimInsurance {
    pub fn new(sequence: PositiveInt, focal: bool, coverage: Reference) -> Self {
        Self {
            sequence,
            focal,
            coverage,
            ..Default::default()
        }
    }
}

/// Product or service provided
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Item instance identifier
    pub sequence: PositiveInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team_sequence: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_sequence: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_sequence: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_sequence: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,
    pub product_or_service: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub serviced: Option<ClaimItemServiced>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub location: Option<ClaimItemLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_site: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ClaimItemDetail>>,
}

impl ClaimItem {
    pub fn new(sequence: PositiveInt, product_or_service: CodeableConcept) -> Self {
        Self {
            sequence,
            product_or_service,
            ..Default::default()
        }
    }
}

/// `serviced[x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClaimItemServiced {
    #[serde(rename = "servicedDate")]
    Date(Date),
    #[serde(rename = "servicedPeriod")]
    Period(Period),
}

impl ClaimItemServiced {
    /// Type suffix of the populated member, e.g. `"Date"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Date(_) => "Date",
            Self::Period(_) => "Period",
        }
    }
}

/// `location[x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClaimItemLocation {
    #[serde(rename = "locationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "locationAddress")]
    Address(Address),
    #[serde(rename = "locationReference")]
    Reference(Reference),
}

impl ClaimItemLocation {
    /// Type suffix of the populated member, e.g. `"CodeableConcept"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::Address(_) => "Address",
            Self::Reference(_) => "Reference",
        }
    }
}

/// Product or service provided
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,
    pub product_or_service: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ClaimItemDetailSubDetail>>,
}

impl ClaimItemDetail {
    pub fn new(sequence: PositiveInt, product_or_service: CodeableConcept) -> Self {
        Self {
            sequence,
            product_or_service,
            ..Default::default()
        }
    }
}

/// Product or service provided
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemDetailSubDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,
    pub product_or_service: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,
}

impl ClaimItemDetailSubDetail {
    pub fn new(sequence: PositiveInt, product_or_service: CodeableConcept) -> Self {
        Self {
            sequence,
            product_or_service,
            ..Default::default()
        }
    }
}

/// Recipient of benefits payable
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPayee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Reference>,
}

impl ClaimPayee {
    pub fn new(type_: CodeableConcept) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimProcedure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub procedure: Option<ClaimProcedureProcedure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,
}

impl ClaimProcedure {
    pub fn new(sequence: PositiveInt) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }
}

/// `procedure[x]` of `ClaimProcedure` and `ExplanationOfBenefitProcedure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClaimProcedureProcedure {
    #[serde(rename = "procedureCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "procedureReference")]
    Reference(Reference),
}

impl ClaimProcedureProcedure {
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
pub struct ClaimRelated {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Identifier>,
}

/// Supporting information
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSupportingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub category: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub timing: Option<ClaimSupportingInfoTiming>,
    /// Data to be provided
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<ClaimSupportingInfoValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,
}

impl ClaimSupportingInfo {
    pub fn new(sequence: PositiveInt, category: CodeableConcept) -> Self {
        Self {
            sequence,
            category,
            ..Default::default()
        }
    }
}

/// `timing[x]` of `ClaimSupportingInfo` and `ExplanationOfBenefitSupportingInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClaimSupportingInfoTiming {
    #[serde(rename = "timingDate")]
    Date(Date),
    #[serde(rename = "timingPeriod")]
    Period(Period),
}

impl ClaimSupportingInfoTiming {
    /// Type suffix of the populated member, e.g. `"Date"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Date(_) => "Date",
            Self::Period(_) => "Period",
        }
    }
}

/// `value[x]` of `ClaimSupportingInfo` and `ExplanationOfBenefitSupportingInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClaimSupportingInfoValue {
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueAttachment")]
    Attachment(Attachment),
    #[serde(rename = "valueReference")]
    Reference(Reference),
}

impl ClaimSupportingInfoValue {
    /// Type suffix of the populated member, e.g. `"Boolean"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::String(_) => "String",
            Self::Quantity(_) => "Quantity",
            Self::Attachment(_) => "Attachment",
            Self::Reference(_) => "Reference",
        }
    }
}

impl_shape!(Claim, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "identifier", "status", "type", "subType", "use", "patient",
    "billablePeriod", "created", "enterer", "insurer", "provider", "priority", "fundsReserve",
    "related", "prescription", "originalPrescription", "payee", "referral", "facility", "careTeam",
    "supportingInfo", "diagnosis", "procedure", "insurance", "accident", "item", "total",
]);
impl_shape!(ClaimAccident, BackboneElement, [
    "id", "extension", "modifierExtension", "date", "type", "location[x]",
]);
impl_shape!(ClaimCareTeam, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "provider", "responsible", "role",
    "qualification",
]);
impl_shape!(ClaimDiagnosis, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "diagnosis[x]", "type", "onAdmission",
    "packageCode",
]);
impl_shape!(ClaimInsurance, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "focal", "identifier", "coverage",
    "businessArrangement", "preAuthRef", "claimResponse",
]);
impl_shape!(ClaimItem, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "careTeamSequence", "diagnosisSequence",
    "procedureSequence", "informationSequence", "revenue", "category", "productOrService",
    "modifier", "programCode", "serviced[x]", "location[x]", "quantity", "unitPrice", "factor",
    "net", "udi", "bodySite", "subSite", "encounter", "detail",
]);
impl_shape!(ClaimItemDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "revenue", "category", "productOrService",
    "modifier", "programCode", "quantity", "unitPrice", "factor", "net", "udi", "subDetail",
]);
impl_shape!(ClaimItemDetailSubDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "revenue", "category", "productOrService",
    "modifier", "programCode", "quantity", "unitPrice", "factor", "net", "udi",
]);
impl_shape!(ClaimPayee, BackboneElement, ["id", "extension", "modifierExtension", "type", "party"]);
impl_shape!(ClaimProcedure, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "type", "date", "procedure[x]", "udi",
]);
impl_shape!(ClaimRelated, BackboneElement, [
    "id", "extension", "modifierExtension", "claim", "relationship", "reference",
]);
impl_shape!(ClaimSupportingInfo, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "category", "code", "timing[x]", "value[x]",
    "reason",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::Coding;
    use serde_json::json;

    fn concept(code: &str) -> CodeableConcept {
        CodeableConcept {
            coding: Some(vec![Coding {
                code: Some(code.to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    fn reference(target: &str) -> Reference {
        Reference {
            reference: Some(target.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_supporting_info_value_boolean() {
        let info = ClaimSupportingInfo {
            value: Some(ClaimSupportingInfoValue::Boolean(true)),
            ..ClaimSupportingInfo::new(1, concept("employmentimpacted"))
        };

        let value = serde_json::to_value(&info).unwrap();
        let object = value.as_object().unwrap();
        let value_keys: Vec<_> = object.keys().filter(|k| k.starts_with("value")).collect();
        assert_eq!(value_keys, ["valueBoolean"]);
        assert!(object.get("timingDate").is_none());

        let back: ClaimSupportingInfo = serde_json::from_value(value).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_claim_round_trip() {
        let json = json!({
            "resourceType": "Claim",
            "id": "100150",
            "status": "active",
            "type": {"coding": [{"code": "oral"}]},
            "use": "claim",
            "patient": {"reference": "Patient/1"},
            "created": "2014-08-16",
            "provider": {"reference": "Organization/1"},
            "priority": {"coding": [{"code": "normal"}]},
            "insurance": [
                {"sequence": 1, "focal": true, "coverage": {"reference": "Coverage/9876B1"}}
            ],
            "item": [{
                "sequence": 1,
                "productOrService": {"coding": [{"code": "1200"}]},
                "servicedDate": "2014-08-16",
                "locationCodeableConcept": {"coding": [{"code": "21"}]},
                "unitPrice": {"value": 135.57, "currency": "USD"}
            }]
        });

        let claim: Claim = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(claim.use_, Use::Claim);
        assert_eq!(claim.status, FinancialResourceStatusCodes::Active);

        let item = &claim.item.as_ref().unwrap()[0];
        assert_eq!(item.serviced, Some(ClaimItemServiced::Date("2014-08-16".to_string())));
        assert_eq!(item.location.as_ref().map(|l| l.type_suffix()), Some("CodeableConcept"));

        assert_eq!(serde_json::to_value(&claim).unwrap(), json);
    }

    #[test]
    fn test_new_claim() {
        let claim = Claim::new(
            FinancialResourceStatusCodes::Draft,
            concept("oral"),
            Use::Preauthorization,
            reference("Patient/1"),
            "2024-05-01".to_string(),
            reference("Organization/1"),
            concept("normal"),
            vec![ClaimInsurance::new(1, true, reference("Coverage/1"))],
        );

        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(value["use"], "preauthorization");
        assert!(value.get("item").is_none());
        assert!(value.get("supportingInfo").is_none());
    }
}
