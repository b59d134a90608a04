//! FHIR ExplanationOfBenefit resource

use crate::r4::choice;
use crate::r4::claim::{
    ClaimAccidentLocation, ClaimDiagnosisDiagnosis, ClaimItemLocation, ClaimItemServiced,
    ClaimProcedureProcedure, ClaimSupportingInfoTiming, ClaimSupportingInfoValue,
};
use crate::r4::codes::{ClaimProcessingCodes, ExplanationOfBenefitStatus, NoteType, Use};
use crate::r4::datatypes::{
    Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Money, Narrative, Period,
    Quantity, Reference,
};
use crate::r4::primitives::{Code, Date, DateTime, Decimal, Id, PositiveInt, UnsignedInt, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR ExplanationOfBenefit resource
///
/// Claim details, adjudication details from the processing of a Claim, and
/// optionally account balance information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefit {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<ExplanationOfBenefit>,
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
    pub status: ExplanationOfBenefitStatus,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<CodeableConcept>,
    #[serde(rename = "use")]
    pub use_: Use,
    pub patient: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_period: Option<Period>,
    pub created: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterer: Option<Reference>,
    pub insurer: Reference,
    pub provider: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds_reserve_requested: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds_reserve: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<ExplanationOfBenefitRelated>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prescription: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<ExplanationOfBenefitPayee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_response: Option<Reference>,
    pub outcome: ClaimProcessingCodes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref_period: Option<Vec<Period>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team: Option<Vec<ExplanationOfBenefitCareTeam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_info: Option<Vec<ExplanationOfBenefitSupportingInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<ExplanationOfBenefitDiagnosis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Vec<ExplanationOfBenefitProcedure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: Option<PositiveInt>,
    pub insurance: Vec<ExplanationOfBenefitInsurance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accident: Option<ExplanationOfBenefitAccident>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<ExplanationOfBenefitItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_item: Option<Vec<ExplanationOfBenefitAddItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Vec<ExplanationOfBenefitTotal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<ExplanationOfBenefitPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_code: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_note: Option<Vec<ExplanationOfBenefitProcessNote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_balance: Option<Vec<ExplanationOfBenefitBenefitBalance>>,
}

impl ExplanationOfBenefit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        status: ExplanationOfBenefitStatus,
        type_: CodeableConcept,
        use_: Use,
        patient: Reference,
        created: DateTime,
        insurer: Reference,
        provider: Reference,
        outcome: ClaimProcessingCodes,
        insurance: Vec<ExplanationOfBenefitInsurance>,
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
            insurer,
            provider,
            priority: None,
            funds_reserve_requested: None,
            funds_reserve: None,
            related: None,
            prescription: None,
            original_prescription: None,
            payee: None,
            referral: None,
            facility: None,
            claim: None,
            claim_response: None,
            outcome,
            disposition: None,
            pre_auth_ref: None,
            pre_auth_ref_period: None,
            care_team: None,
            supporting_info: None,
            diagnosis: None,
            procedure: None,
            precedence: None,
            insurance,
            accident: None,
            item: None,
            add_item: None,
            adjudication: None,
            total: None,
            payment: None,
            form_code: None,
            form: None,
            process_note: None,
            benefit_period: None,
            benefit_balance: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitAccident {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub location: Option<ClaimAccidentLocation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitAddItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_sequence: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_sequence: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail_sequence: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Vec<Reference>>,
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
    pub body_site: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_site: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ExplanationOfBenefitAddItemDetail>>,
}

impl ExplanationOfBenefitAddItem {
    pub fn new(product_or_service: CodeableConcept) -> Self {
        Self {
            product_or_service,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitAddItemDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub product_or_service: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ExplanationOfBenefitAddItemDetailSubDetail>>,
}

impl ExplanationOfBenefitAddItemDetail {
    pub fn new(product_or_service: CodeableConcept) -> Self {
        Self {
            product_or_service,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitAddItemDetailSubDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub product_or_service: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
}

impl ExplanationOfBenefitAddItemDetailSubDetail {
    pub fn new(product_or_service: CodeableConcept) -> Self {
        Self {
            product_or_service,
            ..Default::default()
        }
    }
}

/// Balance by benefit category
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitBenefitBalance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<Vec<ExplanationOfBenefitBenefitBalanceFinancial>>,
}

impl ExplanationOfBenefitBenefitBalance {
    pub fn new(category: CodeableConcept) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }
}

/// Benefit summary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitBenefitBalanceFinancial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub allowed: Option<ExplanationOfBenefitBenefitBalanceFinancialAllowed>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub used: Option<ExplanationOfBenefitBenefitBalanceFinancialUsed>,
}

impl ExplanationOfBenefitBenefitBalanceFinancial {
    pub fn new(type_: CodeableConcept) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }
}

/// `allowed[x]` of `ExplanationOfBenefitBenefitBalanceFinancial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExplanationOfBenefitBenefitBalanceFinancialAllowed {
    #[serde(rename = "allowedUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[serde(rename = "allowedString")]
    String(String),
    #[serde(rename = "allowedMoney")]
    Money(Money),
}

impl ExplanationOfBenefitBenefitBalanceFinancialAllowed {
    /// Type suffix of the populated member, e.g. `"UnsignedInt"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::UnsignedInt(_) => "UnsignedInt",
            Self::String(_) => "String",
            Self::Money(_) => "Money",
        }
    }
}

/// `used[x]` of `ExplanationOfBenefitBenefitBalanceFinancial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExplanationOfBenefitBenefitBalanceFinancialUsed {
    #[serde(rename = "usedUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[serde(rename = "usedMoney")]
    Money(Money),
}

impl ExplanationOfBenefitBenefitBalanceFinancialUsed {
    /// Type suffix of the populated member, e.g. `"UnsignedInt"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::UnsignedInt(_) => "UnsignedInt",
            Self::Money(_) => "Money",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitCareTeam {
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

impl ExplanationOfBenefitCareTeam {
    pub fn new(sequence: PositiveInt, provider: Reference) -> Self {
        Self {
            sequence,
            provider,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitDiagnosis {
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

impl ExplanationOfBenefitDiagnosis {
    pub fn new(sequence: PositiveInt) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitInsurance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub focal: bool,
    pub coverage: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<Vec<String>>,
}

impl ExplanationOfBenefitInsurance {
    pub fn new(focal: bool, coverage: Reference) -> Self {
        Self {
            focal,
            coverage,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
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
    pub note_number: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ExplanationOfBenefitItemDetail>>,
}

impl ExplanationOfBenefitItem {
    pub fn new(sequence: PositiveInt, product_or_service: CodeableConcept) -> Self {
        Self {
            sequence,
            product_or_service,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItemAdjudication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

impl ExplanationOfBenefitItemAdjudication {
    pub fn new(category: CodeableConcept) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItemDetail {
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
    pub note_number: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ExplanationOfBenefitItemDetailSubDetail>>,
}

impl ExplanationOfBenefitItemDetail {
    pub fn new(sequence: PositiveInt, product_or_service: CodeableConcept) -> Self {
        Self {
            sequence,
            product_or_service,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItemDetailSubDetail {
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
    pub note_number: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
}

impl ExplanationOfBenefitItemDetailSubDetail {
    pub fn new(sequence: PositiveInt, product_or_service: CodeableConcept) -> Self {
        Self {
            sequence,
            product_or_service,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitPayee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_reason: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitProcedure {
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

impl ExplanationOfBenefitProcedure {
    pub fn new(sequence: PositiveInt) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitProcessNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<PositiveInt>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<NoteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitRelated {
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

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitSupportingInfo {
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
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub value: Option<ClaimSupportingInfoValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Coding>,
}

impl ExplanationOfBenefitSupportingInfo {
    pub fn new(sequence: PositiveInt, category: CodeableConcept) -> Self {
        Self {
            sequence,
            category,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitTotal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: CodeableConcept,
    pub amount: Money,
}

impl ExplanationOfBenefitTotal {
    pub fn new(category: CodeableConcept, amount: Money) -> Self {
        Self {
            category,
            amount,
            ..Default::default()
        }
    }
}

impl_shape!(ExplanationOfBenefit, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "identifier", "status", "type", "subType", "use", "patient",
    "billablePeriod", "created", "enterer", "insurer", "provider", "priority",
    "fundsReserveRequested", "fundsReserve", "related", "prescription", "originalPrescription",
    "payee", "referral", "facility", "claim", "claimResponse", "outcome", "disposition",
    "preAuthRef", "preAuthRefPeriod", "careTeam", "supportingInfo", "diagnosis", "procedure",
    "precedence", "insurance", "accident", "item", "addItem", "adjudication", "total", "payment",
    "formCode", "form", "processNote", "benefitPeriod", "benefitBalance",
]);
impl_shape!(ExplanationOfBenefitAccident, BackboneElement, [
    "id", "extension", "modifierExtension", "date", "type", "location[x]",
]);
impl_shape!(ExplanationOfBenefitAddItem, BackboneElement, [
    "id", "extension", "modifierExtension", "itemSequence", "detailSequence", "subDetailSequence",
    "provider", "productOrService", "modifier", "programCode", "serviced[x]", "location[x]",
    "quantity", "unitPrice", "factor", "net", "bodySite", "subSite", "noteNumber", "adjudication",
    "detail",
]);
impl_shape!(ExplanationOfBenefitAddItemDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "productOrService", "modifier", "quantity", "unitPrice",
    "factor", "net", "noteNumber", "adjudication", "subDetail",
]);
impl_shape!(ExplanationOfBenefitAddItemDetailSubDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "productOrService", "modifier", "quantity", "unitPrice",
    "factor", "net", "noteNumber", "adjudication",
]);
impl_shape!(ExplanationOfBenefitBenefitBalance, BackboneElement, [
    "id", "extension", "modifierExtension", "category", "excluded", "name", "description",
    "network", "unit", "term", "financial",
]);
impl_shape!(ExplanationOfBenefitBenefitBalanceFinancial, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "allowed[x]", "used[x]",
]);
impl_shape!(ExplanationOfBenefitCareTeam, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "provider", "responsible", "role",
    "qualification",
]);
impl_shape!(ExplanationOfBenefitDiagnosis, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "diagnosis[x]", "type", "onAdmission",
    "packageCode",
]);
impl_shape!(ExplanationOfBenefitInsurance, BackboneElement, [
    "id", "extension", "modifierExtension", "focal", "coverage", "preAuthRef",
]);
impl_shape!(ExplanationOfBenefitItem, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "careTeamSequence", "diagnosisSequence",
    "procedureSequence", "informationSequence", "revenue", "category", "productOrService",
    "modifier", "programCode", "serviced[x]", "location[x]", "quantity", "unitPrice", "factor",
    "net", "udi", "bodySite", "subSite", "encounter", "noteNumber", "adjudication", "detail",
]);
impl_shape!(ExplanationOfBenefitItemAdjudication, BackboneElement, [
    "id", "extension", "modifierExtension", "category", "reason", "amount", "value",
]);
impl_shape!(ExplanationOfBenefitItemDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "revenue", "category", "productOrService",
    "modifier", "programCode", "quantity", "unitPrice", "factor", "net", "udi", "noteNumber",
    "adjudication", "subDetail",
]);
impl_shape!(ExplanationOfBenefitItemDetailSubDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "revenue", "category", "productOrService",
    "modifier", "programCode", "quantity", "unitPrice", "factor", "net", "udi", "noteNumber",
    "adjudication",
]);
impl_shape!(ExplanationOfBenefitPayee, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "party",
]);
impl_shape!(ExplanationOfBenefitPayment, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "adjustment", "adjustmentReason", "date",
    "amount", "identifier",
]);
impl_shape!(ExplanationOfBenefitProcedure, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "type", "date", "procedure[x]", "udi",
]);
impl_shape!(ExplanationOfBenefitProcessNote, BackboneElement, [
    "id", "extension", "modifierExtension", "number", "type", "text", "language",
]);
impl_shape!(ExplanationOfBenefitRelated, BackboneElement, [
    "id", "extension", "modifierExtension", "claim", "relationship", "reference",
]);
impl_shape!(ExplanationOfBenefitSupportingInfo, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "category", "code", "timing[x]", "value[x]",
    "reason",
]);
impl_shape!(ExplanationOfBenefitTotal, BackboneElement, [
    "id", "extension", "modifierExtension", "category", "amount",
]);
