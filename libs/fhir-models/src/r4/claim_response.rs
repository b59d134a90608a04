//! FHIR ClaimResponse resource

use crate::r4::choice;
use crate::r4::claim::{ClaimItemLocation, ClaimItemServiced};
use crate::r4::codes::{ClaimProcessingCodes, FinancialResourceStatusCodes, NoteType, Use};
use crate::r4::datatypes::{
    Attachment, CodeableConcept, Extension, Identifier, Meta, Money, Narrative, Period, Quantity,
    Reference,
};
use crate::r4::primitives::{Code, Date, DateTime, Decimal, Id, PositiveInt, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR ClaimResponse resource
///
/// The adjudication details from the processing of a Claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<ClaimResponse>,
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
    #[serde(rename = "use")]
    pub use_: Use,
    pub patient: Reference,
    pub created: DateTime,
    pub insurer: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Reference>,
    pub outcome: ClaimProcessingCodes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<ClaimResponseItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_item: Option<Vec<ClaimResponseAddItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Vec<ClaimResponseTotal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<ClaimResponsePayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds_reserve: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_code: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_note: Option<Vec<ClaimResponseProcessNote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_request: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Vec<ClaimResponseInsurance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<ClaimResponseError>>,
}

impl ClaimResponse {
    /// Create a claim response with its required fields set and everything else absent.
    pub fn new(
        status: FinancialResourceStatusCodes,
        type_: CodeableConcept,
        use_: Use,
        patient: Reference,
        created: DateTime,
        insurer: Reference,
        outcome: ClaimProcessingCodes,
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
            created,
            insurer,
            requestor: None,
            request: None,
            outcome,
            disposition: None,
            pre_auth_ref: None,
            pre_auth_period: None,
            payee_type: None,
            item: None,
            add_item: None,
            adjudication: None,
            total: None,
            payment: None,
            funds_reserve: None,
            form_code: None,
            form: None,
            process_note: None,
            communication_request: None,
            insurance: None,
            error: None,
        }
    }
}

/// Insurer added line items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseAddItem {
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
    pub subdetail_sequence: Option<Vec<PositiveInt>>,
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
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ClaimResponseAddItemDetail>>,
}

impl ClaimResponseAddItem {
    pub fn new(
        product_or_service: CodeableConcept,
        adjudication: Vec<ClaimResponseItemAdjudication>,
    ) -> Self {
        Self {
            product_or_service,
            adjudication,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseAddItemDetail {
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
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ClaimResponseAddItemDetailSubDetail>>,
}

impl ClaimResponseAddItemDetail {
    pub fn new(
        product_or_service: CodeableConcept,
        adjudication: Vec<ClaimResponseItemAdjudication>,
    ) -> Self {
        Self {
            product_or_service,
            adjudication,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseAddItemDetailSubDetail {
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
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
}

impl ClaimResponseAddItemDetailSubDetail {
    pub fn new(
        product_or_service: CodeableConcept,
        adjudication: Vec<ClaimResponseItemAdjudication>,
    ) -> Self {
        Self {
            product_or_service,
            adjudication,
            ..Default::default()
        }
    }
}

/// Processing errors
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_sequence: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_sequence: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail_sequence: Option<PositiveInt>,
    pub code: CodeableConcept,
}

impl ClaimResponseError {
    pub fn new(code: CodeableConcept) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseInsurance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub focal: bool,
    pub coverage: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_arrangement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_response: Option<Reference>,
}

impl ClaimResponseInsurance {
    pub fn new(sequence: PositiveInt, focal: bool, coverage: Reference) -> Self {
        Self {
            sequence,
            focal,
            coverage,
            ..Default::default()
        }
    }
}

/// Adjudication for claim line items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub item_sequence: PositiveInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<PositiveInt>>,
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ClaimResponseItemDetail>>,
}

impl ClaimResponseItem {
    pub fn new(
        item_sequence: PositiveInt,
        adjudication: Vec<ClaimResponseItemAdjudication>,
    ) -> Self {
        Self {
            item_sequence,
            adjudication,
            ..Default::default()
        }
    }
}

/// Adjudication details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItemAdjudication {
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

impl ClaimResponseItemAdjudication {
    pub fn new(category: CodeableConcept) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItemDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub detail_sequence: PositiveInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<PositiveInt>>,
    pub adjudication: Vec<ClaimResponseItemAdjudication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ClaimResponseItemDetailSubDetail>>,
}

impl ClaimResponseItemDetail {
    pub fn new(
        detail_sequence: PositiveInt,
        adjudication: Vec<ClaimResponseItemAdjudication>,
    ) -> Self {
        Self {
            detail_sequence,
            adjudication,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItemDetailSubDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub sub_detail_sequence: PositiveInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<PositiveInt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,
}

impl ClaimResponseItemDetailSubDetail {
    pub fn new(sub_detail_sequence: PositiveInt) -> Self {
        Self {
            sub_detail_sequence,
            ..Default::default()
        }
    }
}

/// Payment details, if paid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponsePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_reason: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

impl ClaimResponsePayment {
    pub fn new(type_: CodeableConcept, amount: Money) -> Self {
        Self {
            type_,
            amount,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseProcessNote {
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
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeableConcept>,
}

impl ClaimResponseProcessNote {
    pub fn new(text: String) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }
}

/// Adjudication totals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseTotal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: CodeableConcept,
    pub amount: Money,
}

impl ClaimResponseTotal {
    pub fn new(category: CodeableConcept, amount: Money) -> Self {
        Self {
            category,
            amount,
            ..Default::default()
        }
    }
}

impl_shape!(ClaimResponse, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "identifier", "status", "type", "subType", "use", "patient", "created",
    "insurer", "requestor", "request", "outcome", "disposition", "preAuthRef", "preAuthPeriod",
    "payeeType", "item", "addItem", "adjudication", "total", "payment", "fundsReserve", "formCode",
    "form", "processNote", "communicationRequest", "insurance", "error",
]);
impl_shape!(ClaimResponseAddItem, BackboneElement, [
    "id", "extension", "modifierExtension", "itemSequence", "detailSequence", "subdetailSequence",
    "provider", "productOrService", "modifier", "programCode", "serviced[x]", "location[x]",
    "quantity", "unitPrice", "factor", "net", "bodySite", "subSite", "noteNumber", "adjudication",
    "detail",
]);
impl_shape!(ClaimResponseAddItemDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "productOrService", "modifier", "quantity", "unitPrice",
    "factor", "net", "noteNumber", "adjudication", "subDetail",
]);
impl_shape!(ClaimResponseAddItemDetailSubDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "productOrService", "modifier", "quantity", "unitPrice",
    "factor", "net", "noteNumber", "adjudication",
]);
impl_shape!(ClaimResponseError, BackboneElement, [
    "id", "extension", "modifierExtension", "itemSequence", "detailSequence", "subDetailSequence",
    "code",
]);
impl_shape!(ClaimResponseInsurance, BackboneElement, [
    "id", "extension", "modifierExtension", "sequence", "focal", "coverage", "businessArrangement",
    "claimResponse",
]);
impl_shape!(ClaimResponseItem, BackboneElement, [
    "id", "extension", "modifierExtension", "itemSequence", "noteNumber", "adjudication", "detail",
]);
impl_shape!(ClaimResponseItemAdjudication, BackboneElement, [
    "id", "extension", "modifierExtension", "category", "reason", "amount", "value",
]);
impl_shape!(ClaimResponseItemDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "detailSequence", "noteNumber", "adjudication",
    "subDetail",
]);
impl_shape!(ClaimResponseItemDetailSubDetail, BackboneElement, [
    "id", "extension", "modifierExtension", "subDetailSequence", "noteNumber", "adjudication",
]);
impl_shape!(ClaimResponsePayment, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "adjustment", "adjustmentReason", "date",
    "amount", "identifier",
]);
impl_shape!(ClaimResponseProcessNote, BackboneElement, [
    "id", "extension", "modifierExtension", "number", "type", "text", "language",
]);
impl_shape!(ClaimResponseTotal, BackboneElement, [
    "id", "extension", "modifierExtension", "category", "amount",
]);
