//! FHIR code vocabularies
//!
//! One enum per required binding used by the R4 shapes. Variants serialize as
//! the exact FHIR code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an action may be repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionCardinalityBehavior {
    Single,
    Multiple,
}

impl ActionCardinalityBehavior {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl fmt::Display for ActionCardinalityBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Kind of condition attached to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionConditionKind {
    Applicability,
    Start,
    Stop,
}

impl ActionConditionKind {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Applicability => "applicability",
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for ActionConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How the child actions of a group are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionGroupingBehavior {
    VisualGroup,
    LogicalGroup,
    SentenceGroup,
}

impl ActionGroupingBehavior {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::VisualGroup => "visual-group",
            Self::LogicalGroup => "logical-group",
            Self::SentenceGroup => "sentence-group",
        }
    }
}

impl fmt::Display for ActionGroupingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Type of participant in an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionParticipantType {
    Patient,
    Practitioner,
    RelatedPerson,
    Device,
}

impl ActionParticipantType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Practitioner => "practitioner",
            Self::RelatedPerson => "related-person",
            Self::Device => "device",
        }
    }
}

impl fmt::Display for ActionParticipantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Whether an action should be preselected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionPrecheckBehavior {
    Yes,
    No,
}

impl ActionPrecheckBehavior {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for ActionPrecheckBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Timing relationship between two actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionRelationshipType {
    BeforeStart,
    Before,
    BeforeEnd,
    ConcurrentWithStart,
    Concurrent,
    ConcurrentWithEnd,
    AfterStart,
    After,
    AfterEnd,
}

impl ActionRelationshipType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::BeforeStart => "before-start",
            Self::Before => "before",
            Self::BeforeEnd => "before-end",
            Self::ConcurrentWithStart => "concurrent-with-start",
            Self::Concurrent => "concurrent",
            Self::ConcurrentWithEnd => "concurrent-with-end",
            Self::AfterStart => "after-start",
            Self::After => "after",
            Self::AfterEnd => "after-end",
        }
    }
}

impl fmt::Display for ActionRelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Whether an action is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionRequiredBehavior {
    Must,
    Could,
    MustUnlessDocumented,
}

impl ActionRequiredBehavior {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Must => "must",
            Self::Could => "could",
            Self::MustUnlessDocumented => "must-unless-documented",
        }
    }
}

impl fmt::Display for ActionRequiredBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How many child actions may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionSelectionBehavior {
    Any,
    All,
    AllOrNone,
    ExactlyOne,
    AtMostOne,
    OneOrMore,
}

impl ActionSelectionBehavior {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
            Self::AllOrNone => "all-or-none",
            Self::ExactlyOne => "exactly-one",
            Self::AtMostOne => "at-most-one",
            Self::OneOrMore => "one-or-more",
        }
    }
}

impl fmt::Display for ActionSelectionBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Distinguishes postal from physical addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressType {
    Postal,
    Physical,
    Both,
}

impl AddressType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Postal => "postal",
            Self::Physical => "physical",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Purpose of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressUse {
    Home,
    Work,
    Temp,
    Old,
    Billing,
}

impl AddressUse {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Temp => "temp",
            Self::Old => "old",
            Self::Billing => "billing",
        }
    }
}

impl fmt::Display for AddressUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Whether an assertion applies to the request or the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssertionDirectionType {
    Response,
    Request,
}

impl AssertionDirectionType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Response => "response",
            Self::Request => "request",
        }
    }
}

impl fmt::Display for AssertionDirectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Comparison used by a test assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssertionOperatorType {
    Equals,
    NotEquals,
    In,
    NotIn,
    GreaterThan,
    LessThan,
    Empty,
    NotEmpty,
    Contains,
    NotContains,
    Eval,
}

impl AssertionOperatorType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::Empty => "empty",
            Self::NotEmpty => "notEmpty",
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::Eval => "eval",
        }
    }
}

impl fmt::Display for AssertionOperatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Expected HTTP response class of a test assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssertionResponseTypes {
    Okay,
    Created,
    NoContent,
    NotModified,
    Bad,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    Gone,
    PreconditionFailed,
    Unprocessable,
}

impl AssertionResponseTypes {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Okay => "okay",
            Self::Created => "created",
            Self::NoContent => "noContent",
            Self::NotModified => "notModified",
            Self::Bad => "bad",
            Self::Forbidden => "forbidden",
            Self::NotFound => "notFound",
            Self::MethodNotAllowed => "methodNotAllowed",
            Self::Conflict => "conflict",
            Self::Gone => "gone",
            Self::PreconditionFailed => "preconditionFailed",
            Self::Unprocessable => "unprocessable",
        }
    }
}

impl fmt::Display for AssertionResponseTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Purpose of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
}

impl BundleType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Message => "message",
            Self::Transaction => "transaction",
            Self::TransactionResponse => "transaction-response",
            Self::Batch => "batch",
            Self::BatchResponse => "batch-response",
            Self::History => "history",
            Self::Searchset => "searchset",
            Self::Collection => "collection",
        }
    }
}

impl fmt::Display for BundleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Result of claim processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimProcessingCodes {
    Queued,
    Complete,
    Error,
    Partial,
}

impl ClaimProcessingCodes {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Complete => "complete",
            Self::Error => "error",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for ClaimProcessingCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How much of a code system is represented by the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeSystemContentMode {
    NotPresent,
    Example,
    Fragment,
    Complete,
    Supplement,
}

impl CodeSystemContentMode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::NotPresent => "not-present",
            Self::Example => "example",
            Self::Fragment => "fragment",
            Self::Complete => "complete",
            Self::Supplement => "supplement",
        }
    }
}

impl fmt::Display for CodeSystemContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Meaning of the concept hierarchy in a code system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeSystemHierarchyMeaning {
    GroupedBy,
    IsA,
    PartOf,
    ClassifiedWith,
}

impl CodeSystemHierarchyMeaning {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::GroupedBy => "grouped-by",
            Self::IsA => "is-a",
            Self::PartOf => "part-of",
            Self::ClassifiedWith => "classified-with",
        }
    }
}

impl fmt::Display for CodeSystemHierarchyMeaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Telecommunications form of a contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactPointSystem {
    Phone,
    Fax,
    Email,
    Pager,
    Url,
    Sms,
    Other,
}

impl ContactPointSystem {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Fax => "fax",
            Self::Email => "email",
            Self::Pager => "pager",
            Self::Url => "url",
            Self::Sms => "sms",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ContactPointSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Purpose of a contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactPointUse {
    Home,
    Work,
    Temp,
    Old,
    Mobile,
}

impl ContactPointUse {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Temp => "temp",
            Self::Old => "old",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ContactPointUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Role of a contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContributorType {
    Author,
    Editor,
    Reviewer,
    Endorser,
}

impl ContributorType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Editor => "editor",
            Self::Reviewer => "reviewer",
            Self::Endorser => "endorser",
        }
    }
}

impl fmt::Display for ContributorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DaysOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DaysOfWeek {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }
}

impl fmt::Display for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How multiple enableWhen conditions combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnableWhenBehavior {
    All,
    Any,
}

impl EnableWhenBehavior {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for EnableWhenBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Status of the patient at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncounterLocationStatus {
    Planned,
    Active,
    Reserved,
    Completed,
}

impl EncounterLocationStatus {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Reserved => "reserved",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for EncounterLocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Current state of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncounterStatus {
    Planned,
    Arrived,
    Triaged,
    InProgress,
    Onleave,
    Finished,
    Cancelled,
    EnteredInError,
    Unknown,
}

impl EncounterStatus {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Arrived => "arrived",
            Self::Triaged => "triaged",
            Self::InProgress => "in-progress",
            Self::Onleave => "onleave",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
            Self::EnteredInError => "entered-in-error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EncounterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Status of an explanation of benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplanationOfBenefitStatus {
    Active,
    Cancelled,
    Draft,
    EnteredInError,
}

impl ExplanationOfBenefitStatus {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Draft => "draft",
            Self::EnteredInError => "entered-in-error",
        }
    }
}

impl fmt::Display for ExplanationOfBenefitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Operator of a value set or code system filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Equal,
    IsA,
    DescendentOf,
    IsNotA,
    Regex,
    In,
    NotIn,
    Generalizes,
    Exists,
}

impl FilterOperator {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::IsA => "is-a",
            Self::DescendentOf => "descendent-of",
            Self::IsNotA => "is-not-a",
            Self::Regex => "regex",
            Self::In => "in",
            Self::NotIn => "not-in",
            Self::Generalizes => "generalizes",
            Self::Exists => "exists",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Status of a financial resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancialResourceStatusCodes {
    Active,
    Cancelled,
    Draft,
    EnteredInError,
}

impl FinancialResourceStatusCodes {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Draft => "draft",
            Self::EnteredInError => "entered-in-error",
        }
    }
}

impl fmt::Display for FinancialResourceStatusCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// HTTP verb of a bundle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HttpVerb {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "HEAD")]
    Head,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "PATCH")]
    Patch,
}

impl HttpVerb {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Purpose of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
    Old,
}

impl IdentifierUse {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Usual => "usual",
            Self::Official => "official",
            Self::Temp => "temp",
            Self::Secondary => "secondary",
            Self::Old => "old",
        }
    }
}

impl fmt::Display for IdentifierUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Status of a medication knowledge entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationKnowledgeStatusCodes {
    Active,
    Inactive,
    EnteredInError,
}

impl MedicationKnowledgeStatusCodes {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::EnteredInError => "entered-in-error",
        }
    }
}

impl fmt::Display for MedicationKnowledgeStatusCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Purpose of a human name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameUse {
    Usual,
    Official,
    Temp,
    Nickname,
    Anonymous,
    Old,
    Maiden,
}

impl NameUse {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Usual => "usual",
            Self::Official => "official",
            Self::Temp => "temp",
            Self::Nickname => "nickname",
            Self::Anonymous => "anonymous",
            Self::Old => "old",
            Self::Maiden => "maiden",
        }
    }
}

impl fmt::Display for NameUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How a narrative was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativeStatus {
    Generated,
    Extensions,
    Additional,
    Empty,
}

impl NarrativeStatus {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Extensions => "extensions",
            Self::Additional => "additional",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for NarrativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Purpose of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteType {
    Display,
    Print,
    Printoper,
}

impl NoteType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Print => "print",
            Self::Printoper => "printoper",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Whether a parameter is an input or an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationParameterUse {
    In,
    Out,
}

impl OperationParameterUse {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for OperationParameterUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Orientation of a reference sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationType {
    Sense,
    Antisense,
}

impl OrientationType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Sense => "sense",
            Self::Antisense => "antisense",
        }
    }
}

impl fmt::Display for OrientationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Value type of a code system property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Code,
    #[serde(rename = "Coding")]
    Coding,
    String,
    Integer,
    Boolean,
    #[serde(rename = "dateTime")]
    DateTime,
    Decimal,
}

impl PropertyType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Coding => "Coding",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::DateTime => "dateTime",
            Self::Decimal => "decimal",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Lifecycle status of a conformance or knowledge artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationStatus {
    Draft,
    Active,
    Retired,
    Unknown,
}

impl PublicationStatus {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Retired => "retired",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Kind of variant a sequence quality block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityType {
    Indel,
    Snp,
    Unknown,
}

impl QualityType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Indel => "indel",
            Self::Snp => "snp",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for QualityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How a quantity value should be understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityComparator {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
}

impl QuantityComparator {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::GreaterThan => ">",
        }
    }
}

impl fmt::Display for QuantityComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Comparison used by an enableWhen condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionnaireItemOperator {
    Exists,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl QuestionnaireItemOperator {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for QuestionnaireItemOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Type of a questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionnaireItemType {
    Group,
    Display,
    Question,
    Boolean,
    Decimal,
    Integer,
    Date,
    #[serde(rename = "dateTime")]
    DateTime,
    Time,
    String,
    Text,
    Url,
    Choice,
    OpenChoice,
    Attachment,
    Reference,
    Quantity,
}

impl QuestionnaireItemType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Display => "display",
            Self::Question => "question",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::String => "string",
            Self::Text => "text",
            Self::Url => "url",
            Self::Choice => "choice",
            Self::OpenChoice => "open-choice",
            Self::Attachment => "attachment",
            Self::Reference => "reference",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for QuestionnaireItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Relationship to a related artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelatedArtifactType {
    Documentation,
    Justification,
    Citation,
    Predecessor,
    Successor,
    DerivedFrom,
    DependsOn,
    ComposedOf,
}

impl RelatedArtifactType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Justification => "justification",
            Self::Citation => "citation",
            Self::Predecessor => "predecessor",
            Self::Successor => "successor",
            Self::DerivedFrom => "derived-from",
            Self::DependsOn => "depends-on",
            Self::ComposedOf => "composed-of",
        }
    }
}

impl fmt::Display for RelatedArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Type of an external sequence repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryType {
    Directlink,
    Openapi,
    Login,
    Oauth,
    Other,
}

impl RepositoryType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Directlink => "directlink",
            Self::Openapi => "openapi",
            Self::Login => "login",
            Self::Oauth => "oauth",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RepositoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Urgency of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestPriority {
    Routine,
    Urgent,
    Asap,
    Stat,
}

impl RequestPriority {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Urgent => "urgent",
            Self::Asap => "asap",
            Self::Stat => "stat",
        }
    }
}

impl fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Why an entry is in a search result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchEntryMode {
    Match,
    Include,
    Outcome,
}

impl SearchEntryMode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Include => "include",
            Self::Outcome => "outcome",
        }
    }
}

impl fmt::Display for SearchEntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Kind of molecular sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceType {
    Aa,
    Dna,
    Rna,
}

impl SequenceType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Aa => "aa",
            Self::Dna => "dna",
            Self::Rna => "rna",
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Direction of a data requirement sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Strand of a reference sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrandType {
    Watson,
    Crick,
}

impl StrandType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Watson => "watson",
            Self::Crick => "crick",
        }
    }
}

impl fmt::Display for StrandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How a target context is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureMapContextType {
    Type,
    Variable,
}

impl StructureMapContextType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Variable => "variable",
        }
    }
}

impl fmt::Display for StructureMapContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Whether a group is a default type mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureMapGroupTypeMode {
    None,
    Types,
    TypeAndTypes,
}

impl StructureMapGroupTypeMode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Types => "types",
            Self::TypeAndTypes => "type-and-types",
        }
    }
}

impl fmt::Display for StructureMapGroupTypeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Whether a group input is a source or a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureMapInputMode {
    Source,
    Target,
}

impl StructureMapInputMode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for StructureMapInputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How a referenced structure is used by a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureMapModelMode {
    Source,
    Queried,
    Target,
    Produced,
}

impl StructureMapModelMode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Queried => "queried",
            Self::Target => "target",
            Self::Produced => "produced",
        }
    }
}

impl fmt::Display for StructureMapModelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How a source list is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureMapSourceListMode {
    First,
    #[serde(rename = "not_first")]
    NotFirst,
    Last,
    #[serde(rename = "not_last")]
    NotLast,
    #[serde(rename = "only_one")]
    OnlyOne,
}

impl StructureMapSourceListMode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::NotFirst => "not_first",
            Self::Last => "last",
            Self::NotLast => "not_last",
            Self::OnlyOne => "only_one",
        }
    }
}

impl fmt::Display for StructureMapSourceListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// How a target list is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureMapTargetListMode {
    First,
    Share,
    Last,
    Collate,
}

impl StructureMapTargetListMode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Share => "share",
            Self::Last => "last",
            Self::Collate => "collate",
        }
    }
}

impl fmt::Display for StructureMapTargetListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Transform applied to produce a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StructureMapTransform {
    Create,
    Copy,
    Truncate,
    Escape,
    Cast,
    Append,
    Translate,
    Reference,
    DateOp,
    Uuid,
    Pointer,
    Evaluate,
    Cc,
    C,
    Qty,
    Id,
    Cp,
}

impl StructureMapTransform {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Copy => "copy",
            Self::Truncate => "truncate",
            Self::Escape => "escape",
            Self::Cast => "cast",
            Self::Append => "append",
            Self::Translate => "translate",
            Self::Reference => "reference",
            Self::DateOp => "dateOp",
            Self::Uuid => "uuid",
            Self::Pointer => "pointer",
            Self::Evaluate => "evaluate",
            Self::Cc => "cc",
            Self::C => "c",
            Self::Qty => "qty",
            Self::Id => "id",
            Self::Cp => "cp",
        }
    }
}

impl fmt::Display for StructureMapTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Current state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Draft,
    Requested,
    Received,
    Accepted,
    Rejected,
    Ready,
    Cancelled,
    InProgress,
    OnHold,
    Failed,
    Completed,
    EnteredInError,
}

impl TaskStatus {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Requested => "requested",
            Self::Received => "received",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Ready => "ready",
            Self::Cancelled => "cancelled",
            Self::InProgress => "in-progress",
            Self::OnHold => "on-hold",
            Self::Failed => "failed",
            Self::Completed => "completed",
            Self::EnteredInError => "entered-in-error",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// HTTP method of a test operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestScriptRequestMethodCode {
    Delete,
    Get,
    Options,
    Patch,
    Post,
    Put,
    Head,
}

impl TestScriptRequestMethodCode {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Get => "get",
            Self::Options => "options",
            Self::Patch => "patch",
            Self::Post => "post",
            Self::Put => "put",
            Self::Head => "head",
        }
    }
}

impl fmt::Display for TestScriptRequestMethodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Kind of event a trigger reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerType {
    NamedEvent,
    Periodic,
    DataChanged,
    DataAdded,
    DataModified,
    DataRemoved,
    DataAccessed,
    DataAccessEnded,
}

impl TriggerType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::NamedEvent => "named-event",
            Self::Periodic => "periodic",
            Self::DataChanged => "data-changed",
            Self::DataAdded => "data-added",
            Self::DataModified => "data-modified",
            Self::DataRemoved => "data-removed",
            Self::DataAccessed => "data-accessed",
            Self::DataAccessEnded => "data-access-ended",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Unit of time used in timing schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitsOfTime {
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "min")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "wk")]
    Week,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "a")]
    Year,
}

impl UnitsOfTime {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "wk",
            Self::Month => "mo",
            Self::Year => "a",
        }
    }
}

impl fmt::Display for UnitsOfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Whether a claim is an actual claim or an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Use {
    Claim,
    Preauthorization,
    Predetermination,
}

impl Use {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Claim => "claim",
            Self::Preauthorization => "preauthorization",
            Self::Predetermination => "predetermination",
        }
    }
}

impl fmt::Display for Use {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Name of an R4 resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Account,
    ActivityDefinition,
    AdverseEvent,
    AllergyIntolerance,
    Appointment,
    AppointmentResponse,
    AuditEvent,
    Basic,
    Binary,
    BiologicallyDerivedProduct,
    BodyStructure,
    Bundle,
    CapabilityStatement,
    CarePlan,
    CareTeam,
    CatalogEntry,
    ChargeItem,
    ChargeItemDefinition,
    Claim,
    ClaimResponse,
    ClinicalImpression,
    CodeSystem,
    Communication,
    CommunicationRequest,
    CompartmentDefinition,
    Composition,
    ConceptMap,
    Condition,
    Consent,
    Contract,
    Coverage,
    CoverageEligibilityRequest,
    CoverageEligibilityResponse,
    DetectedIssue,
    Device,
    DeviceDefinition,
    DeviceMetric,
    DeviceRequest,
    DeviceUseStatement,
    DiagnosticReport,
    DocumentManifest,
    DocumentReference,
    DomainResource,
    EffectEvidenceSynthesis,
    Encounter,
    Endpoint,
    EnrollmentRequest,
    EnrollmentResponse,
    EpisodeOfCare,
    EventDefinition,
    Evidence,
    EvidenceVariable,
    ExampleScenario,
    ExplanationOfBenefit,
    FamilyMemberHistory,
    Flag,
    Goal,
    GraphDefinition,
    Group,
    GuidanceResponse,
    HealthcareService,
    ImagingStudy,
    Immunization,
    ImmunizationEvaluation,
    ImmunizationRecommendation,
    ImplementationGuide,
    InsurancePlan,
    Invoice,
    Library,
    Linkage,
    List,
    Location,
    Measure,
    MeasureReport,
    Media,
    Medication,
    MedicationAdministration,
    MedicationDispense,
    MedicationKnowledge,
    MedicationRequest,
    MedicationStatement,
    MedicinalProduct,
    MedicinalProductAuthorization,
    MedicinalProductContraindication,
    MedicinalProductIndication,
    MedicinalProductIngredient,
    MedicinalProductInteraction,
    MedicinalProductManufactured,
    MedicinalProductPackaged,
    MedicinalProductPharmaceutical,
    MedicinalProductUndesirableEffect,
    MessageDefinition,
    MessageHeader,
    MolecularSequence,
    NamingSystem,
    NutritionOrder,
    Observation,
    ObservationDefinition,
    OperationDefinition,
    OperationOutcome,
    Organization,
    OrganizationAffiliation,
    Parameters,
    Patient,
    PaymentNotice,
    PaymentReconciliation,
    Person,
    PlanDefinition,
    Practitioner,
    PractitionerRole,
    Procedure,
    Provenance,
    Questionnaire,
    QuestionnaireResponse,
    RelatedPerson,
    RequestGroup,
    ResearchDefinition,
    ResearchElementDefinition,
    ResearchStudy,
    ResearchSubject,
    Resource,
    RiskAssessment,
    RiskEvidenceSynthesis,
    Schedule,
    SearchParameter,
    ServiceRequest,
    Slot,
    Specimen,
    SpecimenDefinition,
    StructureDefinition,
    StructureMap,
    Subscription,
    Substance,
    SubstanceNucleicAcid,
    SubstancePolymer,
    SubstanceProtein,
    SubstanceReferenceInformation,
    SubstanceSourceMaterial,
    SubstanceSpecification,
    SupplyDelivery,
    SupplyRequest,
    Task,
    TerminologyCapabilities,
    TestReport,
    TestScript,
    ValueSet,
    VerificationResult,
    VisionPrescription,
}

impl ResourceType {
    /// Wire code of this value.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::ActivityDefinition => "ActivityDefinition",
            Self::AdverseEvent => "AdverseEvent",
            Self::AllergyIntolerance => "AllergyIntolerance",
            Self::Appointment => "Appointment",
            Self::AppointmentResponse => "AppointmentResponse",
            Self::AuditEvent => "AuditEvent",
            Self::Basic => "Basic",
            Self::Binary => "Binary",
            Self::BiologicallyDerivedProduct => "BiologicallyDerivedProduct",
            Self::BodyStructure => "BodyStructure",
            Self::Bundle => "Bundle",
            Self::CapabilityStatement => "CapabilityStatement",
            Self::CarePlan => "CarePlan",
            Self::CareTeam => "CareTeam",
            Self::CatalogEntry => "CatalogEntry",
            Self::ChargeItem => "ChargeItem",
            Self::ChargeItemDefinition => "ChargeItemDefinition",
            Self::Claim => "Claim",
            Self::ClaimResponse => "ClaimResponse",
            Self::ClinicalImpression => "ClinicalImpression",
            Self::CodeSystem => "CodeSystem",
            Self::Communication => "Communication",
            Self::CommunicationRequest => "CommunicationRequest",
            Self::CompartmentDefinition => "CompartmentDefinition",
            Self::Composition => "Composition",
            Self::ConceptMap => "ConceptMap",
            Self::Condition => "Condition",
            Self::Consent => "Consent",
            Self::Contract => "Contract",
            Self::Coverage => "Coverage",
            Self::CoverageEligibilityRequest => "CoverageEligibilityRequest",
            Self::CoverageEligibilityResponse => "CoverageEligibilityResponse",
            Self::DetectedIssue => "DetectedIssue",
            Self::Device => "Device",
            Self::DeviceDefinition => "DeviceDefinition",
            Self::DeviceMetric => "DeviceMetric",
            Self::DeviceRequest => "DeviceRequest",
            Self::DeviceUseStatement => "DeviceUseStatement",
            Self::DiagnosticReport => "DiagnosticReport",
            Self::DocumentManifest => "DocumentManifest",
            Self::DocumentReference => "DocumentReference",
            Self::DomainResource => "DomainResource",
            Self::EffectEvidenceSynthesis => "EffectEvidenceSynthesis",
            Self::Encounter => "Encounter",
            Self::Endpoint => "Endpoint",
            Self::EnrollmentRequest => "EnrollmentRequest",
            Self::EnrollmentResponse => "EnrollmentResponse",
            Self::EpisodeOfCare => "EpisodeOfCare",
            Self::EventDefinition => "EventDefinition",
            Self::Evidence => "Evidence",
            Self::EvidenceVariable => "EvidenceVariable",
            Self::ExampleScenario => "ExampleScenario",
            Self::ExplanationOfBenefit => "ExplanationOfBenefit",
            Self::FamilyMemberHistory => "FamilyMemberHistory",
            Self::Flag => "Flag",
            Self::Goal => "Goal",
            Self::GraphDefinition => "GraphDefinition",
            Self::Group => "Group",
            Self::GuidanceResponse => "GuidanceResponse",
            Self::HealthcareService => "HealthcareService",
            Self::ImagingStudy => "ImagingStudy",
            Self::Immunization => "Immunization",
            Self::ImmunizationEvaluation => "ImmunizationEvaluation",
            Self::ImmunizationRecommendation => "ImmunizationRecommendation",
            Self::ImplementationGuide => "ImplementationGuide",
            Self::InsurancePlan => "InsurancePlan",
            Self::Invoice => "Invoice",
            Self::Library => "Library",
            Self::Linkage => "Linkage",
            Self::List => "List",
            Self::Location => "Location",
            Self::Measure => "Measure",
            Self::MeasureReport => "MeasureReport",
            Self::Media => "Media",
            Self::Medication => "Medication",
            Self::MedicationAdministration => "MedicationAdministration",
            Self::MedicationDispense => "MedicationDispense",
            Self::MedicationKnowledge => "MedicationKnowledge",
            Self::MedicationRequest => "MedicationRequest",
            Self::MedicationStatement => "MedicationStatement",
            Self::MedicinalProduct => "MedicinalProduct",
            Self::MedicinalProductAuthorization => "MedicinalProductAuthorization",
            Self::MedicinalProductContraindication => "MedicinalProductContraindication",
            Self::MedicinalProductIndication => "MedicinalProductIndication",
            Self::MedicinalProductIngredient => "MedicinalProductIngredient",
            Self::MedicinalProductInteraction => "MedicinalProductInteraction",
            Self::MedicinalProductManufactured => "MedicinalProductManufactured",
            Self::MedicinalProductPackaged => "MedicinalProductPackaged",
            Self::MedicinalProductPharmaceutical => "MedicinalProductPharmaceutical",
            Self::MedicinalProductUndesirableEffect => "MedicinalProductUndesirableEffect",
            Self::MessageDefinition => "MessageDefinition",
            Self::MessageHeader => "MessageHeader",
            Self::MolecularSequence => "MolecularSequence",
            Self::NamingSystem => "NamingSystem",
            Self::NutritionOrder => "NutritionOrder",
            Self::Observation => "Observation",
            Self::ObservationDefinition => "ObservationDefinition",
            Self::OperationDefinition => "OperationDefinition",
            Self::OperationOutcome => "OperationOutcome",
            Self::Organization => "Organization",
            Self::OrganizationAffiliation => "OrganizationAffiliation",
            Self::Parameters => "Parameters",
            Self::Patient => "Patient",
            Self::PaymentNotice => "PaymentNotice",
            Self::PaymentReconciliation => "PaymentReconciliation",
            Self::Person => "Person",
            Self::PlanDefinition => "PlanDefinition",
            Self::Practitioner => "Practitioner",
            Self::PractitionerRole => "PractitionerRole",
            Self::Procedure => "Procedure",
            Self::Provenance => "Provenance",
            Self::Questionnaire => "Questionnaire",
            Self::QuestionnaireResponse => "QuestionnaireResponse",
            Self::RelatedPerson => "RelatedPerson",
            Self::RequestGroup => "RequestGroup",
            Self::ResearchDefinition => "ResearchDefinition",
            Self::ResearchElementDefinition => "ResearchElementDefinition",
            Self::ResearchStudy => "ResearchStudy",
            Self::ResearchSubject => "ResearchSubject",
            Self::Resource => "Resource",
            Self::RiskAssessment => "RiskAssessment",
            Self::RiskEvidenceSynthesis => "RiskEvidenceSynthesis",
            Self::Schedule => "Schedule",
            Self::SearchParameter => "SearchParameter",
            Self::ServiceRequest => "ServiceRequest",
            Self::Slot => "Slot",
            Self::Specimen => "Specimen",
            Self::SpecimenDefinition => "SpecimenDefinition",
            Self::StructureDefinition => "StructureDefinition",
            Self::StructureMap => "StructureMap",
            Self::Subscription => "Subscription",
            Self::Substance => "Substance",
            Self::SubstanceNucleicAcid => "SubstanceNucleicAcid",
            Self::SubstancePolymer => "SubstancePolymer",
            Self::SubstanceProtein => "SubstanceProtein",
            Self::SubstanceReferenceInformation => "SubstanceReferenceInformation",
            Self::SubstanceSourceMaterial => "SubstanceSourceMaterial",
            Self::SubstanceSpecification => "SubstanceSpecification",
            Self::SupplyDelivery => "SupplyDelivery",
            Self::SupplyRequest => "SupplyRequest",
            Self::Task => "Task",
            Self::TerminologyCapabilities => "TerminologyCapabilities",
            Self::TestReport => "TestReport",
            Self::TestScript => "TestScript",
            Self::ValueSet => "ValueSet",
            Self::VerificationResult => "VerificationResult",
            Self::VisionPrescription => "VisionPrescription",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(serde_json::to_value(HttpVerb::Delete).unwrap(), "DELETE");
        assert_eq!(serde_json::to_value(FilterOperator::Equal).unwrap(), "=");
        assert_eq!(serde_json::to_value(UnitsOfTime::Year).unwrap(), "a");
        assert_eq!(
            serde_json::to_value(StructureMapSourceListMode::NotFirst).unwrap(),
            "not_first"
        );
        assert_eq!(serde_json::to_value(QuestionnaireItemType::DateTime).unwrap(), "dateTime");
        assert_eq!(
            serde_json::to_value(ResourceType::MolecularSequence).unwrap(),
            "MolecularSequence"
        );
    }

    #[test]
    fn test_as_code_matches_serde() {
        for op in [
            QuestionnaireItemOperator::Exists,
            QuestionnaireItemOperator::NotEqual,
            QuestionnaireItemOperator::GreaterOrEqual,
        ] {
            assert_eq!(serde_json::to_value(op).unwrap(), op.as_code());
            assert_eq!(op.to_string(), op.as_code());
        }
        assert_eq!(TaskStatus::EnteredInError.to_string(), "entered-in-error");
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = serde_json::from_value::<PublicationStatus>(serde_json::json!("published"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown variant `published`"));

        let status: PublicationStatus =
            serde_json::from_value(serde_json::json!("retired")).unwrap();
        assert_eq!(status, PublicationStatus::Retired);
    }
}
