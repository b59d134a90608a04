//! General-purpose FHIR datatypes

use crate::r4::choice;
use crate::r4::codes::{
    AddressType, AddressUse, ContactPointSystem, ContactPointUse, DaysOfWeek, IdentifierUse,
    NameUse, QuantityComparator, UnitsOfTime,
};
use crate::r4::datatypes::{Extension, Reference};
use crate::r4::primitives::{DateTime, Decimal, Instant, PositiveInt, Time, UnsignedInt};
use crate::shape::impl_shape;
use serde::{Deserialize, Serialize};

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,
}

/// Concept - reference to a terminology or just text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An identifier intended for computation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<IdentifierUse>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Organization that issued id (boxed: `Reference` itself holds an `Identifier`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Box<Reference>>,
}

/// Time range defined by start and end date/time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime>,
}

/// Declares `Quantity` and the datatypes that share its elements, differing
/// only in the constraints FHIR places on them.
macro_rules! quantity_shapes {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {$(
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub extension: Option<Vec<Extension>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub value: Option<Decimal>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub comparator: Option<QuantityComparator>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub unit: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub system: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub code: Option<String>,
        }

        impl_shape!($name, ComplexType, [
            "id", "extension", "value", "comparator", "unit", "system", "code",
        ]);
    )*};
}

quantity_shapes! {
    /// A measured amount (or an amount that can potentially be measured)
    Quantity,
    /// A duration of time during which an organism (or a process) has existed
    Age,
    /// A measured amount of discrete items
    Count,
    /// A length, a measured amount of distance
    Distance,
    /// A length of time
    Duration,
}

/// An amount of economic utility in some recognized currency
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Set of values bounded by low and high
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,
}

/// A ratio of two Quantity values - a numerator and a denominator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,
}

/// Content in a format defined elsewhere
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<UnsignedInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<DateTime>,
}

/// An address expressed using postal conventions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<AddressUse>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<AddressType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Details of a Technology mediated contact point (phone, fax, email, etc.)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<ContactPointUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Name of a human - parts and usage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<NameUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Text node with attribution
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub author: Option<AnnotationAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime>,
    pub text: String,
}

impl Annotation {
    pub fn new(text: String) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }
}

/// `author[x]` of `Annotation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationAuthor {
    #[serde(rename = "authorReference")]
    Reference(Reference),
    #[serde(rename = "authorString")]
    String(String),
}

impl AnnotationAuthor {
    /// Type suffix of the populated member, e.g. `"Reference"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Reference(_) => "Reference",
            Self::String(_) => "String",
        }
    }
}

/// A series of measurements taken by a device
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    pub origin: Quantity,
    pub period: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<Decimal>,
    pub dimensions: PositiveInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl SampledData {
    pub fn new(origin: Quantity, period: Decimal, dimensions: PositiveInt) -> Self {
        Self {
            origin,
            period,
            dimensions,
            ..Default::default()
        }
    }
}

/// A Signature - XML DigSig, JWS, Graphical image of signature, etc.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(rename = "type")]
    pub type_: Vec<Coding>,
    pub when: Instant,
    pub who: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl Signature {
    pub fn new(type_: Vec<Coding>, when: Instant, who: Reference) -> Self {
        Self {
            type_,
            when,
            who,
            ..Default::default()
        }
    }
}

/// A timing schedule that specifies an event that may occur multiple times
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<DateTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TimingRepeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
}

/// When the event is to occur
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingRepeat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(flatten, deserialize_with = "choice::optional")]
    pub bounds: Option<TimingRepeatBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_max: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<UnitsOfTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<PositiveInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<UnitsOfTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Vec<DaysOfWeek>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<Vec<Time>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<UnsignedInt>,
}

/// `bounds[x]` of `TimingRepeat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimingRepeatBounds {
    #[serde(rename = "boundsDuration")]
    Duration(Duration),
    #[serde(rename = "boundsRange")]
    Range(Range),
    #[serde(rename = "boundsPeriod")]
    Period(Period),
}

impl TimingRepeatBounds {
    /// Type suffix of the populated member, e.g. `"Duration"`.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Duration(_) => "Duration",
            Self::Range(_) => "Range",
            Self::Period(_) => "Period",
        }
    }
}

impl_shape!(Coding, ComplexType, [
    "id", "extension", "system", "version", "code", "display", "userSelected",
]);
impl_shape!(CodeableConcept, ComplexType, ["id", "extension", "coding", "text"]);
impl_shape!(Identifier, ComplexType, [
    "id", "extension", "use", "type", "system", "value", "period", "assigner",
]);
impl_shape!(Period, ComplexType, ["id", "extension", "start", "end"]);
impl_shape!(Money, ComplexType, ["id", "extension", "value", "currency"]);
impl_shape!(Range, ComplexType, ["id", "extension", "low", "high"]);
impl_shape!(Ratio, ComplexType, ["id", "extension", "numerator", "denominator"]);
impl_shape!(Attachment, ComplexType, [
    "id", "extension", "contentType", "language", "data", "url", "size", "hash", "title",
    "creation",
]);
impl_shape!(Address, ComplexType, [
    "id", "extension", "use", "type", "text", "line", "city", "district", "state", "postalCode",
    "country", "period",
]);
impl_shape!(ContactPoint, ComplexType, [
    "id", "extension", "system", "value", "use", "rank", "period",
]);
impl_shape!(HumanName, ComplexType, [
    "id", "extension", "use", "text", "family", "given", "prefix", "suffix", "period",
]);
impl_shape!(Annotation, ComplexType, ["id", "extension", "author[x]", "time", "text"]);
impl_shape!(SampledData, ComplexType, [
    "id", "extension", "origin", "period", "factor", "lowerLimit", "upperLimit", "dimensions",
    "data",
]);
impl_shape!(Signature, ComplexType, [
    "id", "extension", "type", "when", "who", "onBehalfOf", "targetFormat", "sigFormat", "data",
]);
impl_shape!(Timing, ComplexType, [
    "id", "extension", "modifierExtension", "event", "repeat", "code",
]);
impl_shape!(TimingRepeat, BackboneElement, [
    "id", "extension", "bounds[x]", "count", "countMax", "duration", "durationMax", "durationUnit",
    "frequency", "frequencyMax", "period", "periodMax", "periodUnit", "dayOfWeek", "timeOfDay",
    "when", "offset",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{registry, FhirShape};
    use serde_json::json;

    #[test]
    fn test_quantity_family_shares_elements() {
        for name in ["Quantity", "Age", "Count", "Distance", "Duration"] {
            let info = registry().require(name).unwrap();
            assert_eq!(info.name, name);
            assert_eq!(info.fields, Quantity::FIELDS);
        }
        // Simple quantities are plain `Quantity` values without a comparator.
        assert!(!registry().contains("SimpleQuantity"));
    }

    #[test]
    fn test_age_with_comparator() {
        let age: Age = serde_json::from_value(json!({
            "value": 65,
            "comparator": ">=",
            "unit": "a",
            "system": "http://unitsofmeasure.org"
        }))
        .unwrap();
        assert_eq!(age.comparator, Some(QuantityComparator::GreaterOrEqual));
        assert_eq!(age.value, Some(Decimal::from(65)));
        assert_eq!(serde_json::to_value(&age).unwrap()["comparator"], ">=");
    }

    #[test]
    fn test_range_bounds_keep_written_values() {
        let text = r#"{"low":{"value":1.50,"unit":"mg"},"high":{"value":2,"unit":"mg"}}"#;
        let range: Range = serde_json::from_str(text).unwrap();
        let low: &Quantity = range.low.as_ref().unwrap();
        assert_eq!(low.value.as_ref().map(Decimal::as_str), Some("1.50"));
        assert_eq!(serde_json::to_string(&range).unwrap(), text);
    }
}
