//! FHIR primitive types
//!
//! Primitives keep their lexical form. Dates, times and URIs stay strings because
//! this layer never interprets them.

use crate::error::{Error, Result};
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Number;
use std::fmt;
use std::str::FromStr;

pub type Base64Binary = String;
pub type Canonical = String;
pub type Code = String;
pub type Date = String;
pub type DateTime = String;
pub type Id = String;
pub type Instant = String;
pub type Integer = i32;
pub type Markdown = String;
pub type Oid = String;
pub type PositiveInt = u32;
pub type Time = String;
pub type UnsignedInt = u32;
pub type Uri = String;
pub type Url = String;
pub type Uuid = String;

/// FHIR `decimal`
///
/// Holds the number exactly as it was written (`1.50` stays `1.50`, `2` stays
/// `2`) next to its [`rust_decimal::Decimal`] value. The written form is what
/// gets serialized; equality compares values, so `1.5 == 1.50`.
///
/// Numbers outside the range of `rust_decimal` still round-trip but have no
/// [`value`](Decimal::value).
#[derive(Debug, Clone)]
pub struct Decimal {
    value: Option<rust_decimal::Decimal>,
    lexical: String,
}

impl Decimal {
    fn from_lexical(lexical: String) -> Self {
        let normalized = lexical.to_ascii_lowercase();
        let value = if normalized.contains('e') {
            rust_decimal::Decimal::from_scientific(&normalized).ok()
        } else {
            normalized.parse().ok()
        };
        Self { value, lexical }
    }

    pub fn value(&self) -> Option<rust_decimal::Decimal> {
        self.value
    }

    /// The number as written on the wire.
    pub fn as_str(&self) -> &str {
        &self.lexical
    }
}

impl Default for Decimal {
    fn default() -> Self {
        rust_decimal::Decimal::ZERO.into()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a == b,
            _ => self.lexical == other.lexical,
        }
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self {
            value: Some(value),
            lexical: value.to_string(),
        }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        rust_decimal::Decimal::from(value).into()
    }
}

/// Parses a JSON number literal.
impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let number: Number =
            serde_json::from_str(s).map_err(|_| Error::InvalidDecimal(s.to_string()))?;
        Ok(Self::from_lexical(number.to_string()))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawValue::from_string(self.lexical.clone())
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let number = Number::deserialize(deserializer)?;
        Ok(Self::from_lexical(number.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_lexical_form_survives() {
        for text in ["1.50", "2", "2.0", "-0.001", "0.1000000000000000055511151231257827"] {
            let decimal: Decimal = serde_json::from_str(text).unwrap();
            assert_eq!(decimal.as_str(), text);
            assert_eq!(serde_json::to_string(&decimal).unwrap(), text);
        }
    }

    #[test]
    fn test_lexical_form_survives_value_round_trip() {
        let value: Value = serde_json::from_str(r#"{"a": 1.50, "b": 2, "c": 2.0}"#).unwrap();
        let decoded: Vec<Decimal> = ["a", "b", "c"]
            .iter()
            .map(|key| serde_json::from_value(value[key].clone()).unwrap())
            .collect();
        let written: Vec<String> = decoded.iter().map(|d| d.to_string()).collect();
        assert_eq!(written, ["1.50", "2", "2.0"]);

        let back = serde_json::to_value(&decoded[0]).unwrap();
        assert_eq!(back, value["a"]);
    }

    #[test]
    fn test_equality_compares_values() {
        assert_eq!(dec("1.5"), dec("1.50"));
        assert_eq!(dec("2"), Decimal::from(2));
        assert_ne!(dec("2"), dec("2.01"));
        assert_eq!(dec("1.5").value(), Some(rust_decimal::Decimal::new(15, 1)));
    }

    #[test]
    fn test_scientific_notation() {
        let decimal = dec("1.25E2");
        assert_eq!(decimal.value(), Some(rust_decimal::Decimal::from(125)));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(matches!("abc".parse::<Decimal>(), Err(Error::InvalidDecimal(_))));
        assert!(serde_json::from_value::<Decimal>(json!("1.5")).is_err());
        assert!(serde_json::from_value::<Decimal>(json!(true)).is_err());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Decimal::default().as_str(), "0");
        assert_eq!(Decimal::default(), dec("0.00"));
    }
}
