//! JSON encoding and path-tracking decoding

use crate::config::FormatConfig;
use crate::error::{FormatError, Result};
use crate::path::FieldPath;
use lodestar_models::r4::{visit_resource_type, Resource, ResourceVisitor};
use lodestar_models::{registry, FhirResource};
use serde::de::{self, DeserializeOwned, Unexpected};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

const RESOURCE_TYPE: &str = "resourceType";

/// JSON codec for FHIR shapes.
///
/// Encoding never writes absent optional members. Decoding ignores unknown
/// members and reports every failure as a [`FormatError`] carrying the path of
/// the offending member.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    config: FormatConfig,
}

impl JsonCodec {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
        let shape = shape_name::<T>();
        trace!(shape, "encoding value");
        serde_json::to_value(value).map_err(|source| FormatError::Encode { shape, source })
    }

    /// Encode to a JSON string, indented when [`FormatConfig::pretty`] is set.
    pub fn encode_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let shape = shape_name::<T>();
        trace!(shape, pretty = self.config.pretty, "encoding string");
        let encoded = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|source| FormatError::Encode { shape, source })
    }

    /// Decode any shape from a JSON value.
    pub fn decode_value<T: DeserializeOwned>(&self, value: Value) -> Result<T> {
        serde_path_to_error::deserialize(value)
            .map_err(|err| failed(FormatError::from_decode(err)))
    }

    pub fn decode_str<T: DeserializeOwned>(&self, input: &str) -> Result<T> {
        self.decode_value(parse(input)?)
    }

    /// Decode a resource document, dispatching on its `resourceType`.
    pub fn decode_resource_value(&self, value: Value) -> Result<Resource> {
        self.decode_resource_with_hint(value, None)
    }

    pub fn decode_resource_str(&self, input: &str) -> Result<Resource> {
        self.decode_resource_value(parse(input)?)
    }

    /// Decode a resource document at a polymorphic position.
    ///
    /// `hint` names the expected resource type and is only used when the
    /// document carries no `resourceType` of its own.
    pub fn decode_resource_with_hint(&self, value: Value, hint: Option<&str>) -> Result<Resource> {
        let discriminator = FieldPath::root().with_key(RESOURCE_TYPE);
        let name = match value.as_object().map(|object| object.get(RESOURCE_TYPE)) {
            None => {
                let message = invalid_type(&value, "a resource object");
                return Err(failed(FormatError::type_mismatch(FieldPath::root(), message)));
            }
            Some(Some(Value::String(name))) => name.clone(),
            Some(Some(other)) => {
                let message = invalid_type(other, "a resource type name");
                return Err(failed(FormatError::type_mismatch(discriminator, message)));
            }
            Some(None) => match hint {
                Some(hint) => hint.to_string(),
                None => return Err(failed(FormatError::MissingField { path: discriminator })),
            },
        };

        if !registry().is_resource(&name) {
            return Err(failed(FormatError::unknown_discriminator(discriminator, name)));
        }

        debug!(resource_type = %name, hinted = hint.is_some(), "dispatching resource document");
        visit_resource_type(&name, DecodeAs { codec: self, value }).unwrap_or_else(|| {
            Err(failed(FormatError::unknown_discriminator(discriminator, name)))
        })
    }

    /// Decode a document that must be an `R`.
    ///
    /// A `resourceType` naming some other resource is a type mismatch; an
    /// absent one is accepted unless [`FormatConfig::require_resource_type`]
    /// is set.
    pub fn decode_typed<R: FhirResource>(&self, value: Value) -> Result<R> {
        let discriminator = FieldPath::root().with_key(RESOURCE_TYPE);
        match value.get(RESOURCE_TYPE) {
            Some(Value::String(name)) if name == R::TYPE_NAME => {}
            Some(Value::String(name)) if registry().is_resource(name) => {
                let message = format!("expected `{}`, found `{}`", R::TYPE_NAME, name);
                return Err(failed(FormatError::type_mismatch(discriminator, message)));
            }
            Some(Value::String(name)) => {
                let err = FormatError::unknown_discriminator(discriminator, name.as_str());
                return Err(failed(err));
            }
            None if self.config.require_resource_type && value.is_object() => {
                return Err(failed(FormatError::MissingField { path: discriminator }));
            }
            _ => {}
        }
        self.decode_value(value)
    }
}

struct DecodeAs<'a> {
    codec: &'a JsonCodec,
    value: Value,
}

impl ResourceVisitor for DecodeAs<'_> {
    type Output = Result<Resource>;

    fn visit<R: FhirResource>(self) -> Self::Output {
        self.codec.decode_value::<R>(self.value).map(Into::into)
    }
}

fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|err| failed(FormatError::Syntax(err)))
}

fn failed(err: FormatError) -> FormatError {
    match (err.kind(), err.path()) {
        (Some(kind), Some(path)) => debug!(%kind, %path, error = %err, "decode failed"),
        _ => debug!(error = %err, "decode failed"),
    }
    err
}

/// Name reported for `T` in encode errors.
///
/// Containers report their innermost element, so `Vec<Option<Organization>>`
/// reports the shape's [`FhirShape::TYPE_NAME`](lodestar_models::FhirShape::TYPE_NAME).
fn shape_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let innermost = full.rsplit('<').next().unwrap_or(full);
    let innermost = innermost.trim_end_matches('>');
    innermost.rsplit("::").next().unwrap_or(innermost)
}

fn invalid_type(value: &Value, expected: &str) -> String {
    let unexpected = match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    };
    <serde_json::Error as de::Error>::invalid_type(unexpected, &expected).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use lodestar_models::r4::{CodeSystem, Coding, Organization, Task};
    use lodestar_models::FhirShape;
    use serde_json::json;

    #[test]
    fn test_shape_name() {
        assert_eq!(shape_name::<CodeSystem>(), CodeSystem::TYPE_NAME);
        assert_eq!(shape_name::<Vec<Organization>>(), Organization::TYPE_NAME);
        assert_eq!(shape_name::<Option<Vec<Coding>>>(), Coding::TYPE_NAME);
        assert_eq!(shape_name::<str>(), "str");
    }

    #[test]
    fn test_invalid_type_message() {
        assert_eq!(
            invalid_type(&json!("x"), "a resource object"),
            "invalid type: string \"x\", expected a resource object"
        );
        assert_eq!(
            invalid_type(&json!([]), "a resource object"),
            "invalid type: sequence, expected a resource object"
        );
    }

    #[test]
    fn test_dispatch_with_hint() {
        let codec = JsonCodec::default();
        let document = json!({"id": "t1", "status": "draft", "intent": "order"});
        let resource = codec.decode_resource_with_hint(document, Some("Task")).unwrap();
        assert_eq!(resource.resource_type(), "Task");

        // the document's own discriminator wins over the hint
        let resource = codec
            .decode_resource_with_hint(json!({"resourceType": "Organization"}), Some("Task"))
            .unwrap();
        assert_eq!(resource.resource_type(), "Organization");
    }

    #[test]
    fn test_hint_must_name_a_resource() {
        let err = JsonCodec::default()
            .decode_resource_with_hint(json!({"code": "x"}), Some("Coding"))
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
    }

    #[test]
    fn test_decode_typed_requires_resource_type() {
        let strict = JsonCodec::new(FormatConfig::default().with_require_resource_type(true));
        let err = strict
            .decode_typed::<Task>(json!({"status": "draft", "intent": "order"}))
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::MissingField));
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("resourceType"));

        let lenient = JsonCodec::default();
        let task = lenient
            .decode_typed::<Task>(json!({"status": "draft", "intent": "order"}))
            .unwrap();
        assert_eq!(task.intent, "order");
    }
}
