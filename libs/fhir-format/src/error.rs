//! Error types for encoding and decoding

use crate::path::FieldPath;
use lodestar_models::located::split_location;
use serde_json::error::Category;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

/// Classification of a decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required member is absent
    MissingField,
    /// A member holds a value of the wrong JSON type or outside its vocabulary
    TypeMismatch,
    /// A `resourceType` names no known resource
    UnknownDiscriminator,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingField => f.write_str("missing-field"),
            ErrorKind::TypeMismatch => f.write_str("type-mismatch"),
            ErrorKind::UnknownDiscriminator => f.write_str("unknown-discriminator"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("missing required field `{path}`")]
    MissingField { path: FieldPath },

    #[error("type mismatch at `{path}`: {message}")]
    TypeMismatch { path: FieldPath, message: String },

    #[error("unknown resource type `{name}` at `{path}`")]
    UnknownDiscriminator { path: FieldPath, name: String },

    #[error("JSON syntax error: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("failed to encode {shape}: {source}")]
    Encode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FormatError {
    /// Kind of a shape error; `None` for syntax and encode failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            FormatError::MissingField { .. } => Some(ErrorKind::MissingField),
            FormatError::TypeMismatch { .. } => Some(ErrorKind::TypeMismatch),
            FormatError::UnknownDiscriminator { .. } => Some(ErrorKind::UnknownDiscriminator),
            FormatError::Syntax(_) | FormatError::Encode { .. } => None,
        }
    }

    /// Path of the offending member, from the document root.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            FormatError::MissingField { path }
            | FormatError::TypeMismatch { path, .. }
            | FormatError::UnknownDiscriminator { path, .. } => Some(path),
            FormatError::Syntax(_) | FormatError::Encode { .. } => None,
        }
    }

    pub(crate) fn unknown_discriminator(path: FieldPath, name: impl Into<String>) -> Self {
        FormatError::UnknownDiscriminator {
            path,
            name: name.into(),
        }
    }

    pub(crate) fn type_mismatch(path: FieldPath, message: impl Into<String>) -> Self {
        FormatError::TypeMismatch {
            path,
            message: message.into(),
        }
    }

    /// Classify a failed path-tracking decode.
    ///
    /// serde only hands back a message, so the kind is read off the wording
    /// serde and the model types use. Errors raised inside a contained resource
    /// or a choice group carry their own location, which is appended to the
    /// tracked path. Missing-field paths are extended with the missing member's
    /// wire name, unknown-discriminator paths with `resourceType`.
    pub(crate) fn from_decode(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let mut path = FieldPath::from(err.path());
        let inner = err.into_inner();
        if inner.classify() != Category::Data {
            return FormatError::Syntax(inner);
        }

        let message = inner.to_string();
        let message = match split_location(&message) {
            Some((located, rest)) => {
                path.append_rendered(located);
                rest.to_string()
            }
            None => message,
        };
        if let Some(field) = quoted_after(&message, "missing field `") {
            path.push_key(field);
            FormatError::MissingField { path }
        } else if let Some(name) = quoted_after(&message, "unknown resource type `") {
            path.push_key("resourceType");
            FormatError::unknown_discriminator(path, name)
        } else {
            FormatError::TypeMismatch { path, message }
        }
    }
}

fn quoted_after<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    let start = message.find(prefix)? + prefix.len();
    let rest = &message[start..];
    rest.find('`').map(|end| &rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestar_models::r4::Organization;

    #[test]
    fn test_quoted_after() {
        assert_eq!(quoted_after("missing field `code`", "missing field `"), Some("code"));
        assert_eq!(
            quoted_after("unknown resource type `Patient`", "unknown resource type `"),
            Some("Patient")
        );
        assert_eq!(quoted_after("invalid type: string", "missing field `"), None);
        assert_eq!(quoted_after("missing field `code", "missing field `"), None);
    }

    #[test]
    fn test_kind_and_path() {
        let path = FieldPath::root().with_key("status");
        let err = FormatError::type_mismatch(path.clone(), "unknown variant `published`");
        assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
        assert_eq!(err.path(), Some(&path));
        assert_eq!(
            err.to_string(),
            "type mismatch at `status`: unknown variant `published`"
        );

        let err = FormatError::unknown_discriminator(FieldPath::root(), "Patient");
        assert_eq!(err.to_string(), "unknown resource type `Patient` at `$`");
        assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
    }

    #[test]
    fn test_located_message_extends_path() {
        let document = serde_json::json!({
            "contained": [{
                "resourceType": "CodeSystem",
                "status": "draft",
                "content": "complete",
                "concept": [{"code": "a", "concept": [{"code": 7}]}]
            }]
        });
        let err = serde_path_to_error::deserialize::<_, Organization>(document).unwrap_err();
        let err = FormatError::from_decode(err);

        assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
        assert_eq!(
            err.path().map(ToString::to_string).as_deref(),
            Some("contained[0].concept[0].concept[0].code")
        );
        assert!(err.to_string().ends_with("expected a string"), "{err}");
    }

    #[test]
    fn test_syntax_error_has_no_kind() {
        let err = FormatError::Syntax(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_eq!(err.kind(), None);
        assert!(err.path().is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::MissingField.to_string(), "missing-field");
        assert_eq!(ErrorKind::UnknownDiscriminator.to_string(), "unknown-discriminator");
    }
}
