//! Decode errors that carry the location they were raised at
//!
//! Some decodes cannot report where they failed through the caller's own
//! deserializer: a contained resource is buffered and decoded as a separate
//! [`Value`](serde_json::Value), and a choice group is replayed from serde's
//! flattened buffer. Those decodes track their own path and prefix it to the
//! error message as ``at `concept[0].code`: missing field `code` ``, which the
//! caller splices onto the path it already knows.

use serde::de::{Deserialize, Deserializer, Error};
use serde_path_to_error::{Path, Segment};
use std::fmt::Write;

const PREFIX: &str = "at `";
const SUFFIX: &str = "`: ";

/// Split a located message into its path and the underlying message.
///
/// Returns `None` when the message carries no location.
pub fn split_location(message: &str) -> Option<(&str, &str)> {
    let rest = message.strip_prefix(PREFIX)?;
    let end = rest.find(SUFFIX)?;
    Some((&rest[..end], &rest[end + SUFFIX.len()..]))
}

/// Deserialize `T`, prefixing any error with the path it was raised at.
pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = render(err.path());
        relocate(&path, err.into_inner())
    })
}

fn relocate<E: Error>(outer: &str, err: E) -> E {
    let message = err.to_string();
    let (inner, rest) = split_location(&message).unwrap_or(("", &message));
    let path = join(outer, inner);
    if path.is_empty() {
        return err;
    }
    E::custom(format_args!("{PREFIX}{path}{SUFFIX}{rest}"))
}

fn render(path: &Path) -> String {
    let mut rendered = String::new();
    for segment in path {
        match segment {
            Segment::Seq { index } => {
                let _ = write!(rendered, "[{index}]");
            }
            Segment::Map { key } | Segment::Enum { variant: key } => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            Segment::Unknown => {}
        }
    }
    rendered
}

fn join(outer: &str, inner: &str) -> String {
    if outer.is_empty() || inner.is_empty() || inner.starts_with('[') {
        format!("{outer}{inner}")
    } else {
        format!("{outer}.{inner}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::CodeSystem;
    use serde_json::json;

    #[test]
    fn test_split_location() {
        assert_eq!(
            split_location("at `concept[0].code`: invalid type: integer `1`"),
            Some(("concept[0].code", "invalid type: integer `1`"))
        );
        assert_eq!(split_location("missing field `code`"), None);
        assert_eq!(split_location("at `unterminated"), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("contained", "[0].code"), "contained[0].code");
        assert_eq!(join("contained[0]", "concept[1]"), "contained[0].concept[1]");
        assert_eq!(join("", "concept"), "concept");
        assert_eq!(join("entry[0]", ""), "entry[0]");
    }

    #[test]
    fn test_relocate_nests() {
        let inner = serde_json::Error::custom("at `[1].concept`: missing field `code`");
        let err = relocate("concept", inner);
        assert_eq!(err.to_string(), "at `concept[1].concept`: missing field `code`");

        let plain = serde_json::Error::custom("missing field `status`");
        assert_eq!(relocate("", plain).to_string(), "missing field `status`");
    }

    #[test]
    fn test_deserialize_records_path() {
        let value = json!({
            "resourceType": "CodeSystem",
            "status": "draft",
            "content": "complete",
            "concept": [{"code": "a", "concept": [{"display": "no code"}]}]
        });
        let err = deserialize::<_, CodeSystem>(value).unwrap_err();
        assert_eq!(err.to_string(), "at `concept[0].concept[0]`: missing field `code`");
    }
}
