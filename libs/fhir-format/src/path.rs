//! Field paths reported by decode errors

use std::fmt;

/// One step from a container to one of its members
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member, by wire name
    Key(String),
    /// List element, zero-based
    Index(usize),
}

/// Location of a value inside a JSON document, from the document root.
///
/// Renders as `concept[0].concept[0].code`; the root itself renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.push_key(key);
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.push_index(index);
        self
    }

    /// Append the segments of a rendered path such as `concept[0].code`.
    pub fn append_rendered(&mut self, rendered: &str) {
        for part in rendered.split('.') {
            let (key, indices) = part.split_at(part.find('[').unwrap_or(part.len()));
            if !key.is_empty() {
                self.push_key(key);
            }
            for index in indices.split(['[', ']']).filter_map(|i| i.parse().ok()) {
                self.push_index(index);
            }
        }
    }

    /// Wire name of the innermost object member on this path.
    pub fn last_key(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|segment| match segment {
            PathSegment::Key(key) => Some(key.as_str()),
            PathSegment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl From<&serde_path_to_error::Path> for FieldPath {
    fn from(path: &serde_path_to_error::Path) -> Self {
        use serde_path_to_error::Segment;

        let segments = path
            .iter()
            .filter_map(|segment| match segment {
                Segment::Seq { index } => Some(PathSegment::Index(*index)),
                Segment::Map { key } => Some(PathSegment::Key(key.clone())),
                Segment::Enum { variant } => Some(PathSegment::Key(variant.clone())),
                Segment::Unknown => None,
            })
            .collect();
        Self { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FieldPath::root().to_string(), "$");

        let path = FieldPath::root()
            .with_key("concept")
            .with_index(0)
            .with_key("concept")
            .with_index(0)
            .with_key("code");
        assert_eq!(path.to_string(), "concept[0].concept[0].code");
        assert_eq!(path.last_key(), Some("code"));
        assert_eq!(path.segments().len(), 5);
    }

    #[test]
    fn test_append_rendered() {
        let mut path = FieldPath::root().with_key("contained").with_index(0);
        path.append_rendered("concept[0].concept[12]");
        assert_eq!(path.to_string(), "contained[0].concept[0].concept[12]");
        assert_eq!(path.segments().len(), 6);

        let mut path = FieldPath::root().with_key("entry");
        path.append_rendered("[1].resource");
        assert_eq!(path.to_string(), "entry[1].resource");

        let mut path = FieldPath::root();
        path.append_rendered("");
        assert!(path.is_root());
    }

    #[test]
    fn test_leading_index() {
        let path = FieldPath::root().with_index(3).with_key("code");
        assert_eq!(path.to_string(), "[3].code");
        assert_eq!(FieldPath::root().with_index(1).last_key(), None);
    }
}
