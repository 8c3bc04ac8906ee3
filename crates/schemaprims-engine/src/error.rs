use std::borrow::Cow;
use std::fmt;

use schemaprims_schema::Schema;
use schemaprims_value::Value;
use serde::Serialize;

/// Why a node rejected its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Wrong runtime kind, literal mismatch, unmatched union, unexpected
    /// object keys or a tuple of the wrong length.
    InvalidType,
    /// A length or numeric bound was violated by a value of the right kind.
    InvalidRange,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::InvalidRange => "INVALID_RANGE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step from a container to a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Mapping key or object field name.
    Key(String),
    /// Sequence index.
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Location of a failure, from the root subject down to the failure site.
///
/// Displays as an RFC 6901 JSON pointer; the root is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ErrorPath(Vec<PathSegment>);

impl ErrorPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for ErrorPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<PathSegment>> for ErrorPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, "/{}", key.replace('~', "~0").replace('/', "~1"))?,
                PathSegment::Index(index) => write!(f, "/{index}")?,
            }
        }
        Ok(())
    }
}

/// A single rejection.
///
/// `schema` points at the exact fragment of the caller's schema tree that
/// rejected, not the root. `subject` is borrowed from the input wherever the
/// rejected value exists there; record keys and missing fields are owned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError<'s, 'v> {
    pub code: ErrorCode,
    pub path: ErrorPath,
    pub schema: &'s Schema,
    pub subject: Cow<'v, Value>,
}

impl fmt::Display for ValidationError<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };
        write!(
            f,
            "{} at {}: {} schema rejected {} value",
            self.code,
            at,
            self.schema.kind().name(),
            self.subject.kind()
        )
    }
}

/// Every rejection from one call, in traversal order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors<'s, 'v> {
    errors: Vec<ValidationError<'s, 'v>>,
}

impl<'s, 'v> ValidationErrors<'s, 'v> {
    /// Wraps a list the engine produced. Callers guarantee it is non-empty.
    pub(crate) fn new(errors: Vec<ValidationError<'s, 'v>>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError<'s, 'v>] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError<'s, 'v>> {
        self.errors.iter()
    }

    pub fn into_inner(self) -> Vec<ValidationError<'s, 'v>> {
        self.errors
    }
}

impl<'s, 'v> IntoIterator for ValidationErrors<'s, 'v> {
    type Item = ValidationError<'s, 'v>;
    type IntoIter = std::vec::IntoIter<ValidationError<'s, 'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, 's, 'v> IntoIterator for &'a ValidationErrors<'s, 'v> {
    type Item = &'a ValidationError<'s, 'v>;
    type IntoIter = std::slice::Iter<'a, ValidationError<'s, 'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Serialize for ValidationErrors<'_, '_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.errors.serialize(serializer)
    }
}

impl fmt::Display for ValidationErrors<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors<'_, '_> {}

/// Success carries the accepted value; failure carries every error.
pub type Outcome<'s, 'v, T> = std::result::Result<T, ValidationErrors<'s, 'v>>;
