//! Error types for validation failures
//!
//! Every validator reports failure through a single structured type,
//! [`ValidationError`], which carries an [`ErrorKind`], a human-readable
//! message, the path at which the failure happened, ordered parameters and,
//! for aggregating combinators, the nested sub-errors.
//!
//! Paths are absolute from the root of the `validate` call. A combinator that
//! descends into a field or an item prefixes that segment onto the child error
//! (and onto all of its nested errors) with [`ValidationError::at`].
//!
//! Codes and static messages use `Cow<'static, str>` so the common case
//! allocates nothing.

use serde_json::Value;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

use crate::foundation::value::type_name;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The failure taxonomy shared by all validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A primitive check saw a value of the wrong JSON type.
    TypeMismatch,
    /// A structural combinator expected an object or array and got something else.
    ShapeMismatch,
    /// `exact` saw a value different from its literal.
    LiteralMismatch,
    /// A named refinement returned `false`.
    PredicateFailed,
    /// A transform function reported an error instead of producing a value.
    TransformFailed,
    /// No alternative of an `either` matched.
    UnionExhausted,
    /// One or more fields or items of a structural combinator failed.
    Aggregate,
}

impl ErrorKind {
    /// Returns the stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::ShapeMismatch => "shape_mismatch",
            Self::LiteralMismatch => "literal_mismatch",
            Self::PredicateFailed => "predicate_failed",
            Self::TransformFailed => "transform_failed",
            Self::UnionExhausted => "union_exhausted",
            Self::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// PATH
// ============================================================================

/// One step into a nested value: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object property name.
    Key(String),
    /// Array position.
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Inline storage for paths; most failures sit fewer than four levels deep.
pub type Path = SmallVec<[PathSegment; 4]>;

fn write_path(f: &mut impl fmt::Write, path: &[PathSegment]) -> fmt::Result {
    for (i, segment) in path.iter().enumerate() {
        match segment {
            PathSegment::Key(key) if i == 0 => f.write_str(key)?,
            PathSegment::Key(key) => write!(f, ".{key}")?,
            PathSegment::Index(index) => write!(f, "[{index}]")?,
        }
    }
    Ok(())
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use roost_validator::foundation::{ErrorKind, PathSegment, ValidationError};
///
/// let error = ValidationError::predicate_failed("must not be empty")
///     .at(PathSegment::Index(0))
///     .at("tags");
///
/// assert_eq!(error.kind, ErrorKind::PredicateFailed);
/// assert_eq!(error.path_string(), "tags[0]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// What went wrong.
    pub kind: ErrorKind,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Location of the failure, from the root of the validated value.
    pub path: Path,

    /// Ordered details, e.g. `[("expected", "string"), ("actual", "number")]`.
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Per-field, per-item or per-alternative failures.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new error with a kind and message at the root path.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: Path::new(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Prefixes `segment` onto the path of this error and every nested error.
    ///
    /// Structural combinators call this while unwinding, so the outermost
    /// segment ends up first.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.prefix(&segment.into());
        self
    }

    fn prefix(&mut self, segment: &PathSegment) {
        self.path.insert(0, segment.clone());
        for nested in &mut self.nested {
            nested.prefix(segment);
        }
    }

    /// Returns the stable code of this error's kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Renders the path as `user.tags[2]`; empty at the root.
    #[must_use]
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_path(&mut out, &self.path);
        out
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the number of errors (including nested).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens all errors into a single list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// Returns the errors that have no nested errors, depth-first.
    ///
    /// For aggregated failures these are the actual offending values.
    #[must_use]
    pub fn leaves(&self) -> Vec<&ValidationError> {
        self.flatten()
            .into_iter()
            .filter(|e| e.nested.is_empty())
            .collect()
    }

    /// Converts the error to a JSON structure for logs and diagnostics.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        use serde_json::json;

        let params: serde_json::Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code(),
            "message": self.message,
            "path": self.path_string(),
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.code(), self.message)?;
        } else {
            f.write_str("[")?;
            write_path(f, &self.path)?;
            write!(f, "] {}: {}", self.code(), self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error for a primitive check.
    pub fn type_mismatch(expected: &'static str, actual: &Value) -> Self {
        let actual = type_name(actual);
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Expected {expected}, got {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// Creates a "shape_mismatch" error for a structural combinator.
    pub fn shape_mismatch(expected: &'static str, actual: &Value) -> Self {
        let actual = type_name(actual);
        Self::new(
            ErrorKind::ShapeMismatch,
            format!("Expected {expected}, got {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// Creates a "literal_mismatch" error naming the expected literal.
    pub fn literal_mismatch(expected: &Value) -> Self {
        Self::new(ErrorKind::LiteralMismatch, format!("Expected {expected}"))
            .with_param("expected", expected.to_string())
    }

    /// Creates a "predicate_failed" error carrying the refinement's message.
    pub fn predicate_failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::PredicateFailed, message)
    }

    /// Creates a "transform_failed" error.
    pub fn transform_failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::TransformFailed, message)
    }

    /// Creates a "union_exhausted" error carrying every alternative's failure.
    pub fn union_exhausted(attempts: Vec<ValidationError>) -> Self {
        let count = attempts.len();
        Self::new(
            ErrorKind::UnionExhausted,
            format!("None of {count} alternatives matched"),
        )
        .with_nested(attempts)
    }

    /// Creates an aggregate error over failed fields or items.
    pub fn aggregate(message: impl Into<Cow<'static, str>>, errors: Vec<ValidationError>) -> Self {
        Self::new(ErrorKind::Aggregate, message)
            .with_param("failed_count", errors.len().to_string())
            .with_nested(errors)
    }
}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// Failure to build a schema.
///
/// Reserved for programmer errors at construction time; invalid *data* is
/// always reported as a [`ValidationError`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The literal given to `exact_from` has no JSON representation.
    #[error("literal cannot be represented as JSON: {0}")]
    Literal(#[source] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================
