//! Exact-literal validator

use serde::Serialize;
use serde_json::Value;

use crate::foundation::{SchemaError, Validate, ValidationError, ValidationResult, values_equal};

/// Validates that the input equals a fixed literal.
///
/// Numbers compare by value (`1` equals `1.0`); arrays and objects compare
/// deeply. On success the input is returned unchanged.
///
/// # Examples
///
/// ```
/// use roost_validator::validators::exact;
/// use roost_validator::foundation::Validate;
/// use serde_json::json;
///
/// let kind = exact("Person");
/// assert!(kind.validate(&json!("Person")).is_ok());
/// assert!(kind.validate(&json!("Group")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Exact {
    literal: Value,
}

impl Exact {
    /// Creates a new literal check.
    pub fn new(literal: impl Into<Value>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// Creates a literal check from any serializable value.
    pub fn from_serialize<T>(literal: &T) -> Result<Self, SchemaError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(literal)
            .map(|literal| Self { literal })
            .map_err(SchemaError::Literal)
    }

    /// Returns the expected literal.
    pub fn literal(&self) -> &Value {
        &self.literal
    }
}

impl Validate for Exact {
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> ValidationResult<Value> {
        if values_equal(input, &self.literal) {
            Ok(input.clone())
        } else {
            Err(ValidationError::literal_mismatch(&self.literal))
        }
    }
}

/// Creates an [`Exact`] validator.
pub fn exact(literal: impl Into<Value>) -> Exact {
    Exact::new(literal)
}

/// Creates an [`Exact`] validator from a serializable literal.
///
/// # Errors
///
/// Returns [`SchemaError::Literal`] if the value has no JSON representation
/// (for example a map with non-string keys).
pub fn exact_from<T>(literal: &T) -> Result<Exact, SchemaError>
where
    T: Serialize + ?Sized,
{
    Exact::from_serialize(literal)
}
