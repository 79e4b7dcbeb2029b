//! ARRAY_OF combinator - validates each element of a JSON array

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// ARRAY_OF COMBINATOR
// ============================================================================

/// Validates each element of a JSON array.
///
/// Elements are validated in index order and every failure is collected, with
/// its index prefixed onto the path. On success the output holds the
/// validated (possibly transformed) elements in their original order.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let tags = array_of(string());
/// assert_eq!(tags.validate(&json!(["a", "b"])).unwrap(), ["a", "b"]);
///
/// let err = tags.validate(&json!(["a", 1, null])).unwrap_err();
/// assert_eq!(err.nested.len(), 2);
/// assert_eq!(err.nested[0].path_string(), "[1]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<V> {
    element: V,
    fail_fast: bool,
}

impl<V> ArrayOf<V> {
    /// Creates a new ARRAY_OF combinator.
    ///
    /// By default, validates all elements and collects all errors.
    pub fn new(element: V) -> Self {
        Self {
            element,
            fail_fast: false,
        }
    }

    /// Stop at the first failing element.
    ///
    /// The error is still an aggregate, holding that single failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Returns a reference to the element validator.
    pub fn element(&self) -> &V {
        &self.element
    }

    /// Extracts the element validator.
    pub fn into_inner(self) -> V {
        self.element
    }
}

impl<V> Validate for ArrayOf<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;
    type Output = Vec<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        let Value::Array(items) = input else {
            return Err(ValidationError::shape_mismatch("array", input));
        };

        let mut output = Vec::with_capacity(items.len());
        let mut errors = Vec::new();

        for (index, item) in items.iter().enumerate() {
            match self.element.validate(item) {
                Ok(value) => output.push(value),
                Err(e) => {
                    errors.push(e.at(index));
                    if self.fail_fast {
                        break;
                    }
                }
            }
        }

        if errors.is_empty() {
            return Ok(output);
        }

        let indices: Vec<String> = errors
            .iter()
            .filter_map(|e| e.path.first())
            .map(ToString::to_string)
            .collect();

        Err(ValidationError::aggregate(
            format!(
                "{} of {} elements failed validation",
                errors.len(),
                items.len()
            ),
            errors,
        )
        .with_param("total_count", items.len().to_string())
        .with_param("failed_indices", indices.join(",")))
    }
}

/// Creates an [`ArrayOf`] combinator that validates all elements.
pub fn array_of<V>(element: V) -> ArrayOf<V> {
    ArrayOf::new(element)
}

// ============================================================================
// TESTS
// ============================================================================
