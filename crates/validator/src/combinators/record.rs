//! OBJECT_OF combinator - validates every value of a keyed map

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Validates every property value of a JSON object with one validator.
///
/// Keys are arbitrary and all of them are kept, in input order. Failures are
/// collected with the offending key prefixed onto the path.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let counters = object_of(number());
/// let parsed = counters.validate(&json!({"followers": 3, "following": 5})).unwrap();
/// assert_eq!(parsed.keys().collect::<Vec<_>>(), ["followers", "following"]);
///
/// let err = counters.validate(&json!({"followers": "many"})).unwrap_err();
/// assert_eq!(err.nested[0].path_string(), "followers");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectOf<V> {
    value: V,
    fail_fast: bool,
}

impl<V> ObjectOf<V> {
    /// Creates a new OBJECT_OF combinator that collects all errors.
    pub fn new(value: V) -> Self {
        Self {
            value,
            fail_fast: false,
        }
    }

    /// Stop at the first failing property.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Returns a reference to the value validator.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Extracts the value validator.
    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<V> Validate for ObjectOf<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;
    type Output = IndexMap<String, V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        let Value::Object(properties) = input else {
            return Err(ValidationError::shape_mismatch("object", input));
        };

        let mut output = IndexMap::with_capacity(properties.len());
        let mut errors = Vec::new();

        for (key, property) in properties {
            match self.value.validate(property) {
                Ok(value) => {
                    output.insert(key.clone(), value);
                }
                Err(e) => {
                    errors.push(e.at(key.as_str()));
                    if self.fail_fast {
                        break;
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(ValidationError::aggregate(
                format!(
                    "{} of {} properties failed validation",
                    errors.len(),
                    properties.len()
                ),
                errors,
            )
            .with_param("total_count", properties.len().to_string()))
        }
    }
}

/// Creates an [`ObjectOf`] combinator.
pub fn object_of<V>(value: V) -> ObjectOf<V> {
    ObjectOf::new(value)
}
