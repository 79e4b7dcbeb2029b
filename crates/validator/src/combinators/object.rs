//! OBJECT combinator - validates a record against a declared shape
//!
//! The shape is an ordered list of field names with a validator each. Every
//! declared field is validated (no fail-fast), failures are collected into a
//! single aggregate error, and the output record holds exactly the declared
//! fields; input keys missing from the shape are dropped.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::foundation::{
    DynValidator, Record, Validate, ValidateExt, ValidationError, ValidationResult,
};

/// Stands in for absent properties: the closest JSON has to `undefined`.
static ABSENT: Value = Value::Null;

// ============================================================================
// OBJECT COMBINATOR
// ============================================================================

/// Validates a JSON object against an ordered shape.
///
/// A property absent from the input is validated as `null`, so a required
/// field fails with its own validator's error while a
/// [`fallback`](crate::combinators::fallback) or
/// [`optional`](crate::combinators::optional) field absorbs it.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let shape = Object::new()
///     .field("username", string())
///     .field("summary", fallback(string(), String::new));
///
/// let record = shape.validate(&json!({"username": "ada", "admin": true})).unwrap();
/// assert_eq!(record, *json!({"username": "ada", "summary": ""}).as_object().unwrap());
/// ```
#[derive(Default)]
pub struct Object {
    fields: Vec<(String, DynValidator)>,
}

impl Object {
    /// Creates an object schema with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares a field.
    ///
    /// The validator's output is stored in the record as JSON. Declaring the
    /// same name twice replaces the earlier validator and keeps its position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
        V::Output: Serialize,
    {
        self.field_dyn(name, validator.boxed())
    }

    /// Declares a field with an already type-erased validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_dyn(mut self, name: impl Into<String>, validator: DynValidator) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = validator,
            None => self.fields.push((name, validator)),
        }
        self
    }

    /// Returns the declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Validate for Object {
    type Input = Value;
    type Output = Record;

    fn validate(&self, input: &Value) -> ValidationResult<Record> {
        let Value::Object(properties) = input else {
            return Err(ValidationError::shape_mismatch("object", input));
        };

        let mut record = Record::new();
        let mut errors = Vec::new();

        for (name, validator) in &self.fields {
            let property = properties.get(name).unwrap_or(&ABSENT);
            match validator.validate(property) {
                Ok(value) => {
                    record.insert(name.clone(), value);
                }
                Err(e) => errors.push(e.at(name.as_str())),
            }
        }

        if errors.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError::aggregate(
                format!(
                    "{} of {} fields failed validation",
                    errors.len(),
                    self.fields.len()
                ),
                errors,
            )
            .with_param("total_count", self.fields.len().to_string()))
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> FromIterator<(K, DynValidator)> for Object
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, DynValidator)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |shape, (name, validator)| shape.field_dyn(name, validator))
    }
}

/// Creates an [`Object`] from `(name, validator)` pairs.
///
/// Use [`boxed`](crate::foundation::ValidateExt::boxed) to erase each
/// validator, or the [`object!`](crate::object) macro to skip it.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let point = object([("x", number().boxed()), ("y", number().boxed())]);
/// assert!(point.validate(&json!({"x": 1, "y": 2})).is_ok());
/// ```
pub fn object<K, I>(shape: I) -> Object
where
    K: Into<String>,
    I: IntoIterator<Item = (K, DynValidator)>,
{
    shape.into_iter().collect()
}

// ============================================================================
// TESTS
// ============================================================================
