//! OPTIONAL combinator - accepts null

use serde_json::Value;

use crate::foundation::{Validate, ValidationResult};

/// Accepts `null` as `None` and validates anything else with the inner validator.
///
/// Because an absent object field is validated as `null`, an optional field
/// may also be left out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;
    type Output = Option<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        match input {
            Value::Null => Ok(None),
            value => self.inner.validate(value).map(Some),
        }
    }
}

pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}
