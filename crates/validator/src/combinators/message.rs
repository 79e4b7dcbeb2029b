//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// The replacement keeps the original kind and path, and nests the original
/// error so no detail is lost. Useful for user-facing messages.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let username = with_message(string(), "Username must be text");
/// let err = username.validate(&json!(42)).unwrap_err();
///
/// assert_eq!(err.message, "Username must be text");
/// assert_eq!(err.kind, ErrorKind::TypeMismatch);
/// assert_eq!(err.nested[0].param("actual"), Some("number"));
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        self.inner.validate(input).map_err(|original| {
            let mut replaced = ValidationError::new(original.kind, self.message.clone());
            replaced.path.clone_from(&original.path);
            replaced.with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================
