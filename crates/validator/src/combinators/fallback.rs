//! FALLBACK combinator - never fails

use std::fmt;

use crate::foundation::{Validate, ValidationResult};

/// Replaces any failure of the inner validator with a computed default.
///
/// The factory runs on every failure, so mutable defaults are never shared
/// between validations. The inner error is discarded; only its code is
/// traced.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let aliases = fallback(array_of(string()), Vec::new);
/// assert_eq!(aliases.validate(&json!(["a"])).unwrap(), ["a"]);
/// assert!(aliases.validate(&json!("oops")).unwrap().is_empty());
/// ```
pub struct Fallback<V, F> {
    inner: V,
    default: F,
}

impl<V, F> Fallback<V, F> {
    /// Creates a new FALLBACK combinator.
    pub fn new(inner: V, default: F) -> Self {
        Self { inner, default }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, F> Validate for Fallback<V, F>
where
    V: Validate,
    F: Fn() -> V::Output,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        match self.inner.validate(input) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::trace!(code = e.code(), "substituting fallback value");
                Ok((self.default)())
            }
        }
    }
}

impl<V: Clone, F: Clone> Clone for Fallback<V, F> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.default.clone())
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Fallback<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallback")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Fallback`] combinator.
pub fn fallback<V, F>(inner: V, default: F) -> Fallback<V, F>
where
    V: Validate,
    F: Fn() -> V::Output,
{
    Fallback::new(inner, default)
}
