//! Ad hoc boolean refinements

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Validates the input with a boolean check.
///
/// Passes the input through unchanged (owned) when the check returns `true`,
/// otherwise fails with `predicate_failed` carrying the given message. The
/// check narrows nothing by itself; put it after a typed stage in a chain to
/// refine a typed value.
///
/// # Type Parameters
///
/// * `F` - The check (`Fn(&I) -> bool`)
/// * `I` - The input type, `serde_json::Value` by default
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let non_empty = predicate(|v| v.as_str().is_some_and(|s| !s.is_empty()), "must not be empty");
/// assert!(non_empty.validate(&json!("x")).is_ok());
/// assert_eq!(non_empty.validate(&json!("")).unwrap_err().message, "must not be empty");
/// ```
pub struct Predicate<F, I: ?Sized = Value> {
    check: F,
    message: Cow<'static, str>,
    _phantom: PhantomData<fn(&I) -> bool>,
}

impl<F, I: ?Sized> Predicate<F, I> {
    /// Creates a new predicate validator.
    pub fn new(check: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            check,
            message: message.into(),
            _phantom: PhantomData,
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<F, I> Validate for Predicate<F, I>
where
    F: Fn(&I) -> bool,
    I: ToOwned + ?Sized,
{
    type Input = I;
    type Output = I::Owned;

    fn validate(&self, input: &I) -> ValidationResult<I::Owned> {
        if (self.check)(input) {
            Ok(input.to_owned())
        } else {
            Err(ValidationError::predicate_failed(self.message.clone()))
        }
    }
}

impl<F: Clone, I: ?Sized> Clone for Predicate<F, I> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            message: self.message.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<F, I: ?Sized> fmt::Debug for Predicate<F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("check", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

/// Creates a predicate over JSON values.
pub fn predicate<F>(check: F, message: impl Into<Cow<'static, str>>) -> Predicate<F, Value>
where
    F: Fn(&Value) -> bool,
{
    Predicate::new(check, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_predicate_passes_input_through() {
        let even = predicate(|v| v.as_i64().is_some_and(|n| n % 2 == 0), "must be even");
        assert_eq!(even.validate(&json!(4)).unwrap(), json!(4));
    }

    #[test]
    fn test_predicate_failure_carries_message() {
        let even = predicate(|v| v.as_i64().is_some_and(|n| n % 2 == 0), "must be even");
        let err = even.validate(&json!(3)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::PredicateFailed);
        assert_eq!(err.message, "must be even");
    }

    #[test]
    fn test_predicate_on_unsized_input() {
        let short = Predicate::<_, str>::new(|s: &str| s.len() < 4, "too long");
        assert_eq!(short.validate("abc").unwrap(), "abc");
        assert!(short.validate("abcd").is_err());
    }
}
