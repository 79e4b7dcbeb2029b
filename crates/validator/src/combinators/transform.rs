//! TRANSFORM combinators - turn an intermediate value into a new one
//!
//! [`Transform`] wraps a fallible conversion: an `Err` from the function is
//! reported as a `transform_failed` validation error and never escapes as a
//! panic. [`MapWith`] wraps an infallible one.

use std::fmt::{self, Display};
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// TRANSFORM
// ============================================================================

/// Converts its input with a fallible function.
///
/// Usually the second stage of a [`chain`](crate::combinators::chain), where
/// the input is a previous stage's typed output.
///
/// # Type Parameters
///
/// * `F` - The conversion (`Fn(&I) -> Result<O, E>`)
/// * `I` - The input type
/// * `O` - The output type
/// * `E` - The conversion's error, rendered into the error message
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::json;
///
/// let port = chain(string(), transform(|s: &String| s.parse::<u16>()));
/// assert_eq!(port.validate(&json!("8080")).unwrap(), 8080);
///
/// let err = port.validate(&json!("http")).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::TransformFailed);
/// ```
pub struct Transform<F, I: ?Sized, O, E> {
    convert: F,
    _phantom: PhantomData<fn(&I) -> Result<O, E>>,
}

impl<F, I: ?Sized, O, E> Transform<F, I, O, E> {
    /// Creates a new transform stage.
    pub fn new(convert: F) -> Self {
        Self {
            convert,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O, E> Validate for Transform<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
    I: ?Sized,
    E: Display,
{
    type Input = I;
    type Output = O;

    fn validate(&self, input: &I) -> ValidationResult<O> {
        (self.convert)(input).map_err(|e| {
            tracing::debug!(error = %e, "transform rejected value");
            ValidationError::transform_failed(e.to_string())
        })
    }
}

impl<F: Clone, I: ?Sized, O, E> Clone for Transform<F, I, O, E> {
    fn clone(&self) -> Self {
        Self::new(self.convert.clone())
    }
}

impl<F, I: ?Sized, O, E> fmt::Debug for Transform<F, I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

/// Creates a [`Transform`] stage.
pub fn transform<F, I, O, E>(convert: F) -> Transform<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
    I: ?Sized,
    E: Display,
{
    Transform::new(convert)
}

// ============================================================================
// MAP
// ============================================================================

/// Converts its input with an infallible function.
pub struct MapWith<F, I: ?Sized, O> {
    convert: F,
    _phantom: PhantomData<fn(&I) -> O>,
}

impl<F, I: ?Sized, O> MapWith<F, I, O> {
    /// Creates a new map stage.
    pub fn new(convert: F) -> Self {
        Self {
            convert,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O> Validate for MapWith<F, I, O>
where
    F: Fn(&I) -> O,
    I: ?Sized,
{
    type Input = I;
    type Output = O;

    fn validate(&self, input: &I) -> ValidationResult<O> {
        Ok((self.convert)(input))
    }
}

impl<F: Clone, I: ?Sized, O> Clone for MapWith<F, I, O> {
    fn clone(&self) -> Self {
        Self::new(self.convert.clone())
    }
}

impl<F, I: ?Sized, O> fmt::Debug for MapWith<F, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapWith").finish_non_exhaustive()
    }
}

/// Creates a [`MapWith`] stage.
pub fn map<F, I, O>(convert: F) -> MapWith<F, I, O>
where
    F: Fn(&I) -> O,
    I: ?Sized,
{
    MapWith::new(convert)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::chain;
    use crate::foundation::ErrorKind;
    use crate::validators::{number, string};
    use serde_json::{Number, json};

    #[test]
    fn test_transform_ok() {
        let doubled = chain(
            number(),
            transform(|n: &Number| n.as_i64().map(|v| v * 2).ok_or("not an integer")),
        );
        assert_eq!(doubled.validate(&json!(21)).unwrap(), 42);
    }

    #[test]
    fn test_transform_err_is_transform_failed() {
        let doubled = chain(
            number(),
            transform(|n: &Number| n.as_i64().map(|v| v * 2).ok_or("not an integer")),
        );
        let err = doubled.validate(&json!(1.5)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TransformFailed);
        assert_eq!(err.message, "not an integer");
        assert!(err.path.is_empty());
    }

    #[test]
    fn test_transform_on_unsized_input() {
        let len = transform(|s: &str| Ok::<_, std::convert::Infallible>(s.chars().count()));
        assert_eq!(len.validate("héllo").unwrap(), 5);
    }

    #[test]
    fn test_parse_error_message_is_kept() {
        let stage = chain(string(), transform(|s: &String| s.parse::<i32>()));
        let err = stage.validate(&json!("12a")).unwrap_err();
        assert_eq!(err.message, "invalid digit found in string");
    }

    #[test]
    fn test_map() {
        let upper = chain(string(), map(|s: &String| s.to_uppercase()));
        assert_eq!(upper.validate(&json!("abc")).unwrap(), "ABC");
    }

    #[test]
    fn test_transform_is_pure() {
        let stage = transform(|s: &str| s.parse::<u8>());
        for _ in 0..3 {
            assert_eq!(stage.validate("7").unwrap(), 7);
        }
    }
}
