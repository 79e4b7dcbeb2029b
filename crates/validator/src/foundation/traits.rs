//! Core traits for the validation system
//!
//! This module defines the single operation every schema node implements,
//! [`Validate::validate`], and the fluent [`ValidateExt`] API that composes
//! nodes into schemas.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

use crate::combinators::{Chain, Either, Fallback, MapWith, Optional, Transform, Typed, WithMessage};
use crate::foundation::{ValidationError, ValidationResult};
use crate::validators::Predicate;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator checks an input and, on success, produces a value of type
/// [`Output`](Self::Output). The output type is what the schema "infers": the
/// compiler derives it from the way validators are composed, so callers never
/// restate it.
///
/// Schema entry points take `serde_json::Value` as input. Inside a
/// [`chain`](crate::combinators::chain) a stage's input is the previous
/// stage's output.
///
/// # Examples
///
/// ```
/// use roost_validator::foundation::{Validate, ValidationError, ValidationResult};
/// use serde_json::Value;
///
/// struct NonEmptyString;
///
/// impl Validate for NonEmptyString {
///     type Input = Value;
///     type Output = String;
///
///     fn validate(&self, input: &Value) -> ValidationResult<String> {
///         match input.as_str() {
///             Some(s) if !s.is_empty() => Ok(s.to_owned()),
///             Some(_) => Err(ValidationError::predicate_failed("must not be empty")),
///             None => Err(ValidationError::type_mismatch("string", input)),
///         }
///     }
/// }
///
/// assert_eq!(NonEmptyString.validate(&Value::from("hi")).unwrap(), "hi");
/// assert!(NonEmptyString.validate(&Value::from("")).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// The type produced on success.
    type Output;

    /// Validates the input value.
    ///
    /// Never panics on bad data; every data problem is an `Err`.
    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output>;
}

impl<V> Validate for &V
where
    V: Validate + ?Sized,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }
}

impl<V> Validate for Arc<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }
}

// ============================================================================
// TYPE ERASURE
// ============================================================================

/// A type-erased validator over JSON values.
///
/// Object fields and homogeneous `either` lists hold validators of different
/// concrete types, so they store this instead.
pub type DynValidator = Box<dyn Validate<Input = Value, Output = Value> + Send + Sync>;

/// Adapts a validator so its output is a `serde_json::Value`.
///
/// Produced by [`ValidateExt::erase`].
#[derive(Debug, Clone, Copy)]
pub struct Erased<V> {
    inner: V,
}

impl<V> Erased<V> {
    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Erased<V>
where
    V: Validate<Input = Value>,
    V::Output: Serialize,
{
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> ValidationResult<Value> {
        let output = self.inner.validate(input)?;
        serde_json::to_value(output).map_err(|e| {
            ValidationError::transform_failed(format!("Output is not representable as JSON: {e}"))
        })
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::{Number, json};
///
/// let port = number()
///     .refine(|n| n.as_u64().is_some_and(|p| p > 0 && p < 65536), "must be a TCP port")
///     .fallback(|| Number::from(8080));
///
/// assert_eq!(port.validate(&json!(443)).unwrap(), Number::from(443));
/// assert_eq!(port.validate(&json!("http")).unwrap(), Number::from(8080));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Feeds this validator's output into `next` (fail-fast pipeline).
    ///
    /// Equivalent to [`chain(self, next)`](crate::combinators::chain).
    fn and_then<V>(self, next: V) -> Chain<Self, V>
    where
        V: Validate<Input = Self::Output>,
    {
        Chain::new(self, next)
    }

    /// Tries `self`, then `other`, returning the first success.
    ///
    /// The output is a [`Union2`](crate::combinators::Union2) recording which
    /// alternative matched.
    fn or<V>(self, other: V) -> Either<(Self, V)>
    where
        V: Validate<Input = Self::Input>,
    {
        Either::new((self, other))
    }

    /// Replaces any failure with a freshly computed default.
    fn fallback<F>(self, default: F) -> Fallback<Self, F>
    where
        F: Fn() -> Self::Output,
    {
        Fallback::new(self, default)
    }

    /// Maps a successful output through an infallible function.
    fn map<O, F>(self, f: F) -> Chain<Self, MapWith<F, Self::Output, O>>
    where
        F: Fn(&Self::Output) -> O,
    {
        Chain::new(self, MapWith::new(f))
    }

    /// Maps a successful output through a fallible function; an `Err`
    /// becomes a `transform_failed` error.
    fn try_map<O, E, F>(self, f: F) -> Chain<Self, Transform<F, Self::Output, O, E>>
    where
        F: Fn(&Self::Output) -> Result<O, E>,
        E: std::fmt::Display,
    {
        Chain::new(self, Transform::new(f))
    }

    /// Refines a successful output with a boolean check.
    fn refine<F>(
        self,
        check: F,
        message: impl Into<Cow<'static, str>>,
    ) -> Chain<Self, Predicate<F, Self::Output>>
    where
        F: Fn(&Self::Output) -> bool,
        Self::Output: Clone,
    {
        Chain::new(self, Predicate::new(check, message))
    }

    /// Accepts `null` (or an absent object field) as `None`.
    fn optional(self) -> Optional<Self>
    where
        Self: Validate<Input = Value>,
    {
        Optional::new(self)
    }

    /// Replaces the message of any failure, keeping kind and path.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Decodes the validated output into a caller-declared type.
    fn typed<T>(self) -> Typed<Self, T>
    where
        Self::Output: Serialize,
        T: DeserializeOwned,
    {
        Typed::new(self)
    }

    /// Erases the output type to `serde_json::Value`.
    fn erase(self) -> Erased<Self>
    where
        Self: Validate<Input = Value>,
        Self::Output: Serialize,
    {
        Erased { inner: self }
    }

    /// Erases and boxes the validator.
    fn boxed(self) -> DynValidator
    where
        Self: Validate<Input = Value> + Send + Sync + 'static,
        Self::Output: Serialize,
    {
        Box::new(self.erase())
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
