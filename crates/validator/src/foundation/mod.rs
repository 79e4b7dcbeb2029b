//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`], [`PathSegment`], [`SchemaError`]
//! - **Result**: [`ValidationResult`]
//!
//! # Architecture
//!
//! ## 1. One operation
//!
//! Every schema node, leaf or combinator, implements `Validate::validate`.
//! A schema is an immutable tree of nodes; validating a value calls the root,
//! which recurses depth-first into its children.
//!
//! ## 2. Inferred output types
//!
//! `Validate::Output` composes the same way the runtime checks do:
//!
//! ```
//! use roost_validator::prelude::*;
//! use serde_json::json;
//!
//! let tags = array_of(string());
//! let parsed: Vec<String> = tags.validate(&json!(["a", "b"])).unwrap();
//! assert_eq!(parsed, ["a", "b"]);
//! ```
//!
//! ## 3. Structured errors
//!
//! Failures carry a kind, a message, an absolute path and nested errors:
//!
//! ```
//! use roost_validator::prelude::*;
//! use serde_json::json;
//!
//! let error = array_of(number()).validate(&json!([1, "two"])).unwrap_err();
//! assert_eq!(error.kind, ErrorKind::Aggregate);
//! assert_eq!(error.nested[0].path_string(), "[1]");
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ErrorKind, Path, PathSegment, SchemaError, ValidationError};
pub use traits::{DynValidator, Erased, Validate, ValidateExt};
pub use value::{Record, type_name, values_equal};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The outcome of one validation call: the validated value or the failure.
///
/// `is_ok()` is the "is valid" check callers branch on.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value against a schema.
///
/// This is the free-function form of [`Validate::validate`].
///
/// # Examples
///
/// ```
/// use roost_validator::foundation::validate_value;
/// use roost_validator::validators::boolean;
/// use serde_json::json;
///
/// assert_eq!(validate_value(&boolean(), &json!(true)), Ok(true));
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(validator: &V, value: &V::Input) -> ValidationResult<V::Output>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}

// ============================================================================
// TESTS
// ============================================================================
