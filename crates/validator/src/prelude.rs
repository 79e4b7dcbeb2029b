//! Prelude module for convenient imports.
//!
//! Provides a single `use roost_validator::prelude::*;` import that brings
//! in the core traits, the error model, every built-in validator and every
//! combinator. The schema macros live at the crate root
//! (`use roost_validator::{object, chain, either};`).
//!
//! # Examples
//!
//! ```
//! use roost_validator::prelude::*;
//! use serde_json::json;
//!
//! let tags = array_of(string());
//! let counters = object_of(number());
//! let visibility = either(vec![exact("public"), exact("unlisted"), exact("private")]);
//!
//! assert!(tags.validate(&json!(["a"])).is_ok());
//! assert!(counters.validate(&json!({"likes": 1})).is_ok());
//! assert!(visibility.validate(&json!("direct")).is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, value helpers
// ============================================================================

pub use crate::foundation::{
    DynValidator, ErrorKind, Path, PathSegment, Record, SchemaError, Validate, ValidateExt,
    ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Alternatives, ArrayOf, Chain, Either, Fallback, Lazy, MapWith, Object, ObjectOf, Optional,
    Transform, Typed, Union2, Union3, Union4, WithMessage, array_of, chain, either, fallback,
    lazy, map, object, object_of, optional, transform, with_message,
};
