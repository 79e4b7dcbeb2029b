//! # roost-validator
//!
//! Declarative schemas for untyped JSON input, used at every boundary of the
//! roost server where data arrives as `serde_json::Value`: request bodies,
//! federation payloads and files loaded from disk.
//!
//! A schema is an immutable tree of validators. Calling
//! [`validate`](foundation::Validate::validate) on the root checks a value and,
//! on success, returns a typed, possibly transformed result; on failure it
//! returns one [`ValidationError`](foundation::ValidationError) carrying every
//! problem found, each with its path from the root.
//!
//! ## Quick Start
//!
//! ```
//! use roost_validator::prelude::*;
//! use roost_validator::object;
//! use serde_json::json;
//!
//! let follow = object! {
//!     "@context" => any(),
//!     "type" => exact("Follow"),
//!     "actor" => string(),
//!     "object" => string(),
//! };
//!
//! let input = json!({
//!     "@context": "https://www.w3.org/ns/activitystreams",
//!     "type": "Follow",
//!     "actor": "https://a.example/users/ada",
//!     "object": "https://b.example/users/bob",
//! });
//! assert!(follow.validate(&input).is_ok());
//!
//! let err = follow.validate(&json!({"type": "Like"})).unwrap_err();
//! assert_eq!(err.nested.len(), 3);
//! ```
//!
//! ## Type Inference
//!
//! Every validator has an associated `Output` type, so the typed result of a
//! schema is derived by the compiler from the way it is composed: `string()`
//! yields `String`, `array_of(string())` yields `Vec<String>`,
//! `either((string(), number()))` yields `Union2<String, Number>`. Object
//! schemas yield a JSON [`Record`](foundation::Record); decode it into a
//! struct with [`typed`](foundation::ValidateExt::typed).
//!
//! ## Building Blocks
//!
//! - **Primitives**: [`string`](validators::string), [`number`](validators::number),
//!   [`boolean`](validators::boolean), [`exact`](validators::exact),
//!   [`any`](validators::any), [`predicate`](validators::predicate)
//! - **Structure**: [`object`](combinators::object), [`array_of`](combinators::array_of),
//!   [`object_of`](combinators::object_of)
//! - **Control**: [`chain`](combinators::chain), [`transform`](combinators::transform),
//!   [`either`](combinators::either), [`fallback`](combinators::fallback),
//!   [`lazy`](combinators::lazy)

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (Chain<Either<(..)>, ..>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
