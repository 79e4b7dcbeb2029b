//! Built-in leaf validators
//!
//! # Categories
//!
//! - **Primitive**: [`string`], [`number`], [`boolean`], [`any`]
//! - **Literal**: [`exact`], [`exact_from`]
//! - **Refinement**: [`predicate`]
//! - **Decoding**: [`parse_json`], [`json`]
//!
//! # Examples
//!
//! ```
//! use roost_validator::prelude::*;
//! use serde_json::json;
//!
//! assert!(string().validate(&json!("alice")).is_ok());
//! assert!(number().validate(&json!("42")).is_err());
//! assert!(exact("Follow").validate(&json!("Follow")).is_ok());
//! ```

pub mod json_string;
pub mod literal;
pub mod predicate;
pub mod primitive;

pub use json_string::{JsonText, json, parse_json};
pub use literal::{Exact, exact, exact_from};
pub use predicate::{Predicate, predicate};
pub use primitive::{AnyValue, Bool, Num, Str, any, boolean, number, string};
