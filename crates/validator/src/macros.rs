//! Macros for building schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`object!`]: Build an [`Object`](crate::combinators::Object) from `field: validator` pairs
//! - [`chain!`]: Left-nest any number of pipeline stages
//! - [`either!`]: Try alternatives in order
//!
//! # Examples
//!
//! ```
//! use roost_validator::prelude::*;
//! use roost_validator::{chain, either, object};
//! use serde_json::json;
//!
//! let user = object! {
//!     username: string(),
//!     name: string(),
//!     summary: fallback(string(), String::new),
//! };
//!
//! let body = chain!(parse_json(), user);
//! let record = body.validate(&json!(r#"{"username":"ada","name":"Ada"}"#)).unwrap();
//! assert_eq!(record["summary"], "");
//!
//! let id = either!(string(), number());
//! assert!(id.validate(&json!(7)).is_ok());
//! ```

// ============================================================================
// PRIMITIVE MACRO
// ============================================================================

/// Creates a zero-sized JSON type check: struct definition, `Validate`
/// implementation and factory function.
///
/// The extractor receives the input `&Value` and returns `Some(output)` when
/// the JSON type matches; `None` becomes a `type_mismatch` error naming the
/// expected kind.
///
/// ```rust,ignore
/// primitive! {
///     /// Validates that the input is a JSON string.
///     pub Str -> String, "string";
///     extract(input) { input.as_str().map(str::to_owned) }
///     fn string();
/// }
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! primitive {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident -> $output:ty, $expected:literal;
        extract($input:ident) $extract:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = ::serde_json::Value;
            type Output = $output;

            fn validate(
                &self,
                input: &::serde_json::Value,
            ) -> $crate::foundation::ValidationResult<$output> {
                let $input = input;
                let extracted: ::core::option::Option<$output> = $extract;
                extracted.ok_or_else(|| {
                    $crate::foundation::ValidationError::type_mismatch($expected, input)
                })
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

// ============================================================================
// OBJECT MACRO
// ============================================================================

/// Builds an [`Object`](crate::combinators::Object) schema.
///
/// Fields are declared in order as `name: validator`; use the
/// `"name" => validator` form for keys that are not Rust identifiers.
///
/// ```
/// use roost_validator::prelude::*;
/// use roost_validator::object;
/// use serde_json::json;
///
/// let activity = object! {
///     "@context" => exact("https://www.w3.org/ns/activitystreams"),
///     "type" => string(),
/// };
/// assert!(activity.validate(&json!({
///     "@context": "https://www.w3.org/ns/activitystreams",
///     "type": "Follow",
/// })).is_ok());
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::combinators::Object::new()
    };
    ($($field:ident : $validator:expr),+ $(,)?) => {
        $crate::combinators::Object::new()
            $(.field(::core::stringify!($field), $validator))+
    };
    ($($field:literal => $validator:expr),+ $(,)?) => {
        $crate::combinators::Object::new()
            $(.field($field, $validator))+
    };
}

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Builds a pipeline from any number of stages.
///
/// `chain!(a, b, c)` is `Chain::new(Chain::new(a, b), c)`: each stage receives
/// the previous stage's output and the first failure stops the pipeline.
#[macro_export]
macro_rules! chain {
    (@acc $acc:expr) => {
        $acc
    };
    (@acc $acc:expr, $next:expr $(, $rest:expr)*) => {
        $crate::chain!(@acc $crate::combinators::Chain::new($acc, $next) $(, $rest)*)
    };
    ($($stage:expr),+ $(,)?) => {
        $crate::chain!(@acc $($stage),+)
    };
}

// ============================================================================
// EITHER MACRO
// ============================================================================

/// Tries two to four heterogeneous alternatives in order.
///
/// `either!(a, b)` is `either((a, b))`; the output is a
/// [`Union2`](crate::combinators::Union2) (up to `Union4`).
#[macro_export]
macro_rules! either {
    ($($alternative:expr),+ $(,)?) => {
        $crate::combinators::Either::new(($($alternative,)+))
    };
}
