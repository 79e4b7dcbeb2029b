//! LAZY combinator - deferred schema construction

use crate::foundation::{Validate, ValidationResult};
use std::sync::OnceLock;

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Defers building a schema until it is first used.
///
/// This is how a schema refers to itself: constructing a `Lazy` never calls
/// the thunk, so a function may embed `lazy(itself)` in the schema it returns.
/// The built schema is memoized, and behaves exactly like the schema the thunk
/// returns.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use roost_validator::object;
/// use serde_json::json;
///
/// fn comment() -> Object {
///     object! {
///         text: string(),
///         replies: array_of(lazy(comment)),
///     }
/// }
///
/// let thread = comment();
/// let input = json!({"text": "a", "replies": [{"text": "b", "replies": []}]});
/// assert!(thread.validate(&input).is_ok());
///
/// let bad = json!({"text": "a", "replies": [{"text": 1, "replies": []}]});
/// assert_eq!(thread.validate(&bad).unwrap_err().leaves()[0].path_string(), "replies[0].text");
/// ```
pub struct Lazy<V, F>
where
    F: Fn() -> V,
{
    init: F,
    validator: OnceLock<V>,
}

impl<V, F> Lazy<V, F>
where
    F: Fn() -> V,
{
    /// Creates a new LAZY combinator.
    ///
    /// The `init` function is called once, on first validation.
    pub fn new(init: F) -> Self {
        Self {
            init,
            validator: OnceLock::new(),
        }
    }

    /// Returns a reference to the built schema, if any.
    pub fn get(&self) -> Option<&V> {
        self.validator.get()
    }

    /// Returns true if the schema has been built.
    pub fn is_initialized(&self) -> bool {
        self.validator.get().is_some()
    }

    /// Forces construction and returns a reference to the schema.
    pub fn force(&self) -> &V {
        self.validator.get_or_init(|| {
            tracing::trace!("resolving lazy schema");
            (self.init)()
        })
    }
}

impl<V, F> Validate for Lazy<V, F>
where
    V: Validate,
    F: Fn() -> V,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        self.force().validate(input)
    }
}

// Manual Debug impl since F might not implement Debug
impl<V, F> std::fmt::Debug for Lazy<V, F>
where
    V: std::fmt::Debug,
    F: Fn() -> V,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("validator", &self.validator.get())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Creates a LAZY combinator.
pub fn lazy<V, F>(init: F) -> Lazy<V, F>
where
    F: Fn() -> V,
{
    Lazy::new(init)
}

// ============================================================================
// TESTS
// ============================================================================
