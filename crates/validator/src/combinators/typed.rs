//! TYPED combinator - decode a validated value into a declared Rust type

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Decodes the inner validator's output into `T` with serde.
///
/// The inner output is serialized to JSON and deserialized as `T`. A mismatch
/// between the two shapes is reported as `transform_failed`.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use roost_validator::object;
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Mention {
///     href: String,
///     name: String,
/// }
///
/// let mention = object! { href: string(), name: string() }.typed::<Mention>();
/// let parsed = mention.validate(&json!({"href": "https://x", "name": "@a", "type": "Mention"})).unwrap();
/// assert_eq!(parsed, Mention { href: "https://x".into(), name: "@a".into() });
/// ```
pub struct Typed<V, T> {
    inner: V,
    _phantom: PhantomData<fn() -> T>,
}

impl<V, T> Typed<V, T> {
    /// Creates a new TYPED combinator.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
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

impl<V, T> Validate for Typed<V, T>
where
    V: Validate,
    V::Output: Serialize,
    T: DeserializeOwned,
{
    type Input = V::Input;
    type Output = T;

    fn validate(&self, input: &Self::Input) -> ValidationResult<T> {
        let output = self.inner.validate(input)?;
        serde_json::to_value(output)
            .and_then(serde_json::from_value)
            .map_err(|e| {
                tracing::debug!(error = %e, target_type = std::any::type_name::<T>(), "typed decode failed");
                ValidationError::transform_failed(format!("Cannot decode validated value: {e}"))
            })
    }
}

impl<V: Clone, T> Clone for Typed<V, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V: fmt::Debug, T> fmt::Debug for Typed<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("inner", &self.inner)
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{array_of, fallback, optional};
    use crate::foundation::{ErrorKind, ValidateExt};
    use crate::object;
    use crate::validators::{number, string};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Profile {
        username: String,
        followers: u32,
        bio: Option<String>,
        aliases: Vec<String>,
    }

    fn profile() -> impl Validate<Input = serde_json::Value, Output = Profile> {
        object! {
            username: string(),
            followers: number(),
            bio: optional(string()),
            aliases: fallback(array_of(string()), Vec::new),
        }
        .typed::<Profile>()
    }

    #[test]
    fn test_decodes_record() {
        let parsed = profile()
            .validate(&json!({"username": "ada", "followers": 3, "bio": null}))
            .unwrap();
        assert_eq!(
            parsed,
            Profile {
                username: "ada".into(),
                followers: 3,
                bio: None,
                aliases: Vec::new(),
            }
        );
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let err = profile().validate(&json!({"username": 1, "followers": 3})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Aggregate);
    }

    #[test]
    fn test_decode_mismatch_is_transform_failed() {
        let err = profile()
            .validate(&json!({"username": "ada", "followers": -1}))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TransformFailed);
    }

    #[test]
    fn test_typed_primitive() {
        let count = number().typed::<u8>();
        assert_eq!(count.validate(&json!(200)).unwrap(), 200);
        assert!(count.validate(&json!(300)).is_err());
    }
}
