//! EITHER combinator - ordered alternatives
//!
//! [`Either`] tries a list of alternatives in order and returns the first
//! success. When none matches, the error is `union_exhausted` and carries every
//! alternative's failure, in order.
//!
//! Alternatives come in two flavours:
//!
//! - a tuple of 2 to 4 validators of different types; the output is a
//!   [`Union2`]/[`Union3`]/[`Union4`] recording which one matched
//! - a `Vec` of validators of one type (often [`DynValidator`]); the output is
//!   that type's output
//!
//! [`DynValidator`]: crate::foundation::DynValidator
//!
//! # Examples
//!
//! ```
//! use roost_validator::prelude::*;
//! use serde_json::json;
//!
//! let id = either((string(), number()));
//! assert!(matches!(id.validate(&json!("abc")).unwrap(), Union2::First(_)));
//! assert!(matches!(id.validate(&json!(7)).unwrap(), Union2::Second(_)));
//!
//! let err = id.validate(&json!(null)).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::UnionExhausted);
//! assert_eq!(err.nested.len(), 2);
//! ```

use serde::Serialize;

use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// UNION OUTPUTS
// ============================================================================

/// Output of a two-way [`Either`].
///
/// Serializes as the matched value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Union2<A, B> {
    /// The first alternative matched.
    First(A),
    /// The second alternative matched.
    Second(B),
}

/// Output of a three-way [`Either`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Union3<A, B, C> {
    /// The first alternative matched.
    First(A),
    /// The second alternative matched.
    Second(B),
    /// The third alternative matched.
    Third(C),
}

/// Output of a four-way [`Either`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Union4<A, B, C, D> {
    /// The first alternative matched.
    First(A),
    /// The second alternative matched.
    Second(B),
    /// The third alternative matched.
    Third(C),
    /// The fourth alternative matched.
    Fourth(D),
}

impl<A, B> Union2<A, B> {
    /// Zero-based position of the matched alternative.
    pub const fn index(&self) -> usize {
        match self {
            Self::First(_) => 0,
            Self::Second(_) => 1,
        }
    }
}

impl<T> Union2<T, T> {
    /// Returns the matched value when both alternatives share a type.
    pub fn into_inner(self) -> T {
        match self {
            Self::First(v) | Self::Second(v) => v,
        }
    }
}

impl<A, B, C> Union3<A, B, C> {
    /// Zero-based position of the matched alternative.
    pub const fn index(&self) -> usize {
        match self {
            Self::First(_) => 0,
            Self::Second(_) => 1,
            Self::Third(_) => 2,
        }
    }
}

impl<T> Union3<T, T, T> {
    /// Returns the matched value when all alternatives share a type.
    pub fn into_inner(self) -> T {
        match self {
            Self::First(v) | Self::Second(v) | Self::Third(v) => v,
        }
    }
}

impl<A, B, C, D> Union4<A, B, C, D> {
    /// Zero-based position of the matched alternative.
    pub const fn index(&self) -> usize {
        match self {
            Self::First(_) => 0,
            Self::Second(_) => 1,
            Self::Third(_) => 2,
            Self::Fourth(_) => 3,
        }
    }
}

impl<T> Union4<T, T, T, T> {
    /// Returns the matched value when all alternatives share a type.
    pub fn into_inner(self) -> T {
        match self {
            Self::First(v) | Self::Second(v) | Self::Third(v) | Self::Fourth(v) => v,
        }
    }
}

// ============================================================================
// ALTERNATIVES
// ============================================================================

/// An ordered set of validators that [`Either`] can try.
pub trait Alternatives {
    /// Input shared by every alternative.
    type Input: ?Sized;

    /// Output of whichever alternative matched.
    type Output;

    /// Number of alternatives.
    fn count(&self) -> usize;

    /// Tries each alternative in order.
    ///
    /// Returns the first success, or every failure in order.
    fn try_each(&self, input: &Self::Input) -> Result<Self::Output, Vec<ValidationError>>;
}

macro_rules! tuple_alternatives {
    (
        $union:ident, $count:literal;
        $head:ident . $head_idx:tt => $head_variant:ident
        $(, $ty:ident . $idx:tt => $variant:ident)*
    ) => {
        impl<$head, $($ty),*> Alternatives for ($head, $($ty,)*)
        where
            $head: Validate,
            $($ty: Validate<Input = $head::Input>,)*
        {
            type Input = $head::Input;
            type Output = $union<$head::Output, $($ty::Output),*>;

            fn count(&self) -> usize {
                $count
            }

            fn try_each(
                &self,
                input: &Self::Input,
            ) -> Result<Self::Output, Vec<ValidationError>> {
                let mut attempts = Vec::with_capacity($count);
                match self.$head_idx.validate(input) {
                    Ok(value) => return Ok($union::$head_variant(value)),
                    Err(e) => attempts.push(e),
                }
                $(
                    match self.$idx.validate(input) {
                        Ok(value) => return Ok($union::$variant(value)),
                        Err(e) => attempts.push(e),
                    }
                )*
                Err(attempts)
            }
        }
    };
}

tuple_alternatives!(Union2, 2; A.0 => First, B.1 => Second);
tuple_alternatives!(Union3, 3; A.0 => First, B.1 => Second, C.2 => Third);
tuple_alternatives!(Union4, 4; A.0 => First, B.1 => Second, C.2 => Third, D.3 => Fourth);

impl<V> Alternatives for Vec<V>
where
    V: Validate,
{
    type Input = V::Input;
    type Output = V::Output;

    fn count(&self) -> usize {
        self.len()
    }

    fn try_each(&self, input: &Self::Input) -> Result<Self::Output, Vec<ValidationError>> {
        let mut attempts = Vec::with_capacity(self.len());
        for alternative in self {
            match alternative.validate(input) {
                Ok(value) => return Ok(value),
                Err(e) => attempts.push(e),
            }
        }
        Err(attempts)
    }
}

// ============================================================================
// EITHER COMBINATOR
// ============================================================================

/// Returns the output of the first alternative that accepts the input.
///
/// Alternatives after the first success are not evaluated. An empty `Vec` of
/// alternatives rejects everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Either<A> {
    alternatives: A,
}

impl<A> Either<A> {
    /// Creates a new `Either` combinator.
    pub fn new(alternatives: A) -> Self {
        Self { alternatives }
    }

    /// Returns a reference to the alternatives.
    pub fn alternatives(&self) -> &A {
        &self.alternatives
    }

    /// Extracts the alternatives.
    pub fn into_inner(self) -> A {
        self.alternatives
    }
}

impl<A> Validate for Either<A>
where
    A: Alternatives,
{
    type Input = A::Input;
    type Output = A::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        self.alternatives.try_each(input).map_err(|attempts| {
            tracing::debug!(
                alternatives = self.alternatives.count(),
                "no alternative matched"
            );
            ValidationError::union_exhausted(attempts)
        })
    }
}

/// Creates an [`Either`] from a tuple or `Vec` of alternatives.
pub fn either<A>(alternatives: A) -> Either<A>
where
    A: Alternatives,
{
    Either::new(alternatives)
}

// ============================================================================
// TESTS
// ============================================================================
