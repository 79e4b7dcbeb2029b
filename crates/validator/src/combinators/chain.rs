//! CHAIN combinator - sequential validation pipeline
//!
//! This module provides the [`Chain`] combinator which runs two validators in
//! sequence, feeding the first one's output into the second. The pipeline is
//! fail-fast: the first failure is returned unchanged and later stages never
//! run.
//!
//! Longer pipelines nest to the left; the [`chain!`](crate::chain) macro
//! writes them flat.
//!
//! # Examples
//!
//! ```
//! use roost_validator::prelude::*;
//! use serde_json::json;
//!
//! let trimmed = chain(string(), map(|s: &String| s.trim().to_owned()));
//! assert_eq!(trimmed.validate(&json!("  ada ")).unwrap(), "ada");
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Runs `first`, then `second` on the output of `first`.
///
/// # Type Parameters
///
/// * `A` - The first stage; its input is the pipeline's input
/// * `B` - The second stage; its input is `A`'s output
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use serde_json::{Number, json};
///
/// let port = Chain::new(
///     number(),
///     Predicate::new(|n: &Number| n.as_u64().is_some(), "must be unsigned"),
/// );
/// assert!(port.validate(&json!(80)).is_ok());
/// assert!(port.validate(&json!(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Chain<A, B> {
    /// Creates a new `Chain` combinator.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first stage.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second stage.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Extracts both stages.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Validate for Chain<A, B>
where
    A: Validate,
    B: Validate<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        let intermediate = self.first.validate(input)?;
        self.second.validate(&intermediate)
    }
}

impl<A, B> Chain<A, B>
where
    A: Validate,
    B: Validate<Input = A::Output>,
{
    /// Appends another stage to the pipeline.
    pub fn then<C>(self, next: C) -> Chain<Self, C>
    where
        C: Validate<Input = B::Output>,
    {
        Chain::new(self, next)
    }
}

/// Creates a [`Chain`] from two validators.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Validate,
    B: Validate<Input = A::Output>,
{
    Chain::new(first, second)
}

// ============================================================================
// TESTS
// ============================================================================
