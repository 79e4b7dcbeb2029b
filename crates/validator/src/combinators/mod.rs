//! Combinators that compose validators into schemas
//!
//! # Categories
//!
//! - **Structural**: [`object`], [`array_of`], [`object_of`]
//! - **Pipeline**: [`chain`], [`transform`], [`map`]
//! - **Alternatives**: [`either`], [`fallback`], [`optional`]
//! - **Recursion**: [`lazy`]
//! - **Presentation**: [`with_message`], [`Typed`]
//!
//! Structural combinators collect every child failure into one aggregate
//! error; `chain` stops at the first one.

pub mod array;
pub mod chain;
pub mod either;
pub mod fallback;
pub mod lazy;
pub mod message;
pub mod object;
pub mod optional;
pub mod record;
pub mod transform;
pub mod typed;

pub use array::{ArrayOf, array_of};
pub use chain::{Chain, chain};
pub use either::{Alternatives, Either, Union2, Union3, Union4, either};
pub use fallback::{Fallback, fallback};
pub use lazy::{Lazy, lazy};
pub use message::{WithMessage, with_message};
pub use object::{Object, object};
pub use optional::{Optional, optional};
pub use record::{ObjectOf, object_of};
pub use transform::{MapWith, Transform, map, transform};
pub use typed::Typed;
