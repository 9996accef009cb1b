//! Pure specification evaluation (no IO).
//!
//! Input: a context value owned by the caller.
//! Output: `SpecificationResult`s aggregated into a `PolicyResult`.
//!
//! Single specifications come from [`of`] or a direct [`Specification`]
//! implementation; [`any_of`], [`all_of`] and [`not`] compose them; a
//! [`Policy`] sequences them under fail-fast or evaluate-all semantics.

#![forbid(unsafe_code)]

pub mod composite;
pub mod error;
pub mod policy;
pub mod specification;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use composite::{AllOf, AnyOf, Not, all_of, any_of, any_of_with, not};
pub use error::SpecificationError;
pub use policy::{EvaluationMode, Policy};
pub use specification::{
    BoxedSpecification, PredicateSpecification, SharedSpecification, Specification,
    SpecificationExt, of,
};
pub use specguard_types::{FailureReason, PolicyResult, SpecificationResult};
