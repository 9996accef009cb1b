//! Public facade over the specguard result types and evaluation engine.
//!
//! ```
//! use specguard::{Policy, SpecificationExt, all_of, not, of};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Reason {
//!     TooYoung,
//!     InsufficientFunds,
//!     Blocked,
//! }
//!
//! struct Applicant {
//!     age: u32,
//!     balance: u32,
//!     blocked: bool,
//! }
//!
//! let is_adult = of("IsAdult", |a: &Applicant| a.age >= 18, Reason::TooYoung);
//! let has_funds = of("HasFunds", |a: &Applicant| a.balance >= 100, Reason::InsufficientFunds);
//! let eligible = all_of("Eligible", [is_adult.boxed(), has_funds.boxed()]).unwrap();
//! let not_blocked = not(
//!     "NotBlocked",
//!     Reason::Blocked,
//!     of("IsBlocked", |a: &Applicant| a.blocked, Reason::Blocked),
//! );
//!
//! let policy = Policy::create().with(eligible).with(not_blocked);
//! assert_eq!(policy.expression(), "((IsAdult AND HasFunds) AND NOT IsBlocked)");
//!
//! let applicant = Applicant { age: 16, balance: 50, blocked: false };
//! let result = policy.evaluate_all(&applicant);
//! assert!(!result.all_passed());
//! assert_eq!(
//!     result.failure_reasons(),
//!     vec![Reason::TooYoung, Reason::InsufficientFunds]
//! );
//! ```

#![forbid(unsafe_code)]

pub use specguard_domain::{
    AllOf, AnyOf, BoxedSpecification, EvaluationMode, Not, Policy, PredicateSpecification,
    SharedSpecification, Specification, SpecificationError, SpecificationExt, all_of, any_of,
    any_of_with, not, of,
};
pub use specguard_types::{FailureReason, PolicyResult, SpecificationResult};
