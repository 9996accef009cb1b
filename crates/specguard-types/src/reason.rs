use std::fmt::Debug;

/// Bound for failure-reason types.
///
/// Callers pick a closed enum per domain (`RegistrationFailure`,
/// `ClaimDenialReason`, ...). Closed-ness is not enforced beyond the type
/// system; anything comparable and debuggable qualifies.
pub trait FailureReason: Clone + PartialEq + Debug {}

impl<R> FailureReason for R where R: Clone + PartialEq + Debug {}
