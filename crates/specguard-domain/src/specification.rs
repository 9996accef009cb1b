use specguard_types::{FailureReason, SpecificationResult};
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A named rule over a context type.
///
/// `evaluate` is the only required method. It must be a pure function of the
/// context: implementations may close over configuration (thresholds, tiers)
/// but must not keep per-call mutable state. Returning many reasons from one
/// call is allowed, e.g. one reason per invalid sub-item.
///
/// A rule that does not hold is reported through a failing result, never a
/// panic. A panic raised inside `evaluate` propagates to the caller untouched.
pub trait Specification {
    type Context: ?Sized;
    type Reason: FailureReason;

    fn evaluate(&self, context: &Self::Context) -> SpecificationResult<Self::Reason>;

    /// Identity used in results. Defaults to the implementing type's name
    /// without its module path or generic arguments.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }

    /// Boolean-logic rendering of this specification's structure.
    fn expression(&self) -> String {
        self.name().to_string()
    }
}

/// Owned, type-erased specification as held by composites and policies.
pub type BoxedSpecification<T, R> =
    Box<dyn Specification<Context = T, Reason = R> + Send + Sync>;

/// Reference-counted specification for reuse across several composites or policies.
pub type SharedSpecification<T, R> =
    Arc<dyn Specification<Context = T, Reason = R> + Send + Sync>;

fn short_type_name<S: ?Sized>() -> &'static str {
    let full = type_name::<S>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Specification backed by a boolean predicate and a single failure reason.
pub struct PredicateSpecification<T: ?Sized, R, F> {
    name: String,
    predicate: F,
    failure_reason: R,
    _context: PhantomData<fn(&T)>,
}

/// Build a specification that passes when `predicate` holds and otherwise
/// fails with exactly `[failure_reason]`.
pub fn of<T, R, F>(
    name: impl Into<String>,
    predicate: F,
    failure_reason: R,
) -> PredicateSpecification<T, R, F>
where
    T: ?Sized,
    R: FailureReason,
    F: Fn(&T) -> bool,
{
    PredicateSpecification {
        name: name.into(),
        predicate,
        failure_reason,
        _context: PhantomData,
    }
}

impl<T, R, F> Specification for PredicateSpecification<T, R, F>
where
    T: ?Sized,
    R: FailureReason,
    F: Fn(&T) -> bool,
{
    type Context = T;
    type Reason = R;

    fn evaluate(&self, context: &T) -> SpecificationResult<R> {
        if (self.predicate)(context) {
            SpecificationResult::pass(self.name.as_str())
        } else {
            SpecificationResult::fail(self.name.as_str(), self.failure_reason.clone())
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: ?Sized, R: fmt::Debug, F> fmt::Debug for PredicateSpecification<T, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateSpecification")
            .field("name", &self.name)
            .field("failure_reason", &self.failure_reason)
            .finish_non_exhaustive()
    }
}

impl<S: Specification + ?Sized> Specification for &S {
    type Context = S::Context;
    type Reason = S::Reason;

    fn evaluate(&self, context: &S::Context) -> SpecificationResult<S::Reason> {
        (**self).evaluate(context)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn expression(&self) -> String {
        (**self).expression()
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    type Context = S::Context;
    type Reason = S::Reason;

    fn evaluate(&self, context: &S::Context) -> SpecificationResult<S::Reason> {
        (**self).evaluate(context)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn expression(&self) -> String {
        (**self).expression()
    }
}

impl<S: Specification + ?Sized> Specification for Arc<S> {
    type Context = S::Context;
    type Reason = S::Reason;

    fn evaluate(&self, context: &S::Context) -> SpecificationResult<S::Reason> {
        (**self).evaluate(context)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn expression(&self) -> String {
        (**self).expression()
    }
}

/// Conversions into the erased forms held by composites and policies.
pub trait SpecificationExt: Specification {
    fn boxed(self) -> BoxedSpecification<Self::Context, Self::Reason>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }

    fn shared(self) -> SharedSpecification<Self::Context, Self::Reason>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<S: Specification + ?Sized> SpecificationExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Account, Reason, account, has_funds, is_adult};

    struct NamelessRule;

    impl Specification for NamelessRule {
        type Context = Account;
        type Reason = Reason;

        fn evaluate(&self, _: &Account) -> SpecificationResult<Reason> {
            SpecificationResult::pass(self.name())
        }
    }

    struct PerItemRule;

    impl Specification for PerItemRule {
        type Context = [u32];
        type Reason = Reason;

        fn name(&self) -> &str {
            "NoZeroes"
        }

        fn evaluate(&self, items: &[u32]) -> SpecificationResult<Reason> {
            SpecificationResult::fail_with(
                self.name(),
                items.iter().filter(|v| **v == 0).map(|_| Reason::Blocked),
            )
        }
    }

    #[test]
    fn predicate_spec_passes_and_fails_with_single_reason() {
        let spec = is_adult();
        let pass = spec.evaluate(&account(30, 0));
        assert!(pass.passed());
        assert_eq!(pass.name(), "IsAdult");

        let fail = spec.evaluate(&account(16, 0));
        assert_eq!(fail, SpecificationResult::fail("IsAdult", Reason::TooYoung));
    }

    #[test]
    fn expression_defaults_to_name() {
        assert_eq!(has_funds().expression(), "HasFunds");
    }

    #[test]
    fn default_name_is_short_type_name_and_stable() {
        let spec = NamelessRule;
        assert_eq!(spec.name(), "NamelessRule");
        assert_eq!(spec.name(), spec.name());
        assert_eq!(spec.evaluate(&account(1, 1)).name(), "NamelessRule");
        assert_eq!(spec.expression(), "NamelessRule");
    }

    #[test]
    fn custom_spec_reports_one_reason_per_item() {
        let result = PerItemRule.evaluate(&[1, 0, 2, 0]);
        assert_eq!(result.failure_reasons(), &[Reason::Blocked, Reason::Blocked]);
        assert!(PerItemRule.evaluate(&[1, 2]).passed());
    }

    #[test]
    fn wrappers_forward_name_expression_and_evaluation() {
        let boxed = is_adult().boxed();
        let shared = is_adult().shared();
        let by_ref = &boxed;

        let ctx = account(12, 0);
        assert_eq!(boxed.evaluate(&ctx), shared.evaluate(&ctx));
        assert_eq!(by_ref.evaluate(&ctx), shared.evaluate(&ctx));
        assert_eq!(shared.name(), "IsAdult");
        assert_eq!(by_ref.expression(), "IsAdult");
    }

    #[test]
    #[should_panic(expected = "ledger unavailable")]
    fn predicate_panics_propagate_to_caller() {
        let spec = of(
            "Explodes",
            |_: &Account| -> bool { panic!("ledger unavailable") },
            Reason::Blocked,
        );
        spec.evaluate(&account(20, 200));
    }

    #[test]
    fn evaluation_does_not_mutate_the_spec() {
        let spec = is_adult();
        let first = spec.evaluate(&account(10, 0));
        let second = spec.evaluate(&account(10, 0));
        assert_eq!(first, second);
    }
}
