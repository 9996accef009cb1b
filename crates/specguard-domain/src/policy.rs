use crate::specification::{BoxedSpecification, Specification};
use specguard_types::{FailureReason, PolicyResult};
use std::fmt;
use tracing::{debug, debug_span, trace};

/// Which strategy a [`Policy`] evaluation uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvaluationMode {
    /// Stop at the first failing specification.
    #[default]
    FailFast,
    /// Evaluate every specification and collect every outcome.
    All,
}

impl EvaluationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::FailFast => "fail-fast",
            EvaluationMode::All => "all",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of specifications evaluated against one context.
///
/// Insertion order is evaluation order. An empty policy passes vacuously.
pub struct Policy<T: ?Sized, R: FailureReason> {
    specifications: Vec<BoxedSpecification<T, R>>,
}

impl<T: ?Sized, R: FailureReason> Policy<T, R> {
    pub fn create() -> Self {
        Self {
            specifications: Vec::new(),
        }
    }

    pub fn new() -> Self {
        Self::create()
    }

    /// Append a specification and hand the policy back for chaining.
    pub fn with<S>(mut self, specification: S) -> Self
    where
        S: Specification<Context = T, Reason = R> + Send + Sync + 'static,
    {
        self.add(specification);
        self
    }

    /// Append a specification in place. Duplicates are kept.
    pub fn add<S>(&mut self, specification: S) -> &mut Self
    where
        S: Specification<Context = T, Reason = R> + Send + Sync + 'static,
    {
        self.specifications.push(Box::new(specification));
        self
    }

    pub fn len(&self) -> usize {
        self.specifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specifications.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.specifications.iter().map(|s| s.name()).collect()
    }

    pub fn specifications(&self) -> &[BoxedSpecification<T, R>] {
        &self.specifications
    }

    pub fn evaluate(&self, context: &T, mode: EvaluationMode) -> PolicyResult<R> {
        match mode {
            EvaluationMode::FailFast => self.evaluate_fail_fast(context),
            EvaluationMode::All => self.evaluate_all(context),
        }
    }

    /// Evaluate in order and stop at the first failure.
    ///
    /// The returned results end with the failing one; later specifications
    /// are never evaluated.
    pub fn evaluate_fail_fast(&self, context: &T) -> PolicyResult<R> {
        let _span = debug_span!(
            "policy.evaluate",
            mode = "fail-fast",
            specifications = self.specifications.len()
        )
        .entered();

        let mut results = Vec::with_capacity(self.specifications.len());
        for specification in &self.specifications {
            let result = specification.evaluate(context);
            trace!(specification = result.name(), passed = result.passed(), "evaluated");
            let failed = !result.passed();
            results.push(result);
            if failed {
                debug!(
                    evaluated = results.len(),
                    skipped = self.specifications.len() - results.len(),
                    "policy failed fast"
                );
                return PolicyResult::new(false, results);
            }
        }
        PolicyResult::new(true, results)
    }

    /// Evaluate every specification regardless of earlier failures.
    pub fn evaluate_all(&self, context: &T) -> PolicyResult<R> {
        let _span = debug_span!(
            "policy.evaluate",
            mode = "all",
            specifications = self.specifications.len()
        )
        .entered();

        let mut all_passed = true;
        let mut results = Vec::with_capacity(self.specifications.len());
        for specification in &self.specifications {
            let result = specification.evaluate(context);
            trace!(specification = result.name(), passed = result.passed(), "evaluated");
            all_passed &= result.passed();
            results.push(result);
        }
        debug!(all_passed, "policy evaluated");
        PolicyResult::new(all_passed, results)
    }

    /// `(A AND B AND ...)` over the held specifications; `()` when empty.
    pub fn expression(&self) -> String {
        let parts: Vec<String> = self
            .specifications
            .iter()
            .map(|s| s.expression())
            .collect();
        format!("({})", parts.join(" AND "))
    }
}

impl<T: ?Sized, R: FailureReason> Default for Policy<T, R> {
    fn default() -> Self {
        Self::create()
    }
}

impl<T: ?Sized, R: FailureReason> fmt::Debug for Policy<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("specifications", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::{all_of, any_of, not};
    use crate::specification::{SpecificationExt, of};
    use crate::test_support::{
        Account, Reason, Tracking, account, always_pass, has_funds, is_adult,
    };
    use specguard_types::SpecificationResult;

    fn adult_with_funds() -> Policy<Account, Reason> {
        Policy::create().with(is_adult()).with(has_funds())
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let result = adult_with_funds().evaluate_fail_fast(&account(16, 50));
        assert!(!result.all_passed());
        assert_eq!(result.len(), 1);
        assert_eq!(result.results()[0].name(), "IsAdult");
        assert_eq!(result.failure_reasons(), vec![Reason::TooYoung]);
    }

    #[test]
    fn evaluate_all_collects_every_outcome() {
        let result = adult_with_funds().evaluate_all(&account(16, 50));
        assert!(!result.all_passed());
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.failure_reasons(),
            vec![Reason::TooYoung, Reason::InsufficientFunds]
        );
    }

    #[test]
    fn passing_context_yields_every_result_in_both_modes() {
        let policy = adult_with_funds();
        for mode in [EvaluationMode::FailFast, EvaluationMode::All] {
            let result = policy.evaluate(&account(30, 500), mode);
            assert!(result.all_passed());
            assert_eq!(
                result.results(),
                &[
                    SpecificationResult::pass("IsAdult"),
                    SpecificationResult::pass("HasFunds")
                ]
            );
        }
    }

    #[test]
    fn fail_fast_never_evaluates_later_specifications() {
        let first = Tracking::passing("First");
        let second = Tracking::failing("Second", vec![Reason::Blocked]);
        let third = Tracking::passing("Third");
        let policy = Policy::create()
            .with(first.clone())
            .with(second.clone())
            .with(third.clone());

        let result = policy.evaluate_fail_fast(&account(0, 0));
        assert_eq!(result.len(), 2);
        assert_eq!((first.calls(), second.calls(), third.calls()), (1, 1, 0));

        let result = policy.evaluate_all(&account(0, 0));
        assert_eq!(result.len(), 3);
        assert_eq!((first.calls(), second.calls(), third.calls()), (2, 2, 1));
    }

    #[test]
    fn empty_policy_passes_vacuously() {
        let policy = Policy::<Account, Reason>::create();
        for mode in [EvaluationMode::FailFast, EvaluationMode::All] {
            let result = policy.evaluate(&account(0, 0), mode);
            assert!(result.all_passed());
            assert!(result.is_empty());
        }
        assert_eq!(policy.expression(), "()");
    }

    #[test]
    fn add_appends_between_evaluations_and_keeps_duplicates() {
        let mut policy = Policy::<Account, Reason>::default();
        policy.add(is_adult());
        assert_eq!(policy.evaluate_all(&account(10, 0)).len(), 1);

        let shared = has_funds().shared();
        policy.add(shared.clone()).add(shared);
        assert_eq!(policy.names(), vec!["IsAdult", "HasFunds", "HasFunds"]);
        assert_eq!(
            policy.evaluate_all(&account(10, 0)).failure_reasons(),
            vec![
                Reason::TooYoung,
                Reason::InsufficientFunds,
                Reason::InsufficientFunds
            ]
        );
    }

    #[test]
    fn expression_joins_held_specifications() {
        let either = any_of("Either", [is_adult().boxed(), has_funds().boxed()]).unwrap();
        let policy = Policy::create()
            .with(always_pass("A"))
            .with(either)
            .with(not("NotA", Reason::Blocked, always_pass("A")));
        assert_eq!(policy.expression(), "(A AND (IsAdult OR HasFunds) AND NOT A)");

        let single = Policy::create().with(always_pass("A"));
        assert_eq!(single.expression(), "(A)");
    }

    #[test]
    fn not_blocked_scenario() {
        let policy = Policy::create().with(not("NotBlocked", Reason::Blocked, always_pass("Any")));
        let result = policy.evaluate_all(&account(99, 99));
        assert_eq!(result.failure_reasons(), vec![Reason::Blocked]);
        assert_eq!(result.failed_results()[0].name(), "NotBlocked");
    }

    #[test]
    fn policy_is_shared_across_threads() {
        let policy = Policy::create()
            .with(all_of("Eligible", [is_adult().boxed(), has_funds().boxed()]).unwrap())
            .with(of("Positive", |a: &Account| a.balance > 0, Reason::InsufficientFunds));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8u32)
                .map(|i| {
                    let policy = &policy;
                    scope.spawn(move || policy.evaluate_all(&account(10 + i * 2, i * 30)))
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                let result = handle.join().expect("evaluation thread");
                let expected = policy.evaluate_all(&account(10 + i as u32 * 2, i as u32 * 30));
                assert_eq!(result, expected);
            }
        });
    }

    #[test]
    #[should_panic(expected = "rate table missing")]
    fn errors_inside_specifications_abort_the_evaluation() {
        let policy = Policy::create().with(is_adult()).with(of(
            "Explodes",
            |_: &Account| -> bool { panic!("rate table missing") },
            Reason::Blocked,
        ));
        policy.evaluate_all(&account(30, 0));
    }

    #[test]
    fn mode_strings() {
        assert_eq!(EvaluationMode::default(), EvaluationMode::FailFast);
        assert_eq!(EvaluationMode::FailFast.to_string(), "fail-fast");
        assert_eq!(EvaluationMode::All.as_str(), "all");
    }
}
