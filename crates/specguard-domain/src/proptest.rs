//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - pass/fail agreeing with the presence of failure reasons
//! - AND/OR/NOT composition against the children's own outcomes
//! - fail-fast versus evaluate-all result shapes

use crate::composite::{all_of, any_of, any_of_with, not};
use crate::policy::{EvaluationMode, Policy};
use crate::specification::{Specification, SpecificationExt};
use crate::test_support::{Account, Reason, Tracking, account};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_reason() -> impl Strategy<Value = Reason> {
    prop_oneof![
        Just(Reason::TooYoung),
        Just(Reason::InsufficientFunds),
        Just(Reason::Blocked),
    ]
}

/// Outcome of one child: empty reasons mean "passes".
fn arb_outcome() -> impl Strategy<Value = Vec<Reason>> {
    prop_oneof![
        Just(Vec::new()),
        prop::collection::vec(arb_reason(), 1..4),
    ]
}

fn arb_outcomes() -> impl Strategy<Value = Vec<Vec<Reason>>> {
    prop::collection::vec(arb_outcome(), 1..8)
}

fn arb_account() -> impl Strategy<Value = Account> {
    (0u32..100, 0u32..1_000).prop_map(|(age, balance)| account(age, balance))
}

fn trackers(outcomes: &[Vec<Reason>]) -> Vec<Tracking> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, reasons)| Tracking::failing(&format!("S{i}"), reasons.clone()))
        .collect()
}

fn concat_failures(outcomes: &[Vec<Reason>]) -> Vec<Reason> {
    outcomes.iter().flatten().copied().collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn passed_iff_no_reasons(outcomes in arb_outcomes(), ctx in arb_account()) {
        let specs = trackers(&outcomes);
        let all = all_of("All", specs.iter().cloned().map(|s| s.boxed())).unwrap();
        let any = any_of("Any", specs.iter().cloned().map(|s| s.boxed())).unwrap();

        for result in [all.evaluate(&ctx), any.evaluate(&ctx)] {
            prop_assert_eq!(result.passed(), result.failure_reasons().is_empty());
        }
    }

    #[test]
    fn all_of_matches_children(outcomes in arb_outcomes(), ctx in arb_account()) {
        let specs = trackers(&outcomes);
        let all = all_of("All", specs.iter().cloned().map(|s| s.boxed())).unwrap();

        let expected_pass = outcomes.iter().all(Vec::is_empty);
        let expected_reasons = concat_failures(&outcomes);
        let first = all.evaluate(&ctx);
        prop_assert_eq!(first.passed(), expected_pass);
        prop_assert_eq!(first.failure_reasons(), expected_reasons.as_slice());
        prop_assert_eq!(&first, &all.evaluate(&ctx));

        for spec in &specs {
            prop_assert_eq!(spec.calls(), 2);
        }
    }

    #[test]
    fn any_of_matches_children(outcomes in arb_outcomes(), ctx in arb_account()) {
        let specs = trackers(&outcomes);
        let any = any_of("Any", specs.iter().cloned().map(|s| s.boxed())).unwrap();
        let result = any.evaluate(&ctx);

        let first_pass = outcomes.iter().position(Vec::is_empty);
        prop_assert_eq!(result.passed(), first_pass.is_some());

        match first_pass {
            Some(k) => {
                for (i, spec) in specs.iter().enumerate() {
                    prop_assert_eq!(spec.calls(), usize::from(i <= k));
                }
            }
            None => {
                let expected_reasons = concat_failures(&outcomes);
                prop_assert_eq!(result.failure_reasons(), expected_reasons.as_slice());
            }
        }
    }

    #[test]
    fn any_of_evaluating_all_touches_every_child(outcomes in arb_outcomes(), ctx in arb_account()) {
        let specs = trackers(&outcomes);
        let any = any_of_with("Any", true, specs.iter().cloned().map(|s| s.boxed())).unwrap();
        let result = any.evaluate(&ctx);

        let any_passes = outcomes.iter().any(Vec::is_empty);
        prop_assert_eq!(result.passed(), any_passes);
        if !any_passes {
            let expected_reasons = concat_failures(&outcomes);
            prop_assert_eq!(result.failure_reasons(), expected_reasons.as_slice());
        }
        for spec in &specs {
            prop_assert_eq!(spec.calls(), 1);
        }
    }

    #[test]
    fn not_inverts_and_reports_only_its_reason(
        outcome in arb_outcome(),
        reason in arb_reason(),
        ctx in arb_account(),
    ) {
        let inner = Tracking::failing("Inner", outcome.clone());
        let negated = not("Negated", reason, inner);
        let result = negated.evaluate(&ctx);

        prop_assert_eq!(result.passed(), !outcome.is_empty());
        if !result.passed() {
            prop_assert_eq!(result.failure_reasons(), &[reason][..]);
        }
    }

    #[test]
    fn fail_fast_stops_at_first_failure(outcomes in arb_outcomes(), ctx in arb_account()) {
        let specs = trackers(&outcomes);
        let mut policy = Policy::create();
        for spec in &specs {
            policy.add(spec.clone());
        }

        let result = policy.evaluate(&ctx, EvaluationMode::FailFast);
        match outcomes.iter().position(|o| !o.is_empty()) {
            Some(k) => {
                prop_assert!(!result.all_passed());
                prop_assert_eq!(result.len(), k + 1);
                for (i, spec) in specs.iter().enumerate() {
                    prop_assert_eq!(spec.calls(), usize::from(i <= k));
                }
            }
            None => {
                prop_assert!(result.all_passed());
                prop_assert_eq!(result.len(), specs.len());
            }
        }
    }

    #[test]
    fn evaluate_all_has_one_result_per_specification(
        outcomes in prop::collection::vec(arb_outcome(), 0..8),
        ctx in arb_account(),
    ) {
        let mut policy = Policy::create();
        for spec in trackers(&outcomes) {
            policy.add(spec);
        }

        let result = policy.evaluate(&ctx, EvaluationMode::All);
        prop_assert_eq!(result.len(), outcomes.len());
        prop_assert_eq!(result.all_passed(), outcomes.iter().all(Vec::is_empty));
        prop_assert_eq!(
            result.all_passed(),
            result.results().iter().all(|r| r.passed())
        );
        prop_assert_eq!(result.failure_reasons(), concat_failures(&outcomes));
    }
}
