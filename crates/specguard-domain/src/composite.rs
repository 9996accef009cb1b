//! Composite specifications: `any_of` (OR), `all_of` (AND) and `not`.
//!
//! Composites own their children and evaluate them in insertion order.
//! Failure reasons of failing children are concatenated in child order,
//! without deduplication.

use crate::error::SpecificationError;
use crate::specification::{BoxedSpecification, Specification};
use specguard_types::{FailureReason, SpecificationResult};
use std::fmt;
use tracing::trace;

/// Passes when at least one child passes.
pub struct AnyOf<T: ?Sized, R: FailureReason> {
    name: String,
    evaluate_all: bool,
    children: Vec<BoxedSpecification<T, R>>,
}

/// Passes when every child passes.
pub struct AllOf<T: ?Sized, R: FailureReason> {
    name: String,
    children: Vec<BoxedSpecification<T, R>>,
}

/// Passes when the wrapped specification fails.
pub struct Not<S: Specification> {
    name: String,
    failure_reason: S::Reason,
    inner: S,
}

/// OR-composite that stops at the first passing child.
///
/// Fails with [`SpecificationError::EmptySpecifications`] when `specifications` is empty.
pub fn any_of<T, R>(
    name: impl Into<String>,
    specifications: impl IntoIterator<Item = BoxedSpecification<T, R>>,
) -> Result<AnyOf<T, R>, SpecificationError>
where
    T: ?Sized,
    R: FailureReason,
{
    any_of_with(name, false, specifications)
}

/// OR-composite with an explicit short-circuit choice.
///
/// With `evaluate_all` set, every child runs even after one has passed.
pub fn any_of_with<T, R>(
    name: impl Into<String>,
    evaluate_all: bool,
    specifications: impl IntoIterator<Item = BoxedSpecification<T, R>>,
) -> Result<AnyOf<T, R>, SpecificationError>
where
    T: ?Sized,
    R: FailureReason,
{
    let name = name.into();
    let children = non_empty("any_of", &name, specifications)?;
    Ok(AnyOf {
        name,
        evaluate_all,
        children,
    })
}

/// AND-composite; every child is evaluated on every call.
///
/// Fails with [`SpecificationError::EmptySpecifications`] when `specifications` is empty.
pub fn all_of<T, R>(
    name: impl Into<String>,
    specifications: impl IntoIterator<Item = BoxedSpecification<T, R>>,
) -> Result<AllOf<T, R>, SpecificationError>
where
    T: ?Sized,
    R: FailureReason,
{
    let name = name.into();
    let children = non_empty("all_of", &name, specifications)?;
    Ok(AllOf { name, children })
}

/// Negation. When `specification` passes the result fails with exactly
/// `[failure_reason]`; the inner reasons are discarded when it fails.
pub fn not<S: Specification>(
    name: impl Into<String>,
    failure_reason: S::Reason,
    specification: S,
) -> Not<S> {
    Not {
        name: name.into(),
        failure_reason,
        inner: specification,
    }
}

fn non_empty<T: ?Sized, R: FailureReason>(
    operator: &'static str,
    name: &str,
    specifications: impl IntoIterator<Item = BoxedSpecification<T, R>>,
) -> Result<Vec<BoxedSpecification<T, R>>, SpecificationError> {
    let children: Vec<_> = specifications.into_iter().collect();
    if children.is_empty() {
        return Err(SpecificationError::EmptySpecifications {
            operator,
            name: name.to_string(),
        });
    }
    Ok(children)
}

/// `(a OP b OP ...)`; a single child renders as its own expression.
fn join_expressions<T: ?Sized, R: FailureReason>(
    children: &[BoxedSpecification<T, R>],
    operator: &str,
) -> String {
    if let [only] = children {
        return only.expression();
    }
    let parts: Vec<String> = children.iter().map(|c| c.expression()).collect();
    format!("({})", parts.join(&format!(" {operator} ")))
}

impl<T: ?Sized, R: FailureReason> AnyOf<T, R> {
    /// Disable short-circuiting: evaluate every child on each call.
    pub fn evaluating_all(mut self) -> Self {
        self.evaluate_all = true;
        self
    }

    pub fn evaluates_all(&self) -> bool {
        self.evaluate_all
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized, R: FailureReason> Specification for AnyOf<T, R> {
    type Context = T;
    type Reason = R;

    fn evaluate(&self, context: &T) -> SpecificationResult<R> {
        let mut any_passed = false;
        let mut reasons = Vec::new();

        for child in &self.children {
            let result = child.evaluate(context);
            if result.passed() {
                any_passed = true;
                if !self.evaluate_all {
                    trace!(
                        composite = %self.name,
                        child = result.name(),
                        "any_of short-circuited on passing child"
                    );
                    break;
                }
            } else {
                reasons.extend(result.into_failure_reasons());
            }
        }

        if any_passed {
            SpecificationResult::pass(self.name.as_str())
        } else {
            SpecificationResult::fail_with(self.name.as_str(), reasons)
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn expression(&self) -> String {
        join_expressions(&self.children, "OR")
    }
}

impl<T: ?Sized, R: FailureReason> AllOf<T, R> {
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized, R: FailureReason> Specification for AllOf<T, R> {
    type Context = T;
    type Reason = R;

    fn evaluate(&self, context: &T) -> SpecificationResult<R> {
        let reasons: Vec<R> = self
            .children
            .iter()
            .map(|child| child.evaluate(context))
            .filter(|result| !result.passed())
            .flat_map(SpecificationResult::into_failure_reasons)
            .collect();

        if reasons.is_empty() {
            SpecificationResult::pass(self.name.as_str())
        } else {
            SpecificationResult::fail_with(self.name.as_str(), reasons)
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn expression(&self) -> String {
        join_expressions(&self.children, "AND")
    }
}

impl<S: Specification> Specification for Not<S> {
    type Context = S::Context;
    type Reason = S::Reason;

    fn evaluate(&self, context: &S::Context) -> SpecificationResult<S::Reason> {
        if self.inner.evaluate(context).passed() {
            SpecificationResult::fail(self.name.as_str(), self.failure_reason.clone())
        } else {
            SpecificationResult::pass(self.name.as_str())
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn expression(&self) -> String {
        format!("NOT {}", self.inner.expression())
    }
}

impl<T: ?Sized, R: FailureReason> fmt::Debug for AnyOf<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf")
            .field("name", &self.name)
            .field("evaluate_all", &self.evaluate_all)
            .field("expression", &self.expression())
            .finish()
    }
}

impl<T: ?Sized, R: FailureReason> fmt::Debug for AllOf<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("name", &self.name)
            .field("expression", &self.expression())
            .finish()
    }
}

impl<S: Specification> fmt::Debug for Not<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Not")
            .field("name", &self.name)
            .field("failure_reason", &self.failure_reason)
            .field("expression", &self.expression())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::SpecificationExt;
    use crate::test_support::{
        Account, Reason, Tracking, account, always_fail, always_pass, has_funds, is_adult,
    };

    #[test]
    fn any_of_rejects_empty_children() {
        let err = any_of::<Account, Reason>("Nothing", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            SpecificationError::EmptySpecifications {
                operator: "any_of",
                name: "Nothing".to_string()
            }
        );
        assert!(err.to_string().contains("requires at least one specification"));
    }

    #[test]
    fn all_of_rejects_empty_children() {
        let err = all_of::<Account, Reason>("Nothing", Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            SpecificationError::EmptySpecifications {
                operator: "all_of",
                ..
            }
        ));
    }

    #[test]
    fn any_of_fails_with_concatenated_child_reasons() {
        let spec = any_of(
            "A",
            [
                always_fail("F1", Reason::TooYoung).boxed(),
                always_fail("F2", Reason::Blocked).boxed(),
            ],
        )
        .unwrap();

        let result = spec.evaluate(&account(0, 0));
        assert_eq!(result.name(), "A");
        assert_eq!(result.failure_reasons(), &[Reason::TooYoung, Reason::Blocked]);
    }

    #[test]
    fn any_of_short_circuits_after_first_pass() {
        let first = Tracking::passing("First");
        let second = Tracking::failing("Second", vec![Reason::Blocked]);
        let spec = any_of("Either", [first.clone().boxed(), second.clone().boxed()]).unwrap();

        assert!(spec.evaluate(&account(0, 0)).passed());
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn any_of_evaluating_all_runs_every_child() {
        let first = Tracking::passing("First");
        let second = Tracking::failing("Second", vec![Reason::Blocked]);
        let spec = any_of("Either", [first.clone().boxed(), second.clone().boxed()])
            .unwrap()
            .evaluating_all();
        assert!(spec.evaluates_all());

        let result = spec.evaluate(&account(0, 0));
        assert!(result.passed());
        assert!(result.failure_reasons().is_empty());
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);

        let explicit = any_of_with("Either", true, [first.clone().boxed()]).unwrap();
        explicit.evaluate(&account(0, 0));
        assert_eq!(first.calls(), 2);
    }

    #[test]
    fn all_of_evaluates_every_child_and_collects_reasons() {
        let first = Tracking::failing("First", vec![Reason::TooYoung]);
        let middle = Tracking::passing("Middle");
        let last = Tracking::failing("Last", vec![Reason::InsufficientFunds, Reason::Blocked]);
        let spec = all_of(
            "Everything",
            [first.clone().boxed(), middle.clone().boxed(), last.clone().boxed()],
        )
        .unwrap();

        let result = spec.evaluate(&account(0, 0));
        assert_eq!(
            result.failure_reasons(),
            &[Reason::TooYoung, Reason::InsufficientFunds, Reason::Blocked]
        );
        assert_eq!((first.calls(), middle.calls(), last.calls()), (1, 1, 1));
    }

    #[test]
    fn all_of_passes_when_every_child_passes() {
        let spec = all_of("Eligible", [is_adult().boxed(), has_funds().boxed()]).unwrap();
        assert_eq!(
            spec.evaluate(&account(40, 500)),
            SpecificationResult::pass("Eligible")
        );
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn not_replaces_inner_reasons() {
        let spec = not("NotBlocked", Reason::Blocked, always_pass("Anything"));
        let result = spec.evaluate(&account(0, 0));
        assert_eq!(result, SpecificationResult::fail("NotBlocked", Reason::Blocked));

        let spec = not(
            "NotBlocked",
            Reason::Blocked,
            always_fail("Flagged", Reason::TooYoung),
        );
        assert!(spec.evaluate(&account(0, 0)).passed());
    }

    #[test]
    fn expressions_render_nested_structure() {
        let or = any_of(
            "BOrC",
            [always_pass("B").boxed(), always_pass("C").boxed()],
        )
        .unwrap();
        let and = all_of("Root", [always_pass("A").boxed(), or.boxed()]).unwrap();
        assert_eq!(and.expression(), "(A AND (B OR C))");

        let negated = not("NotA", Reason::Blocked, always_pass("A"));
        assert_eq!(negated.expression(), "NOT A");
    }

    #[test]
    fn singleton_groups_collapse_to_child_expression() {
        let single = all_of("Only", [is_adult().boxed()]).unwrap();
        assert_eq!(single.expression(), "IsAdult");
        let single = any_of("Only", [has_funds().boxed()]).unwrap();
        assert_eq!(single.expression(), "HasFunds");
    }

    #[test]
    fn shared_children_can_feed_several_composites() {
        let adult = is_adult().shared();
        let strict = all_of("Strict", [adult.clone().boxed(), has_funds().boxed()]).unwrap();
        let loose = any_of("Loose", [adult.boxed(), has_funds().boxed()]).unwrap();

        let ctx = account(30, 10);
        assert!(!strict.evaluate(&ctx).passed());
        assert!(loose.evaluate(&ctx).passed());
    }

    #[test]
    fn composite_evaluation_is_idempotent() {
        let spec = all_of("Eligible", [is_adult().boxed(), has_funds().boxed()]).unwrap();
        let ctx = account(16, 50);
        assert_eq!(spec.evaluate(&ctx), spec.evaluate(&ctx));
    }
}
