/// Outcome of evaluating one specification against one context.
///
/// A result passes iff it carries no failure reasons.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpecificationResult<R> {
    name: String,
    failure_reasons: Vec<R>,
}

impl<R> SpecificationResult<R> {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure_reasons: Vec::new(),
        }
    }

    pub fn fail(name: impl Into<String>, reason: R) -> Self {
        Self {
            name: name.into(),
            failure_reasons: vec![reason],
        }
    }

    /// Failing result carrying `reasons` in the given order (duplicates kept).
    ///
    /// An empty iterator yields a passing result.
    pub fn fail_with(name: impl Into<String>, reasons: impl IntoIterator<Item = R>) -> Self {
        Self {
            name: name.into(),
            failure_reasons: reasons.into_iter().collect(),
        }
    }

    pub fn passed(&self) -> bool {
        self.failure_reasons.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn failure_reasons(&self) -> &[R] {
        &self.failure_reasons
    }

    pub fn into_failure_reasons(self) -> Vec<R> {
        self.failure_reasons
    }
}

/// Aggregate of the results produced by one policy evaluation, in evaluation order.
///
/// `all_passed` is supplied by the evaluator and is not re-validated here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyResult<R> {
    all_passed: bool,
    results: Vec<SpecificationResult<R>>,
}

impl<R> PolicyResult<R> {
    pub fn new(all_passed: bool, results: Vec<SpecificationResult<R>>) -> Self {
        Self {
            all_passed,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    pub fn results(&self) -> &[SpecificationResult<R>] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SpecificationResult<R>> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn failed_results(&self) -> Vec<&SpecificationResult<R>> {
        self.results.iter().filter(|r| !r.passed()).collect()
    }

    /// Failure reasons of every failed result, flattened in result order.
    pub fn failure_reasons(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.results
            .iter()
            .filter(|r| !r.passed())
            .flat_map(|r| r.failure_reasons().iter().cloned())
            .collect()
    }
}
