use crate::{PolicyResult, SpecificationResult};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stable schema identifier for evaluation reports.
pub const SCHEMA_EVALUATION_REPORT_V1: &str = "specguard.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Outcome of one evaluated specification, with reasons rendered as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultReport {
    pub name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
}

/// One context evaluated against a policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub label: String,
    pub all_passed: bool,
    #[serde(default)]
    pub failure_reasons: Vec<String>,
    pub results: Vec<ResultReport>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub schema: String,
    pub scenario: String,
    pub profile: String,
    pub mode: String,
    pub verdict: Verdict,
    pub cases: Vec<CaseReport>,
}

impl<R: Display> From<&SpecificationResult<R>> for ResultReport {
    fn from(result: &SpecificationResult<R>) -> Self {
        Self {
            name: result.name().to_string(),
            passed: result.passed(),
            failure_reasons: result
                .failure_reasons()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl CaseReport {
    pub fn from_policy_result<R: Display>(label: impl Into<String>, result: &PolicyResult<R>) -> Self {
        let results: Vec<ResultReport> = result.results().iter().map(ResultReport::from).collect();
        let failure_reasons = results
            .iter()
            .flat_map(|r| r.failure_reasons.iter().cloned())
            .collect();
        Self {
            label: label.into(),
            all_passed: result.all_passed(),
            failure_reasons,
            results,
        }
    }
}

impl EvaluationReport {
    pub fn new(
        scenario: impl Into<String>,
        profile: impl Into<String>,
        mode: impl Into<String>,
        cases: Vec<CaseReport>,
    ) -> Self {
        let verdict = if cases.iter().all(|c| c.all_passed) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Self {
            schema: SCHEMA_EVALUATION_REPORT_V1.to_string(),
            scenario: scenario.into(),
            profile: profile.into(),
            mode: mode.into(),
            verdict,
            cases,
        }
    }

    pub fn denied_cases(&self) -> usize {
        self.cases.iter().filter(|c| !c.all_passed).count()
    }
}
