//! The evaluation use cases: resolve settings, build policies, evaluate every case.

use anyhow::Context;
use serde::de::DeserializeOwned;
use specguard::{EvaluationMode, FailureReason, Policy};
use specguard_demos::Case;
use specguard_demos::insurance::{self, Claim};
use specguard_demos::registration::{self, RegistrationRequest};
use specguard_settings::{Overrides, ResolvedConfig, SpecguardConfigV1};
use specguard_types::{CaseReport, EvaluationReport, Verdict};
use std::fmt::Display;
use time::Date;
use tracing::{debug, info};

/// Input shared by the scenario use cases.
#[derive(Clone, Debug, Default)]
pub struct ScenarioInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// JSON array of `{ "label", "context" }` cases; `None` runs the showcase.
    pub cases_json: Option<&'a str>,
}

#[derive(Clone, Debug)]
pub struct ScenarioOutput {
    pub report: EvaluationReport,
    pub resolved_config: ResolvedConfig,
}

/// Parse (possibly empty) config text and resolve it against the overrides.
pub fn load_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        SpecguardConfigV1::default()
    } else {
        specguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    specguard_settings::resolve_config(cfg, overrides).context("resolve config")
}

pub fn run_registration(input: ScenarioInput<'_>) -> anyhow::Result<ScenarioOutput> {
    let resolved = load_settings(input.config_text, input.overrides)?;
    let cases = match input.cases_json {
        Some(json) => parse_cases::<RegistrationRequest>(json)?,
        None => registration::showcase(),
    };

    let policy = registration::registration_policy(&resolved.effective.registration)
        .context("build registration policy")?;
    let mode = resolved.effective.mode;
    let reports = cases
        .iter()
        .map(|case| evaluate_case(&policy, case, mode))
        .collect();

    Ok(finish("registration", resolved, reports))
}

/// Evaluate claims, each against the policy for its claim type.
///
/// `today` dates the showcase claims; claims read from JSON carry their own dates.
pub fn run_insurance(input: ScenarioInput<'_>, today: Date) -> anyhow::Result<ScenarioOutput> {
    let resolved = load_settings(input.config_text, input.overrides)?;
    let cases = match input.cases_json {
        Some(json) => parse_cases::<Claim>(json)?,
        None => insurance::showcase(today),
    };

    let rules = &resolved.effective.insurance;
    let mode = resolved.effective.mode;
    let mut reports = Vec::with_capacity(cases.len());
    for case in &cases {
        let claim_type = case.context.claim_type;
        let policy = insurance::policy_for(claim_type, rules)
            .with_context(|| format!("build {} claim policy", claim_type.as_str()))?;
        reports.push(evaluate_case(&policy, case, mode));
    }

    Ok(finish("insurance", resolved, reports))
}

fn parse_cases<T: DeserializeOwned>(json: &str) -> anyhow::Result<Vec<Case<T>>> {
    serde_json::from_str(json).context("parse input cases")
}

fn evaluate_case<T, R>(policy: &Policy<T, R>, case: &Case<T>, mode: EvaluationMode) -> CaseReport
where
    R: FailureReason + Display,
{
    let result = policy.evaluate(&case.context, mode);
    debug!(case = %case.label, passed = result.all_passed(), "case evaluated");
    CaseReport::from_policy_result(case.label.as_str(), &result)
}

fn finish(scenario: &str, resolved: ResolvedConfig, cases: Vec<CaseReport>) -> ScenarioOutput {
    let effective = &resolved.effective;
    let report = EvaluationReport::new(
        scenario,
        effective.profile.as_str(),
        effective.mode.as_str(),
        cases,
    );
    info!(
        scenario,
        cases = report.cases.len(),
        denied = report.denied_cases(),
        "scenario evaluated"
    );
    ScenarioOutput {
        report,
        resolved_config: resolved,
    }
}

/// Map verdict to exit code: 0 = every case passed, 2 = at least one denied.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
