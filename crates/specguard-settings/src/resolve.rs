use crate::model::{SCHEMA_CONFIG_V1, SpecguardConfigV1};
use crate::presets::{self, KNOWN_PROFILES};
use anyhow::Context;
use specguard::EvaluationMode;
use specguard_demos::insurance::InsuranceRules;
use specguard_demos::registration::RegistrationRules;
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub mode: Option<String>,
}

/// Thresholds and evaluation mode every use case runs with.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveSettings {
    pub profile: String,
    pub mode: EvaluationMode,
    pub registration: RegistrationRules,
    pub insurance: InsuranceRules,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveSettings,
}

pub fn resolve_config(
    cfg: SpecguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != SCHEMA_CONFIG_V1 {
            anyhow::bail!("unsupported config schema: {schema} (expected '{SCHEMA_CONFIG_V1}')");
        }
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    if !KNOWN_PROFILES.contains(&profile.as_str()) {
        warn!(
            profile = %profile,
            known = %KNOWN_PROFILES.join("|"),
            "unknown profile, using standard"
        );
    }
    let mut effective = presets::preset(&profile);

    if let Some(mode) = overrides.mode.as_deref().or(cfg.mode.as_deref()) {
        effective.mode = parse_mode(mode)?;
    }

    let registration = &cfg.registration;
    if let Some(v) = registration.username_min_len {
        effective.registration.username_min_len = v;
    }
    if let Some(v) = registration.password_min_len {
        effective.registration.password_min_len = v;
    }
    if let Some(v) = registration.min_age {
        effective.registration.min_age = v;
    }

    let insurance = &cfg.insurance;
    if let Some(limit) = insurance.small_claim_limit {
        effective.insurance.small_claim_limit =
            validate_limit(limit).context("invalid insurance.small_claim_limit")?;
    }

    let windows = &insurance.filing_windows;
    let target = &mut effective.insurance.filing_windows;
    for (key, value, slot) in [
        ("medical", windows.medical, &mut target.medical),
        ("auto", windows.auto, &mut target.auto),
        ("property", windows.property, &mut target.property),
        ("life", windows.life, &mut target.life),
    ] {
        if let Some(days) = value {
            *slot = validate_window(days)
                .with_context(|| format!("invalid insurance.filing_windows.{key}"))?;
        }
    }

    Ok(ResolvedConfig { effective })
}

pub fn parse_mode(v: &str) -> anyhow::Result<EvaluationMode> {
    match v {
        "fail-fast" | "fail_fast" | "failfast" => Ok(EvaluationMode::FailFast),
        "all" => Ok(EvaluationMode::All),
        other => anyhow::bail!("unknown mode: {other} (expected 'fail-fast' or 'all')"),
    }
}

fn validate_limit(limit: f64) -> anyhow::Result<f64> {
    if !(limit.is_finite() && limit > 0.0) {
        anyhow::bail!("small claim limit must be a positive amount, got {limit}");
    }
    Ok(limit)
}

fn validate_window(days: u32) -> anyhow::Result<u32> {
    if days == 0 {
        anyhow::bail!("filing window must be at least one day");
    }
    Ok(days)
}
