//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    FilingWindowsConfig, InsuranceConfig, RegistrationConfig, SCHEMA_CONFIG_V1, SpecguardConfigV1,
};
pub use presets::{KNOWN_PROFILES, preset};
pub use resolve::{EffectiveSettings, Overrides, ResolvedConfig, parse_mode};

/// Parse `specguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SpecguardConfigV1> {
    let cfg: SpecguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (profile preset, then file values, then overrides).
pub fn resolve_config(
    cfg: SpecguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
