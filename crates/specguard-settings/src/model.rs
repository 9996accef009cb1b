use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "specguard.config.v1";

/// `specguard.toml` schema v1.
///
/// Every field is optional; anything left out falls back to the profile preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecguardConfigV1 {
    /// Optional schema string for tooling (`specguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Policy evaluation mode: `fail-fast` or `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default)]
    pub registration: RegistrationConfig,

    #[serde(default)]
    pub insurance: InsuranceConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_min_len: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_min_len: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceConfig {
    /// Claims at or below this amount skip manual review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_claim_limit: Option<f64>,

    #[serde(default)]
    pub filing_windows: FilingWindowsConfig,
}

/// Filing windows in days, per claim type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingWindowsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life: Option<u32>,
}
