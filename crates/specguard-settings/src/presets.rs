use crate::resolve::EffectiveSettings;
use specguard::EvaluationMode;
use specguard_demos::insurance::{FilingWindows, InsuranceRules};
use specguard_demos::registration::RegistrationRules;

pub const KNOWN_PROFILES: &[&str] = &["standard", "strict"];

/// Preset profiles are opinionated defaults.
///
/// Unknown profile names fall back to `standard`.
pub fn preset(profile: &str) -> EffectiveSettings {
    match profile {
        "strict" => strict_profile(),
        _ => standard_profile(),
    }
}

fn standard_profile() -> EffectiveSettings {
    EffectiveSettings {
        profile: "standard".to_string(),
        mode: EvaluationMode::FailFast,
        registration: RegistrationRules::default(),
        insurance: InsuranceRules::default(),
    }
}

fn strict_profile() -> EffectiveSettings {
    EffectiveSettings {
        profile: "strict".to_string(),
        mode: EvaluationMode::All,
        registration: RegistrationRules {
            username_min_len: 5,
            password_min_len: 12,
            min_age: 18,
        },
        insurance: InsuranceRules {
            small_claim_limit: 500.0,
            filing_windows: FilingWindows {
                medical: 45,
                auto: 15,
                property: 30,
                life: 180,
            },
        },
    }
}
