use super::documents::DocumentCompliance;
use super::model::{Claim, ClaimType};
use super::reason::ClaimDenialReason;
use super::specs::{
    amount_is_positive, amount_within_coverage, approval_path_satisfied, filed_within_days,
    incident_after_policy_start, manual_review_approved, not_flagged_for_fraud,
    valid_policy_status,
};
use specguard::{Policy, SpecificationError};

pub type ClaimPolicy = Policy<Claim, ClaimDenialReason>;

/// Days allowed between incident and filing, per claim type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilingWindows {
    pub medical: u32,
    pub auto: u32,
    pub property: u32,
    pub life: u32,
}

impl FilingWindows {
    pub fn for_type(&self, claim_type: ClaimType) -> u32 {
        match claim_type {
            ClaimType::Medical => self.medical,
            ClaimType::Auto => self.auto,
            ClaimType::Property => self.property,
            ClaimType::Life => self.life,
        }
    }
}

impl Default for FilingWindows {
    fn default() -> Self {
        Self {
            medical: 90,
            auto: 30,
            property: 60,
            life: 365,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InsuranceRules {
    /// Claims up to this amount skip manual review.
    pub small_claim_limit: f64,
    pub filing_windows: FilingWindows,
}

impl Default for InsuranceRules {
    fn default() -> Self {
        Self {
            small_claim_limit: 1_000.0,
            filing_windows: FilingWindows::default(),
        }
    }
}

/// Rules shared by every claim type.
pub fn base_policy() -> Result<ClaimPolicy, SpecificationError> {
    Ok(Policy::create()
        .with(valid_policy_status()?)
        .with(amount_is_positive())
        .with(amount_within_coverage())
        .with(not_flagged_for_fraud()))
}

fn typed_policy(
    claim_type: ClaimType,
    rules: &InsuranceRules,
) -> Result<ClaimPolicy, SpecificationError> {
    let policy = base_policy()?
        .with(incident_after_policy_start())
        .with(filed_within_days(rules.filing_windows.for_type(claim_type)))
        .with(DocumentCompliance);

    // Life claims always go through manual review.
    Ok(match claim_type {
        ClaimType::Life => policy.with(manual_review_approved()),
        _ => policy.with(approval_path_satisfied(rules.small_claim_limit)?),
    })
}

pub fn medical_claim_policy(rules: &InsuranceRules) -> Result<ClaimPolicy, SpecificationError> {
    typed_policy(ClaimType::Medical, rules)
}

pub fn auto_claim_policy(rules: &InsuranceRules) -> Result<ClaimPolicy, SpecificationError> {
    typed_policy(ClaimType::Auto, rules)
}

pub fn property_claim_policy(rules: &InsuranceRules) -> Result<ClaimPolicy, SpecificationError> {
    typed_policy(ClaimType::Property, rules)
}

pub fn life_claim_policy(rules: &InsuranceRules) -> Result<ClaimPolicy, SpecificationError> {
    typed_policy(ClaimType::Life, rules)
}

pub fn policy_for(
    claim_type: ClaimType,
    rules: &InsuranceRules,
) -> Result<ClaimPolicy, SpecificationError> {
    match claim_type {
        ClaimType::Medical => medical_claim_policy(rules),
        ClaimType::Auto => auto_claim_policy(rules),
        ClaimType::Property => property_claim_policy(rules),
        ClaimType::Life => life_claim_policy(rules),
    }
}
