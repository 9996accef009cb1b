//! Reusable claim specifications shared by every claim policy.

use super::model::{Claim, PolicyTier};
use super::reason::ClaimDenialReason;
use specguard::{
    BoxedSpecification, SpecificationError, SpecificationExt, all_of, any_of, not, of,
};

pub type ClaimSpec = BoxedSpecification<Claim, ClaimDenialReason>;

pub fn policy_is_active() -> ClaimSpec {
    of(
        "PolicyIsActive",
        |claim: &Claim| claim.claimant.policy_active,
        ClaimDenialReason::PolicyNotActive,
    )
    .boxed()
}

/// The policy must still be in force on the filing date.
pub fn policy_not_expired() -> ClaimSpec {
    of(
        "PolicyNotExpired",
        |claim: &Claim| claim.claimant.policy_expiration_date > claim.filing_date,
        ClaimDenialReason::PolicyExpired,
    )
    .boxed()
}

pub fn premiums_paid() -> ClaimSpec {
    of(
        "PremiumsPaid",
        |claim: &Claim| claim.claimant.premiums_paid,
        ClaimDenialReason::PremiumsNotPaid,
    )
    .boxed()
}

pub fn valid_policy_status() -> Result<ClaimSpec, SpecificationError> {
    let spec = all_of(
        "ValidPolicyStatus",
        [policy_is_active(), policy_not_expired(), premiums_paid()],
    )?;
    Ok(spec.boxed())
}

pub fn amount_is_positive() -> ClaimSpec {
    of(
        "AmountIsPositive",
        |claim: &Claim| claim.amount > 0.0,
        ClaimDenialReason::AmountNegativeOrZero,
    )
    .boxed()
}

/// Coverage limit of the claimant's own tier.
pub fn amount_within_coverage() -> ClaimSpec {
    of(
        "AmountWithinCoverage",
        |claim: &Claim| claim.amount <= claim.claimant.tier.max_claim_amount(),
        ClaimDenialReason::ClaimExceedsCoverage,
    )
    .boxed()
}

/// Coverage limit of a fixed tier, regardless of the claimant's.
pub fn amount_within_tier_coverage(tier: PolicyTier) -> ClaimSpec {
    of(
        format!("AmountWithinCoverage({})", tier.as_str()),
        move |claim: &Claim| claim.amount <= tier.max_claim_amount(),
        ClaimDenialReason::ClaimExceedsCoverage,
    )
    .boxed()
}

pub fn incident_after_policy_start() -> ClaimSpec {
    of(
        "IncidentAfterPolicyStart",
        |claim: &Claim| claim.incident_date >= claim.claimant.policy_start_date,
        ClaimDenialReason::IncidentBeforePolicyStart,
    )
    .boxed()
}

pub fn filed_within_days(max_days: u32) -> ClaimSpec {
    of(
        format!("FiledWithin{max_days}Days"),
        move |claim: &Claim| claim.days_since_incident() <= i64::from(max_days),
        ClaimDenialReason::ClaimFiledTooLate,
    )
    .boxed()
}

pub fn not_flagged_for_fraud() -> ClaimSpec {
    not(
        "NotFlaggedForFraud",
        ClaimDenialReason::FlaggedForFraud,
        of(
            "IsFlaggedForFraud",
            |claim: &Claim| claim.flagged_for_fraud,
            ClaimDenialReason::FlaggedForFraud,
        ),
    )
    .boxed()
}

/// Small enough for auto-approval.
pub fn is_small_claim(limit: f64) -> ClaimSpec {
    of(
        "IsSmallClaim",
        move |claim: &Claim| claim.amount <= limit,
        ClaimDenialReason::ManualReviewRequired,
    )
    .boxed()
}

pub fn manual_review_approved() -> ClaimSpec {
    of(
        "ManualReviewApproved",
        |claim: &Claim| claim.manual_review_approved,
        ClaimDenialReason::ManualReviewRejected,
    )
    .boxed()
}

/// Either path approves a claim: small amount, or a passed manual review.
pub fn approval_path_satisfied(small_claim_limit: f64) -> Result<ClaimSpec, SpecificationError> {
    let spec = any_of(
        "ApprovalPathSatisfied",
        [is_small_claim(small_claim_limit), manual_review_approved()],
    )?;
    Ok(spec.boxed())
}
