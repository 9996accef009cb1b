//! Insurance claim processing.
//!
//! Every claim type shares a base policy (policy status, amount, fraud) and
//! adds its own filing window, document requirements and approval path.

mod documents;
mod model;
mod policies;
mod reason;
mod showcase;
mod specs;

pub use documents::{DocumentCompliance, required_documents};
pub use model::{Claim, ClaimType, ClaimantInfo, Document, DocumentType, PolicyTier};
pub use policies::{
    ClaimPolicy, FilingWindows, InsuranceRules, auto_claim_policy, base_policy, life_claim_policy,
    medical_claim_policy, policy_for, property_claim_policy,
};
pub use reason::ClaimDenialReason;
pub use showcase::showcase;
pub use specs::{
    ClaimSpec, amount_is_positive, amount_within_coverage, amount_within_tier_coverage,
    approval_path_satisfied, filed_within_days, incident_after_policy_start, is_small_claim,
    manual_review_approved, not_flagged_for_fraud, policy_is_active, policy_not_expired,
    premiums_paid, valid_policy_status,
};
