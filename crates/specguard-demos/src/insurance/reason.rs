use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a claim was denied. One value per business rule violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimDenialReason {
    // Policy status
    PolicyNotActive,
    PolicyExpired,
    PremiumsNotPaid,

    // Amount
    ClaimExceedsCoverage,
    AmountNegativeOrZero,

    // Timing
    IncidentBeforePolicyStart,
    ClaimFiledTooLate,

    // Documentation
    MissingRequiredDocuments,
    DocumentsNotVerified,

    FlaggedForFraud,

    // Review
    ManualReviewRequired,
    ManualReviewRejected,
}

impl ClaimDenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimDenialReason::PolicyNotActive => "POLICY_NOT_ACTIVE",
            ClaimDenialReason::PolicyExpired => "POLICY_EXPIRED",
            ClaimDenialReason::PremiumsNotPaid => "PREMIUMS_NOT_PAID",
            ClaimDenialReason::ClaimExceedsCoverage => "CLAIM_EXCEEDS_COVERAGE",
            ClaimDenialReason::AmountNegativeOrZero => "AMOUNT_NEGATIVE_OR_ZERO",
            ClaimDenialReason::IncidentBeforePolicyStart => "INCIDENT_BEFORE_POLICY_START",
            ClaimDenialReason::ClaimFiledTooLate => "CLAIM_FILED_TOO_LATE",
            ClaimDenialReason::MissingRequiredDocuments => "MISSING_REQUIRED_DOCUMENTS",
            ClaimDenialReason::DocumentsNotVerified => "DOCUMENTS_NOT_VERIFIED",
            ClaimDenialReason::FlaggedForFraud => "FLAGGED_FOR_FRAUD",
            ClaimDenialReason::ManualReviewRequired => "MANUAL_REVIEW_REQUIRED",
            ClaimDenialReason::ManualReviewRejected => "MANUAL_REVIEW_REJECTED",
        }
    }
}

impl fmt::Display for ClaimDenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
