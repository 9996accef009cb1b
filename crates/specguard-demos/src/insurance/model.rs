use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    Medical,
    Auto,
    Property,
    Life,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Medical => "MEDICAL",
            ClaimType::Auto => "AUTO",
            ClaimType::Property => "PROPERTY",
            ClaimType::Life => "LIFE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    ClaimForm,
    PoliceReport,
    MedicalRecords,
    RepairEstimate,
    Photos,
    Receipts,
    DeathCertificate,
    ProofOfOwnership,
}

/// Coverage tier; each caps the amount of a single claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyTier {
    Basic,
    Standard,
    Premium,
    Platinum,
}

impl PolicyTier {
    pub fn max_claim_amount(&self) -> f64 {
        match self {
            PolicyTier::Basic => 10_000.0,
            PolicyTier::Standard => 50_000.0,
            PolicyTier::Premium => 200_000.0,
            PolicyTier::Platinum => 1_000_000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyTier::Basic => "BASIC",
            PolicyTier::Standard => "STANDARD",
            PolicyTier::Premium => "PREMIUM",
            PolicyTier::Platinum => "PLATINUM",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub doc_type: DocumentType,
    pub verified: bool,
}

impl Document {
    pub fn verified(doc_type: DocumentType) -> Self {
        Self {
            doc_type,
            verified: true,
        }
    }

    pub fn unverified(doc_type: DocumentType) -> Self {
        Self {
            doc_type,
            verified: false,
        }
    }
}

/// The person filing the claim and the state of their insurance policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimantInfo {
    pub policy_number: String,
    pub name: String,
    #[serde(with = "iso_date")]
    pub policy_start_date: Date,
    #[serde(with = "iso_date")]
    pub policy_expiration_date: Date,
    pub tier: PolicyTier,
    pub policy_active: bool,
    pub premiums_paid: bool,
}

/// The context evaluated by every claim specification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    pub claim_type: ClaimType,
    pub amount: f64,
    #[serde(with = "iso_date")]
    pub incident_date: Date,
    #[serde(with = "iso_date")]
    pub filing_date: Date,
    pub claimant: ClaimantInfo,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub flagged_for_fraud: bool,
    #[serde(default)]
    pub manual_review_approved: bool,
    #[serde(default)]
    pub notes: String,
}

impl Claim {
    /// Whole days between the incident and the filing.
    pub fn days_since_incident(&self) -> i64 {
        (self.filing_date - self.incident_date).whole_days()
    }
}
