use super::model::{Claim, ClaimType, ClaimantInfo, Document, DocumentType, PolicyTier};
use crate::Case;
use time::macros::date;
use time::{Date, Duration};

fn days_before(today: Date, days: i64) -> Date {
    today.saturating_sub(Duration::days(days))
}

fn active_claimant(today: Date) -> ClaimantInfo {
    ClaimantInfo {
        policy_number: "POL-12345".to_string(),
        name: "John Smith".to_string(),
        policy_start_date: date!(2023 - 01 - 01),
        policy_expiration_date: today.saturating_add(Duration::days(365)),
        tier: PolicyTier::Standard,
        policy_active: true,
        premiums_paid: true,
    }
}

fn expired_claimant() -> ClaimantInfo {
    ClaimantInfo {
        policy_number: "POL-99999".to_string(),
        name: "Jane Doe".to_string(),
        policy_start_date: date!(2020 - 01 - 01),
        policy_expiration_date: date!(2023 - 12 - 31),
        tier: PolicyTier::Basic,
        policy_active: false,
        premiums_paid: true,
    }
}

fn verified(types: &[DocumentType]) -> Vec<Document> {
    types.iter().copied().map(Document::verified).collect()
}

struct Draft {
    id: &'static str,
    claim_type: ClaimType,
    amount: f64,
    incident_days_ago: i64,
    documents: Vec<Document>,
    flagged_for_fraud: bool,
    manual_review_approved: bool,
    notes: &'static str,
}

impl Draft {
    fn file(self, today: Date, claimant: ClaimantInfo) -> Claim {
        Claim {
            claim_id: self.id.to_string(),
            claim_type: self.claim_type,
            amount: self.amount,
            incident_date: days_before(today, self.incident_days_ago),
            filing_date: today,
            claimant,
            documents: self.documents,
            flagged_for_fraud: self.flagged_for_fraud,
            manual_review_approved: self.manual_review_approved,
            notes: self.notes.to_string(),
        }
    }
}

/// The built-in walkthrough claims, all filed on `today`.
pub fn showcase(today: Date) -> Vec<Case<Claim>> {
    use DocumentType::*;

    let medical_docs = || verified(&[ClaimForm, MedicalRecords]);
    let auto_docs = || verified(&[ClaimForm, PoliceReport, Photos, RepairEstimate]);
    let property_docs = || verified(&[ClaimForm, Photos, ProofOfOwnership, RepairEstimate]);
    let active = || active_claimant(today);

    let mut everything_wrong = Draft {
        id: "CLM-099",
        claim_type: ClaimType::Auto,
        amount: 100_000.0,
        incident_days_ago: 0,
        documents: vec![Document::unverified(ClaimForm)],
        flagged_for_fraud: true,
        manual_review_approved: false,
        notes: "Everything wrong",
    }
    .file(today, expired_claimant());
    everything_wrong.incident_date = date!(2022 - 01 - 01);

    vec![
        Case::new(
            "Valid small medical claim (auto-approved)",
            Draft {
                id: "CLM-001",
                claim_type: ClaimType::Medical,
                amount: 500.0,
                incident_days_ago: 30,
                documents: medical_docs(),
                flagged_for_fraud: false,
                manual_review_approved: false,
                notes: "Routine medical expense",
            }
            .file(today, active()),
        ),
        Case::new(
            "Large medical claim (manual review approved)",
            Draft {
                id: "CLM-002",
                claim_type: ClaimType::Medical,
                amount: 15_000.0,
                incident_days_ago: 30,
                documents: medical_docs(),
                flagged_for_fraud: false,
                manual_review_approved: true,
                notes: "Surgery expenses",
            }
            .file(today, active()),
        ),
        Case::new(
            "Large medical claim (manual review pending)",
            Draft {
                id: "CLM-003",
                claim_type: ClaimType::Medical,
                amount: 15_000.0,
                incident_days_ago: 30,
                documents: medical_docs(),
                flagged_for_fraud: false,
                manual_review_approved: false,
                notes: "Surgery expenses",
            }
            .file(today, active()),
        ),
        Case::new(
            "Valid auto claim",
            Draft {
                id: "CLM-010",
                claim_type: ClaimType::Auto,
                amount: 800.0,
                incident_days_ago: 15,
                documents: auto_docs(),
                flagged_for_fraud: false,
                manual_review_approved: false,
                notes: "Fender bender",
            }
            .file(today, active()),
        ),
        Case::new(
            "Auto claim filed too late (>30 days)",
            Draft {
                id: "CLM-011",
                claim_type: ClaimType::Auto,
                amount: 5_000.0,
                incident_days_ago: 45,
                documents: auto_docs(),
                flagged_for_fraud: false,
                manual_review_approved: true,
                notes: "Accident - late filing",
            }
            .file(today, active()),
        ),
        Case::new(
            "Auto claim with missing documents",
            Draft {
                id: "CLM-012",
                claim_type: ClaimType::Auto,
                amount: 3_000.0,
                incident_days_ago: 10,
                documents: verified(&[ClaimForm]),
                flagged_for_fraud: false,
                manual_review_approved: true,
                notes: "Hit and run - incomplete docs",
            }
            .file(today, active()),
        ),
        Case::new(
            "Claim flagged for fraud",
            Draft {
                id: "CLM-020",
                claim_type: ClaimType::Property,
                amount: 50_000.0,
                incident_days_ago: 5,
                documents: property_docs(),
                flagged_for_fraud: true,
                manual_review_approved: true,
                notes: "Suspicious claim",
            }
            .file(today, active()),
        ),
        Case::new(
            "Claim on expired/inactive policy",
            Draft {
                id: "CLM-030",
                claim_type: ClaimType::Medical,
                amount: 1_000.0,
                incident_days_ago: 10,
                documents: medical_docs(),
                flagged_for_fraud: false,
                manual_review_approved: false,
                notes: "Expired policy claim",
            }
            .file(today, expired_claimant()),
        ),
        Case::new(
            "Claim exceeds coverage limit",
            Draft {
                id: "CLM-040",
                claim_type: ClaimType::Property,
                amount: 75_000.0,
                incident_days_ago: 10,
                documents: property_docs(),
                flagged_for_fraud: false,
                manual_review_approved: true,
                notes: "Major property damage",
            }
            .file(today, active()),
        ),
        Case::new("Claim with multiple issues", everything_wrong),
    ]
}
