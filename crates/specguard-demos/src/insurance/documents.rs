use super::model::{Claim, ClaimType, DocumentType};
use super::reason::ClaimDenialReason;
use specguard::{Specification, SpecificationResult};
use std::collections::BTreeSet;

/// Checks that every document the claim type requires was submitted and verified.
///
/// Reports one `MissingRequiredDocuments` per missing document, plus one
/// `DocumentsNotVerified` when any submitted required document is unverified.
/// Its name is the type's own (`DocumentCompliance`).
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCompliance;

pub fn required_documents(claim_type: ClaimType) -> BTreeSet<DocumentType> {
    use DocumentType::*;
    let required: &[DocumentType] = match claim_type {
        ClaimType::Medical => &[ClaimForm, MedicalRecords],
        ClaimType::Auto => &[ClaimForm, PoliceReport, Photos, RepairEstimate],
        ClaimType::Property => &[ClaimForm, Photos, ProofOfOwnership, RepairEstimate],
        ClaimType::Life => &[ClaimForm, DeathCertificate],
    };
    required.iter().copied().collect()
}

impl Specification for DocumentCompliance {
    type Context = Claim;
    type Reason = ClaimDenialReason;

    fn evaluate(&self, claim: &Claim) -> SpecificationResult<ClaimDenialReason> {
        let required = required_documents(claim.claim_type);
        let submitted: BTreeSet<DocumentType> =
            claim.documents.iter().map(|d| d.doc_type).collect();

        let mut failures: Vec<ClaimDenialReason> = required
            .difference(&submitted)
            .map(|_| ClaimDenialReason::MissingRequiredDocuments)
            .collect();

        let has_unverified = claim
            .documents
            .iter()
            .any(|d| required.contains(&d.doc_type) && !d.verified);
        if has_unverified {
            failures.push(ClaimDenialReason::DocumentsNotVerified);
        }

        SpecificationResult::fail_with(self.name(), failures)
    }
}
