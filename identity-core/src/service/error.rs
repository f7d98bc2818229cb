use thiserror::Error;

use identity_providers::attestation_store::error::AttestationStoreError;
use identity_providers::common_models::HealthcareRole;
use identity_providers::verification::error::VerificationError;

#[derive(Debug, Error)]
pub enum VerificationServiceError {
    #[error("Missing verification method for role `{0}`")]
    MissingVerificationMethod(HealthcareRole),
    #[error("Verification error: `{0}`")]
    VerificationError(#[from] VerificationError),
    #[error("Attestation store error: `{0}`")]
    AttestationStoreError(#[from] AttestationStoreError),
}
