use thiserror::Error;

use crate::attestation_store::error::AttestationStoreError;
use crate::common_models::HealthcareRole;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("No verification method registered for role `{0}`")]
    UnsupportedRole(HealthcareRole),
    #[error("Verification step failed: `{0}`")]
    CheckFailed(String),
    #[error("Attestation store error: `{0}`")]
    Store(#[from] AttestationStoreError),
}
