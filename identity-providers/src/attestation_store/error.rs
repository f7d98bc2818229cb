use thiserror::Error;

use crate::key_value_storage::KeyValueStorageError;

/// Failures of the attestation persistence layer.
///
/// Read paths degrade to "not found" at the caller; write failures must abort
/// the verification they belong to.
#[derive(Debug, Error)]
pub enum AttestationStoreError {
    #[error("Storage unavailable: `{0}`")]
    Unavailable(String),
    #[error("Stored record malformed: `{0}`")]
    Malformed(#[from] serde_json::Error),
    /// The backing table/namespace has not been provisioned yet; readers
    /// treat this the same as an empty store.
    #[error("Attestation storage not provisioned")]
    NotProvisioned,
}

impl From<KeyValueStorageError> for AttestationStoreError {
    fn from(error: KeyValueStorageError) -> Self {
        Self::Unavailable(error.to_string())
    }
}
