use std::sync::Arc;

use async_trait::async_trait;

use crate::attestation_store::{error::AttestationStoreError, AttestationStore};
use crate::common_models::{
    Attestation, AttestationStatus, Credential, HealthcareRole, VerificationRecord,
    VerificationStatus, WalletAddress,
};
use crate::key_value_storage::KeyValueStorage;

/// Namespace prefix for per-wallet verification records.
pub const VERIFICATION_KEY_PREFIX: &str = "healthcare_verification_";
/// Namespace prefix for the attestation ledger, keyed by attestation id.
pub const ATTESTATION_KEY_PREFIX: &str = "healthcare_attestation_";

/// Attestation store over a [`KeyValueStorage`] backing.
///
/// Each wallet owns one JSON-serialized [`VerificationRecord`] under
/// `healthcare_verification_<walletAddress>`; the attestation itself lives
/// in a second entry keyed by its id so validation can look it up directly.
pub struct KvAttestationStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl KvAttestationStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    fn record_key(wallet: &WalletAddress) -> String {
        format!("{VERIFICATION_KEY_PREFIX}{wallet}")
    }

    fn attestation_key(attestation_id: &str) -> String {
        format!("{ATTESTATION_KEY_PREFIX}{attestation_id}")
    }

    async fn load_record(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<VerificationRecord>, AttestationStoreError> {
        let Some(serialized) = self.storage.get(&Self::record_key(wallet)).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&serialized)?))
    }
}

#[async_trait]
impl AttestationStore for KvAttestationStore {
    async fn upsert(
        &self,
        wallet: &WalletAddress,
        role: HealthcareRole,
        attestation: &Attestation,
        credentials: &[Credential],
    ) -> Result<(), AttestationStoreError> {
        // superseding a prior verification also drops its ledger entry
        match self.load_record(wallet).await {
            Ok(Some(previous)) => {
                if let Some(previous_id) = previous.attestation_id {
                    if previous_id != attestation.id {
                        self.storage
                            .delete(&Self::attestation_key(&previous_id))
                            .await?;
                    }
                }
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(%wallet, %error, "could not read prior record before upsert");
            }
        }

        let record = VerificationRecord {
            status: VerificationStatus::Verified,
            role,
            attestation_id: Some(attestation.id.clone()),
            expires_at: Some(attestation.expires_at),
            verified_at: Some(attestation.issued_at),
            credentials: credentials.to_vec(),
        };

        self.storage
            .set(
                &Self::attestation_key(&attestation.id),
                serde_json::to_string(attestation)?,
            )
            .await?;
        self.storage
            .set(&Self::record_key(wallet), serde_json::to_string(&record)?)
            .await?;

        Ok(())
    }

    async fn find_active_by_wallet(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<VerificationRecord>, AttestationStoreError> {
        let Some(record) = self.load_record(wallet).await? else {
            return Ok(None);
        };

        if record.status != VerificationStatus::Verified {
            return Ok(None);
        }

        // records pointing at a revoked or missing attestation count as absent;
        // legacy records without an attestation id pass through for the caller
        // to downgrade
        if let Some(attestation_id) = &record.attestation_id {
            match self.find_by_attestation_id(attestation_id).await? {
                Some(attestation) if attestation.status == AttestationStatus::Active => {}
                _ => return Ok(None),
            }
        }

        Ok(Some(record))
    }

    async fn find_by_attestation_id(
        &self,
        attestation_id: &str,
    ) -> Result<Option<Attestation>, AttestationStoreError> {
        let Some(serialized) = self
            .storage
            .get(&Self::attestation_key(attestation_id))
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&serialized)?))
    }

    async fn delete_by_wallet(&self, wallet: &WalletAddress) -> Result<(), AttestationStoreError> {
        if let Some(record) = self.load_record(wallet).await? {
            if let Some(attestation_id) = record.attestation_id {
                self.storage
                    .delete(&Self::attestation_key(&attestation_id))
                    .await?;
            }
        }

        self.storage.delete(&Self::record_key(wallet)).await?;

        Ok(())
    }
}
