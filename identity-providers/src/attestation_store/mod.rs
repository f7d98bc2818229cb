//! Persistence abstraction for role attestations and their per-wallet
//! verification records.

use crate::attestation_store::error::AttestationStoreError;
use crate::common_models::{Attestation, Credential, HealthcareRole, VerificationRecord, WalletAddress};

pub mod error;
pub mod imp;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AttestationStore: Send + Sync {
    /// Stores a fresh verification, replacing any prior record for the
    /// wallet. At most one active attestation exists per wallet at any time.
    ///
    /// A failed upsert must never be treated as success by callers.
    async fn upsert(
        &self,
        wallet: &WalletAddress,
        role: HealthcareRole,
        attestation: &Attestation,
        credentials: &[Credential],
    ) -> Result<(), AttestationStoreError>;

    /// Returns the wallet's verification record only while its attestation is
    /// still active. Callers are responsible for the expiry-time check; the
    /// store does not auto-expire.
    async fn find_active_by_wallet(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<VerificationRecord>, AttestationStoreError>;

    async fn find_by_attestation_id(
        &self,
        attestation_id: &str,
    ) -> Result<Option<Attestation>, AttestationStoreError>;

    /// Removes the wallet's verification record and its attestation.
    async fn delete_by_wallet(&self, wallet: &WalletAddress) -> Result<(), AttestationStoreError>;
}
