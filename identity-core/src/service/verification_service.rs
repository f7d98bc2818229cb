//! A service for establishing and validating healthcare role attestations.
//!
//! Verification is all-or-nothing: a result only reports `verified` after the
//! attestation has been durably stored, and any failure along the way
//! collapses into a rejected result with no partial state left behind.

use std::collections::HashMap;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use identity_providers::attestation_store::AttestationStore;
use identity_providers::common_models::{
    Attestation, AttestationStatus, HealthcareRole, WalletAddress,
};
use identity_providers::verification::{
    model::{IdentityData, VerificationResult},
    provider::RoleVerificationProvider,
};

use crate::service::error::VerificationServiceError;

pub struct VerificationService {
    attestation_store: Arc<dyn AttestationStore>,
    verification_method_provider: Arc<dyn RoleVerificationProvider>,
    attestation_issuer: String,
    // per-wallet guard serializing concurrent requests; the loser of the race
    // lands on the short-circuit path instead of issuing a second attestation
    in_flight: Mutex<HashMap<WalletAddress, Arc<Mutex<()>>>>,
}

impl VerificationService {
    pub fn new(
        attestation_store: Arc<dyn AttestationStore>,
        verification_method_provider: Arc<dyn RoleVerificationProvider>,
        attestation_issuer: String,
    ) -> Self {
        Self {
            attestation_store,
            verification_method_provider,
            attestation_issuer,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Establishes (or re-uses) a role attestation for the wallet.
    ///
    /// Never returns an error: every internal failure is converted into a
    /// rejected result and logged. The caller only ever sees `verified` once
    /// the attestation is persisted.
    pub async fn request_role_verification(
        &self,
        wallet: &WalletAddress,
        role: HealthcareRole,
        identity: &IdentityData,
    ) -> VerificationResult {
        let guard = self.wallet_guard(wallet).await;
        let _held = guard.lock().await;

        match self.verify(wallet, role, identity).await {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(%wallet, %role, %error, "role verification rejected");
                VerificationResult::rejected()
            }
        }
    }

    /// True iff the attestation exists, is active and is unexpired. Never
    /// throws; lookup failures read as invalid.
    pub async fn validate_role_attestation(&self, attestation_id: &str) -> bool {
        match self
            .attestation_store
            .find_by_attestation_id(attestation_id)
            .await
        {
            Ok(Some(attestation)) => attestation.is_valid_at(OffsetDateTime::now_utc()),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(attestation_id, %error, "attestation validation failed");
                false
            }
        }
    }

    /// Clears the wallet's stored verification so the flow can start over.
    pub async fn reset_verification(
        &self,
        wallet: &WalletAddress,
    ) -> Result<(), VerificationServiceError> {
        self.attestation_store.delete_by_wallet(wallet).await?;

        Ok(())
    }

    async fn verify(
        &self,
        wallet: &WalletAddress,
        role: HealthcareRole,
        identity: &IdentityData,
    ) -> Result<VerificationResult, VerificationServiceError> {
        let now = OffsetDateTime::now_utc();

        // an existing active, unexpired attestation short-circuits the role
        // checks; storage read failures degrade to a full run
        match self.attestation_store.find_active_by_wallet(wallet).await {
            Ok(Some(record)) if record.expires_at.is_some_and(|expires| expires > now) => {
                tracing::debug!(%wallet, "existing active attestation found, skipping role checks");
                return Ok(VerificationResult {
                    verified: true,
                    role: Some(record.role),
                    credentials: record.credentials,
                    attestation_id: record.attestation_id,
                    expires_at: record.expires_at,
                });
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(%wallet, %error, "attestation lookup failed, running full verification");
            }
        }

        let method = self
            .verification_method_provider
            .get_verification_method(role)
            .ok_or(VerificationServiceError::MissingVerificationMethod(role))?;

        tracing::debug!(%wallet, %role, "starting role verification");
        let credentials = method.run_checks(wallet, identity).await?;

        let attestation = self.create_attestation(wallet, role, now);

        // a persistence failure converts a semantically successful
        // verification into a rejection
        self.attestation_store
            .upsert(wallet, role, &attestation, &credentials)
            .await?;

        tracing::debug!(%wallet, %role, attestation_id = %attestation.id, "role verified");

        Ok(VerificationResult {
            verified: true,
            role: Some(role),
            credentials,
            attestation_id: Some(attestation.id),
            expires_at: Some(attestation.expires_at),
        })
    }

    fn create_attestation(
        &self,
        wallet: &WalletAddress,
        role: HealthcareRole,
        now: OffsetDateTime,
    ) -> Attestation {
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let nonce = Uuid::new_v4().simple().to_string();

        Attestation {
            id: format!("attestation-{millis}-{}", &nonce[..7]),
            wallet_address: wallet.clone(),
            role,
            issued_at: now,
            expires_at: now + role.attestation_validity(),
            issuer: self.attestation_issuer.clone(),
            verification_proof: format!(
                "0x{}{}",
                Uuid::new_v4().simple(),
                Uuid::new_v4().simple()
            ),
            status: AttestationStatus::Active,
        }
    }

    async fn wallet_guard(&self, wallet: &WalletAddress) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;

        in_flight
            .entry(wallet.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use identity_providers::attestation_store::{
        error::AttestationStoreError, imp::kv_store::KvAttestationStore, MockAttestationStore,
    };
    use identity_providers::key_value_storage::in_memory::InMemoryStorage;
    use identity_providers::verification::imp::{
        admin::AdminVerification, medical_provider::MedicalProviderVerification,
        patient::PatientVerification, provider::RoleVerificationProviderImpl,
        researcher::ResearcherVerification, Params,
    };
    use time::Duration;

    use super::*;

    fn wallet() -> WalletAddress {
        WalletAddress::format("5DAAnV9zFqyhRcjgMJiTzSxw3YkWW5BbNnGPZVmkyQhS").unwrap()
    }

    fn method_registry() -> Arc<RoleVerificationProviderImpl> {
        Arc::new(RoleVerificationProviderImpl::new(HashMap::from([
            (
                HealthcareRole::Patient,
                Arc::new(PatientVerification::new(Params::default())) as _,
            ),
            (
                HealthcareRole::Provider,
                Arc::new(MedicalProviderVerification::new(Params::default())) as _,
            ),
            (
                HealthcareRole::Researcher,
                Arc::new(ResearcherVerification::new(Params::default())) as _,
            ),
            (
                HealthcareRole::Admin,
                Arc::new(AdminVerification::new(Params::default())) as _,
            ),
        ])))
    }

    fn service() -> (Arc<dyn AttestationStore>, VerificationService) {
        let store: Arc<dyn AttestationStore> = Arc::new(KvAttestationStore::new(Arc::new(
            InMemoryStorage::new(HashMap::new()),
        )));

        (
            store.clone(),
            VerificationService::new(
                store,
                method_registry(),
                "Healthcare Identity Platform".to_string(),
            ),
        )
    }

    fn assert_attestation_id_shape(attestation_id: &str) {
        let mut parts = attestation_id.splitn(3, '-');
        assert_eq!(Some("attestation"), parts.next());

        let millis = parts.next().expect("timestamp part");
        assert!(!millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit()));

        let nonce = parts.next().expect("nonce part");
        assert!(!nonce.is_empty() && nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_provider_verification_issues_two_credentials() {
        let (_, service) = service();

        let result = service
            .request_role_verification(&wallet(), HealthcareRole::Provider, &IdentityData::default())
            .await;

        assert!(result.verified);
        assert_eq!(Some(HealthcareRole::Provider), result.role);
        assert_eq!(2, result.credentials.len());
        assert_attestation_id_shape(result.attestation_id.as_deref().unwrap());
    }

    #[tokio::test]
    async fn test_repeat_request_short_circuits_to_same_attestation() {
        let (_, service) = service();

        let first = service
            .request_role_verification(&wallet(), HealthcareRole::Patient, &IdentityData::default())
            .await;
        let second = service
            .request_role_verification(&wallet(), HealthcareRole::Patient, &IdentityData::default())
            .await;

        assert!(second.verified);
        assert_eq!(first.attestation_id, second.attestation_id);
    }

    #[tokio::test]
    async fn test_concurrent_requests_issue_one_attestation() {
        let (_, service) = service();

        let wallet_a = wallet();
        let wallet_b = wallet();
        let identity_a = IdentityData::default();
        let identity_b = IdentityData::default();
        let (first, second) = tokio::join!(
            service.request_role_verification(&wallet_a, HealthcareRole::Researcher, &identity_a),
            service.request_role_verification(&wallet_b, HealthcareRole::Researcher, &identity_b),
        );

        assert!(first.verified && second.verified);
        assert_eq!(first.attestation_id, second.attestation_id);
    }

    #[tokio::test]
    async fn test_attestation_horizons_per_role() {
        let cases = [
            (HealthcareRole::Patient, Duration::days(365)),
            (HealthcareRole::Provider, Duration::days(730)),
            (HealthcareRole::Researcher, Duration::days(365)),
            (HealthcareRole::Admin, Duration::days(180)),
        ];

        for (role, horizon) in cases {
            let (store, service) = service();

            let result = service
                .request_role_verification(&wallet(), role, &IdentityData::default())
                .await;
            let attestation = store
                .find_by_attestation_id(result.attestation_id.as_deref().unwrap())
                .await
                .unwrap()
                .expect("attestation persisted");

            assert_eq!(horizon, attestation.expires_at - attestation.issued_at);
        }
    }

    #[tokio::test]
    async fn test_persistence_failure_rejects_verification() {
        let mut store = MockAttestationStore::new();
        store
            .expect_find_active_by_wallet()
            .returning(|_| Ok(None));
        store.expect_upsert().returning(|_, _, _, _| {
            Err(AttestationStoreError::Unavailable("db down".to_string()))
        });

        let service = VerificationService::new(
            Arc::new(store),
            method_registry(),
            "Healthcare Identity Platform".to_string(),
        );

        let result = service
            .request_role_verification(&wallet(), HealthcareRole::Provider, &IdentityData::default())
            .await;

        assert_eq!(VerificationResult::rejected(), result);
    }

    #[tokio::test]
    async fn test_missing_method_rejects_verification() {
        let store: Arc<dyn AttestationStore> = Arc::new(KvAttestationStore::new(Arc::new(
            InMemoryStorage::new(HashMap::new()),
        )));
        let service = VerificationService::new(
            store,
            Arc::new(RoleVerificationProviderImpl::new(HashMap::new())),
            "Healthcare Identity Platform".to_string(),
        );

        let result = service
            .request_role_verification(&wallet(), HealthcareRole::Admin, &IdentityData::default())
            .await;

        assert_eq!(VerificationResult::rejected(), result);
    }

    #[tokio::test]
    async fn test_validate_role_attestation() {
        let (store, service) = service();

        let result = service
            .request_role_verification(&wallet(), HealthcareRole::Patient, &IdentityData::default())
            .await;
        let attestation_id = result.attestation_id.unwrap();

        assert!(service.validate_role_attestation(&attestation_id).await);
        assert!(!service.validate_role_attestation("attestation-0-missing").await);

        // expired attestations validate as false even while still "active"
        let mut expired = store
            .find_by_attestation_id(&attestation_id)
            .await
            .unwrap()
            .unwrap();
        expired.issued_at = OffsetDateTime::now_utc() - Duration::days(400);
        expired.expires_at = OffsetDateTime::now_utc() - Duration::days(35);
        store
            .upsert(&wallet(), HealthcareRole::Patient, &expired, &[])
            .await
            .unwrap();

        assert!(!service.validate_role_attestation(&attestation_id).await);
    }

    #[tokio::test]
    async fn test_reset_verification_clears_stored_state() {
        let (store, service) = service();

        service
            .request_role_verification(&wallet(), HealthcareRole::Patient, &IdentityData::default())
            .await;
        service.reset_verification(&wallet()).await.unwrap();

        assert!(store
            .find_active_by_wallet(&wallet())
            .await
            .unwrap()
            .is_none());
    }
}
