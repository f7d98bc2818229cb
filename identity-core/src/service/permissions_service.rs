//! Session-scoped permission state derived from the attestation store.
//!
//! The state is never mutated directly by consumers; it is re-derived when
//! the active wallet changes or on an explicit refresh, and feature-gating
//! components query it through the capability methods.

use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::RwLock;

use identity_providers::attestation_store::AttestationStore;
use identity_providers::common_models::{HealthcareRole, WalletAddress};

use crate::model::{find_feature, TokenGatedFeature, TOKEN_GATED_FEATURES};
use crate::service::verification_service::VerificationService;

/// Derived permission state for the active wallet session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PermissionsState {
    pub current_role: Option<HealthcareRole>,
    pub attestation_id: Option<String>,
    pub is_verified: bool,
    pub last_verified: Option<OffsetDateTime>,
    pub expires_at: Option<OffsetDateTime>,
}

#[derive(Default)]
struct Session {
    wallet: Option<WalletAddress>,
    permissions: PermissionsState,
}

pub struct PermissionsService {
    attestation_store: Arc<dyn AttestationStore>,
    verification_service: Arc<VerificationService>,
    session: RwLock<Session>,
}

impl PermissionsService {
    pub fn new(
        attestation_store: Arc<dyn AttestationStore>,
        verification_service: Arc<VerificationService>,
    ) -> Self {
        Self {
            attestation_store,
            verification_service,
            session: RwLock::new(Session::default()),
        }
    }

    /// Re-derives permission state for a wallet change. `None` (sign-out)
    /// resets everything.
    pub async fn set_wallet(&self, wallet: Option<WalletAddress>) {
        let permissions = match &wallet {
            None => PermissionsState::default(),
            Some(wallet) => self.load_permissions(wallet).await,
        };

        let mut session = self.session.write().await;
        session.wallet = wallet;
        session.permissions = permissions;
    }

    /// Re-validates the current attestation; invalid or expired state resets
    /// to unverified. Re-verification itself stays user-initiated.
    pub async fn refresh_permissions(&self) {
        let wallet = self.session.read().await.wallet.clone();

        if let Some(wallet) = wallet {
            let permissions = self.load_permissions(&wallet).await;
            self.session.write().await.permissions = permissions;
        }
    }

    pub async fn current_role(&self) -> Option<HealthcareRole> {
        self.session.read().await.permissions.current_role
    }

    pub async fn is_verified(&self) -> bool {
        self.session.read().await.permissions.is_verified
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.wallet.is_some()
    }

    /// Exact role match only; there is no role hierarchy.
    pub async fn has_role(&self, role: HealthcareRole) -> bool {
        self.session.read().await.permissions.current_role == Some(role)
    }

    pub async fn can_access_feature(&self, feature_id: &str) -> bool {
        let session = self.session.read().await;

        if !session.permissions.is_verified {
            return false;
        }
        let Some(role) = session.permissions.current_role else {
            return false;
        };

        find_feature(feature_id)
            .is_some_and(|feature| feature.required_roles.contains(&role))
    }

    pub async fn available_features(&self) -> Vec<&'static TokenGatedFeature> {
        let session = self.session.read().await;

        let Some(role) = session.permissions.current_role else {
            return vec![];
        };
        if !session.permissions.is_verified {
            return vec![];
        }

        TOKEN_GATED_FEATURES
            .iter()
            .filter(|feature| feature.required_roles.contains(&role))
            .collect()
    }

    pub async fn state(&self) -> PermissionsState {
        self.session.read().await.permissions.clone()
    }

    async fn load_permissions(&self, wallet: &WalletAddress) -> PermissionsState {
        let record = match self.attestation_store.find_active_by_wallet(wallet).await {
            Ok(Some(record)) => record,
            Ok(None) => return PermissionsState::default(),
            Err(error) => {
                // read failures count as "not found"
                tracing::debug!(%wallet, %error, "verification record unavailable");
                return PermissionsState::default();
            }
        };

        let now = OffsetDateTime::now_utc();
        if record.expires_at.is_some_and(|expires| expires <= now) {
            tracing::debug!(%wallet, "stored verification expired");
            return PermissionsState::default();
        }

        match &record.attestation_id {
            Some(attestation_id) => {
                if self
                    .verification_service
                    .validate_role_attestation(attestation_id)
                    .await
                {
                    PermissionsState {
                        current_role: Some(record.role),
                        attestation_id: record.attestation_id.clone(),
                        is_verified: true,
                        last_verified: record.verified_at.or(Some(now)),
                        expires_at: record.expires_at,
                    }
                } else {
                    tracing::debug!(%wallet, "attestation invalid or expired");
                    PermissionsState::default()
                }
            }
            // legacy record without an attestation: role known but untrusted
            None => PermissionsState {
                current_role: Some(record.role),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use identity_providers::attestation_store::imp::kv_store::{
        KvAttestationStore, VERIFICATION_KEY_PREFIX,
    };
    use identity_providers::key_value_storage::{in_memory::InMemoryStorage, KeyValueStorage};
    use identity_providers::verification::imp::{
        medical_provider::MedicalProviderVerification, provider::RoleVerificationProviderImpl,
        Params,
    };
    use identity_providers::verification::model::IdentityData;
    use time::Duration;

    use super::*;

    fn wallet() -> WalletAddress {
        WalletAddress::format("5DAAnV9zFqyhRcjgMJiTzSxw3YkWW5BbNnGPZVmkyQhS").unwrap()
    }

    fn services() -> (Arc<InMemoryStorage>, Arc<VerificationService>, PermissionsService) {
        let storage = Arc::new(InMemoryStorage::new(HashMap::new()));
        let store: Arc<dyn AttestationStore> =
            Arc::new(KvAttestationStore::new(storage.clone()));

        let methods = Arc::new(RoleVerificationProviderImpl::new(HashMap::from([(
            HealthcareRole::Provider,
            Arc::new(MedicalProviderVerification::new(Params::default())) as _,
        )])));

        let verification = Arc::new(VerificationService::new(
            store.clone(),
            methods,
            "Healthcare Identity Platform".to_string(),
        ));
        let permissions = PermissionsService::new(store, verification.clone());

        (storage, verification, permissions)
    }

    #[tokio::test]
    async fn test_verification_round_trips_into_permission_state() {
        let (_, verification, permissions) = services();

        let result = verification
            .request_role_verification(&wallet(), HealthcareRole::Provider, &IdentityData::default())
            .await;
        permissions.set_wallet(Some(wallet())).await;

        assert!(permissions.is_verified().await);
        assert_eq!(
            Some(HealthcareRole::Provider),
            permissions.current_role().await
        );
        assert_eq!(result.attestation_id, permissions.state().await.attestation_id);
    }

    #[tokio::test]
    async fn test_feature_gating_for_provider() {
        let (_, verification, permissions) = services();

        verification
            .request_role_verification(&wallet(), HealthcareRole::Provider, &IdentityData::default())
            .await;
        permissions.set_wallet(Some(wallet())).await;

        assert!(permissions.can_access_feature("medical_records_edit").await);
        assert!(!permissions.can_access_feature("user_management").await);
        assert!(!permissions.can_access_feature("does_not_exist").await);

        let features = permissions.available_features().await;
        assert!(features.iter().any(|f| f.id == "medical_records_edit"));
        assert!(features.iter().all(|f| f.id != "user_management"));
    }

    #[tokio::test]
    async fn test_no_wallet_resets_state() {
        let (_, verification, permissions) = services();

        verification
            .request_role_verification(&wallet(), HealthcareRole::Provider, &IdentityData::default())
            .await;
        permissions.set_wallet(Some(wallet())).await;
        assert!(permissions.is_verified().await);
        assert!(permissions.is_authenticated().await);

        permissions.set_wallet(None).await;

        assert!(!permissions.is_verified().await);
        assert!(!permissions.is_authenticated().await);
        assert_eq!(PermissionsState::default(), permissions.state().await);
    }

    #[tokio::test]
    async fn test_unverified_state_gates_every_feature() {
        let (_, _, permissions) = services();

        permissions.set_wallet(Some(wallet())).await;

        assert!(!permissions.is_verified().await);
        for feature in TOKEN_GATED_FEATURES {
            assert!(!permissions.can_access_feature(feature.id).await);
        }
        assert!(permissions.available_features().await.is_empty());
    }

    #[tokio::test]
    async fn test_expired_record_loads_as_unverified() {
        let (storage, verification, permissions) = services();

        verification
            .request_role_verification(&wallet(), HealthcareRole::Provider, &IdentityData::default())
            .await;

        // age the stored record past its expiry
        let key = format!("{VERIFICATION_KEY_PREFIX}{}", wallet());
        let mut record: serde_json::Value =
            serde_json::from_str(&storage.get(&key).await.unwrap().unwrap()).unwrap();
        let past = (OffsetDateTime::now_utc() - Duration::days(1))
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();
        record["expiresAt"] = serde_json::Value::String(past);
        storage.set(&key, record.to_string()).await.unwrap();

        permissions.set_wallet(Some(wallet())).await;

        assert!(!permissions.is_verified().await);
        assert_eq!(None, permissions.current_role().await);
        assert_eq!(None, permissions.state().await.attestation_id);
    }

    #[tokio::test]
    async fn test_legacy_record_sets_role_but_not_verified() {
        let (storage, _, permissions) = services();

        let key = format!("{VERIFICATION_KEY_PREFIX}{}", wallet());
        storage
            .set(
                &key,
                r#"{"status":"VERIFIED","role":"PATIENT"}"#.to_string(),
            )
            .await
            .unwrap();

        permissions.set_wallet(Some(wallet())).await;

        assert_eq!(
            Some(HealthcareRole::Patient),
            permissions.current_role().await
        );
        assert!(!permissions.is_verified().await);
        assert!(!permissions.can_access_feature("medical_records_view").await);
    }

    #[tokio::test]
    async fn test_refresh_resets_after_attestation_disappears() {
        let (_, verification, permissions) = services();

        verification
            .request_role_verification(&wallet(), HealthcareRole::Provider, &IdentityData::default())
            .await;
        permissions.set_wallet(Some(wallet())).await;
        assert!(permissions.is_verified().await);

        verification.reset_verification(&wallet()).await.unwrap();
        permissions.refresh_permissions().await;

        assert!(!permissions.is_verified().await);
        assert_eq!(None, permissions.current_role().await);
    }
}
