//! The **Healthcare Identity Core** is a library for resolving wallet-based
//! identities and gating healthcare features behind verified role
//! attestations.
//!
//! The library consists of two crates:
//!
//! * **Providers**: modular traits and implementations for wallet resolution,
//!   key-value storage, attestation persistence and per-role verification
//!   pipelines. Developers can use providers individually for modular
//!   functionality.
//! * **Core**: a service layer orchestrating the providers for the whole
//!   identity flow — resolve a wallet, establish a role attestation, derive
//!   and query the session's permission state.
//!
//! To get started, initialize the core with a storage backing:
//!
//! ```ignore rust
//! /// `None` initializes the Core with the default configuration
//! let core = HealthcareIdentityCore::new(
//!     None,
//!     Arc::new(InMemoryStorage::new(HashMap::new())),
//!     None,
//!     None,
//! );
//! ```
//!
//! Then start using the services, e.g.:
//!
//! ```ignore rust
//! let result = core
//!     .verification_service
//!     .request_role_verification(&wallet, HealthcareRole::Patient, &identity_data)
//!     .await;
//! ```

use std::{collections::HashMap, sync::Arc};

use identity_providers::attestation_store::{imp::kv_store::KvAttestationStore, AttestationStore};
use identity_providers::common_models::HealthcareRole;
use identity_providers::key_value_storage::KeyValueStorage;
use identity_providers::verification::imp::{
    admin::AdminVerification, medical_provider::MedicalProviderVerification,
    patient::PatientVerification, provider::RoleVerificationProviderImpl,
    researcher::ResearcherVerification, Params as VerificationParams,
};
use identity_providers::verification::RoleVerificationMethod;
use identity_providers::wallet_resolver::imp::resolver::{
    Params as ResolverParams, WalletResolver,
};
use identity_providers::wallet_resolver::{EmbeddedWalletLookup, GatewayTokenLookup};

use config::CoreConfig;
use service::permissions_service::PermissionsService;
use service::verification_service::VerificationService;
use service::wallet_service::WalletService;
use telemetry::Telemetry;

pub mod config;
pub mod model;
pub mod service;
pub mod telemetry;

pub struct HealthcareIdentityCore {
    pub wallet_service: WalletService,
    pub verification_service: Arc<VerificationService>,
    pub permissions_service: PermissionsService,
    pub telemetry: Telemetry,
}

impl HealthcareIdentityCore {
    pub fn new(
        config: Option<CoreConfig>,
        storage: Arc<dyn KeyValueStorage>,
        embedded_wallet: Option<Arc<dyn EmbeddedWalletLookup>>,
        gateway_token: Option<Arc<dyn GatewayTokenLookup>>,
    ) -> Self {
        let config = config.unwrap_or_default();

        // initialize wallet resolution
        let resolver = WalletResolver::new(
            embedded_wallet,
            gateway_token,
            ResolverParams {
                environment: config.environment,
                lookup_timeout: config.resolver_config.lookup_timeout,
            },
        );
        let wallet_service = WalletService::new(resolver);

        // initialize attestation persistence
        let attestation_store: Arc<dyn AttestationStore> =
            Arc::new(KvAttestationStore::new(storage));

        // initialize the per-role verification pipelines
        let params = VerificationParams {
            step_delay: config.verification_config.step_delay,
        };
        let verification_methods: HashMap<HealthcareRole, Arc<dyn RoleVerificationMethod>> =
            HashMap::from_iter(vec![
                (
                    HealthcareRole::Patient,
                    Arc::new(PatientVerification::new(params.clone())) as _,
                ),
                (
                    HealthcareRole::Provider,
                    Arc::new(MedicalProviderVerification::new(params.clone())) as _,
                ),
                (
                    HealthcareRole::Researcher,
                    Arc::new(ResearcherVerification::new(params.clone())) as _,
                ),
                (
                    HealthcareRole::Admin,
                    Arc::new(AdminVerification::new(params)) as _,
                ),
            ]);
        let verification_method_provider =
            Arc::new(RoleVerificationProviderImpl::new(verification_methods));

        let verification_service = Arc::new(VerificationService::new(
            attestation_store.clone(),
            verification_method_provider,
            config.verification_config.attestation_issuer,
        ));

        let permissions_service =
            PermissionsService::new(attestation_store, verification_service.clone());

        Self {
            wallet_service,
            verification_service,
            permissions_service,
            telemetry: Telemetry::new(),
        }
    }
}
