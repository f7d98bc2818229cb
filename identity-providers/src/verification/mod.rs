//! Role-specific verification pipelines.
//!
//! Each healthcare role has its own sequence of simulated verification steps
//! standing in for real-world checks (license registries, institutional
//! directories, multi-factor confirmation). A successful pipeline issues the
//! role's credential bundle; any failed step rejects the whole request with
//! no partial credentials.

use crate::common_models::{Credential, HealthcareRole, WalletAddress};
use crate::verification::{error::VerificationError, model::IdentityData};

pub mod error;
pub mod imp;
pub mod model;
pub mod provider;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait RoleVerificationMethod: Send + Sync {
    fn role(&self) -> HealthcareRole;

    /// Runs the role's check pipeline and issues its credentials.
    ///
    /// All-or-nothing: an error from any step means no credentials at all.
    async fn run_checks(
        &self,
        wallet: &WalletAddress,
        identity: &IdentityData,
    ) -> Result<Vec<Credential>, VerificationError>;
}
