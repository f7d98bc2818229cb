use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use time::{Duration, OffsetDateTime};

use crate::common_models::{Credential, HealthcareRole, WalletAddress};
use crate::verification::{
    error::VerificationError,
    imp::{credential_id, simulate_step, Params},
    model::IdentityData,
    RoleVerificationMethod,
};

/// Admin verification: three steps, the highest scrutiny of any role.
pub struct AdminVerification {
    params: Params,
}

impl AdminVerification {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

#[async_trait]
impl RoleVerificationMethod for AdminVerification {
    fn role(&self) -> HealthcareRole {
        HealthcareRole::Admin
    }

    async fn run_checks(
        &self,
        _wallet: &WalletAddress,
        _identity: &IdentityData,
    ) -> Result<Vec<Credential>, VerificationError> {
        simulate_step("org_admin_status", self.params.step_delay).await;
        simulate_step("admin_credentials", self.params.step_delay).await;
        simulate_step("multi_factor", self.params.step_delay).await;

        let now = OffsetDateTime::now_utc();

        Ok(vec![Credential {
            id: credential_id("admin", now),
            credential_type: "SystemAdministrator".to_string(),
            issuer: "Healthcare Platform Authority".to_string(),
            issued_at: now,
            // shortest credential lifetime, matching the admin attestation horizon
            expires_at: now + Duration::days(180),
            claims: HashMap::from([
                ("accessLevel".to_string(), json!("system")),
                ("clearanceLevel".to_string(), json!("high")),
                ("verificationLevel".to_string(), json!("enhanced")),
                ("multiFactorVerified".to_string(), json!(true)),
            ]),
        }])
    }
}
