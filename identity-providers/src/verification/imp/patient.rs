use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use time::{Duration, OffsetDateTime};

use crate::common_models::{Credential, HealthcareRole, WalletAddress};
use crate::verification::{
    error::VerificationError,
    imp::{credential_id, rfc3339, simulate_step, Params},
    model::IdentityData,
    RoleVerificationMethod,
};

/// Patient verification: a single basic-identity step. In a real deployment
/// this would check an insurance database or an ID verification service.
pub struct PatientVerification {
    params: Params,
}

impl PatientVerification {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

#[async_trait]
impl RoleVerificationMethod for PatientVerification {
    fn role(&self) -> HealthcareRole {
        HealthcareRole::Patient
    }

    async fn run_checks(
        &self,
        _wallet: &WalletAddress,
        _identity: &IdentityData,
    ) -> Result<Vec<Credential>, VerificationError> {
        simulate_step("basic_identity", self.params.step_delay).await;

        let now = OffsetDateTime::now_utc();
        let claims = HashMap::from([
            ("verificationType".to_string(), json!("basic")),
            ("verifiedAt".to_string(), json!(rfc3339(now))),
        ]);

        Ok(vec![Credential {
            id: credential_id("patient", now),
            credential_type: "PatientIdentity".to_string(),
            issuer: "Healthcare Identity Platform".to_string(),
            issued_at: now,
            expires_at: now + Duration::days(365),
            claims,
        }])
    }
}
