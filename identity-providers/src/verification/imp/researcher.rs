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

/// Researcher verification: institution check plus academic credentials.
pub struct ResearcherVerification {
    params: Params,
}

impl ResearcherVerification {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

#[async_trait]
impl RoleVerificationMethod for ResearcherVerification {
    fn role(&self) -> HealthcareRole {
        HealthcareRole::Researcher
    }

    async fn run_checks(
        &self,
        _wallet: &WalletAddress,
        identity: &IdentityData,
    ) -> Result<Vec<Credential>, VerificationError> {
        simulate_step("research_institution", self.params.step_delay).await;
        simulate_step("academic_credentials", self.params.step_delay).await;

        let now = OffsetDateTime::now_utc();

        Ok(vec![Credential {
            id: credential_id("research", now),
            credential_type: "ResearchAffiliation".to_string(),
            issuer: "Academic Research Network".to_string(),
            issued_at: now,
            expires_at: now + Duration::days(365),
            claims: HashMap::from([
                (
                    "institution".to_string(),
                    json!(identity
                        .institution
                        .as_deref()
                        .unwrap_or("Medical Research Institute")),
                ),
                (
                    "department".to_string(),
                    json!(identity
                        .department
                        .as_deref()
                        .unwrap_or("Clinical Research")),
                ),
                ("verificationLevel".to_string(), json!("academic")),
                // IRB approval on file
                ("irb".to_string(), json!(true)),
            ]),
        }])
    }
}
