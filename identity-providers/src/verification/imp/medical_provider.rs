use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::common_models::{Credential, HealthcareRole, WalletAddress};
use crate::verification::{
    error::VerificationError,
    imp::{credential_id, rfc3339, simulate_step, Params},
    model::IdentityData,
    RoleVerificationMethod,
};

/// Provider verification: license check plus institutional affiliation.
/// Stands in for medical board and hospital directory lookups.
pub struct MedicalProviderVerification {
    params: Params,
}

impl MedicalProviderVerification {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn license_number() -> String {
        // simulated registry assignment, ML + 6 digits
        let digits = 100_000 + (Uuid::new_v4().as_u128() % 900_000) as u32;
        format!("ML{digits}")
    }
}

#[async_trait]
impl RoleVerificationMethod for MedicalProviderVerification {
    fn role(&self) -> HealthcareRole {
        HealthcareRole::Provider
    }

    async fn run_checks(
        &self,
        _wallet: &WalletAddress,
        identity: &IdentityData,
    ) -> Result<Vec<Credential>, VerificationError> {
        simulate_step("license_check", self.params.step_delay).await;
        simulate_step("institutional_affiliation", self.params.step_delay).await;

        let now = OffsetDateTime::now_utc();

        let license = Credential {
            id: credential_id("license", now),
            credential_type: "MedicalLicense".to_string(),
            issuer: "Medical Licensing Board".to_string(),
            issued_at: now,
            expires_at: now + Duration::days(730),
            claims: HashMap::from([
                ("licenseNumber".to_string(), json!(Self::license_number())),
                (
                    "specialty".to_string(),
                    json!(identity
                        .specialty
                        .as_deref()
                        .unwrap_or("General Medicine")),
                ),
                ("verificationLevel".to_string(), json!("enhanced")),
            ]),
        };

        // the affiliation credential is shorter-lived than the license
        let affiliation = Credential {
            id: credential_id("institution", now),
            credential_type: "InstitutionalAffiliation".to_string(),
            issuer: "Healthcare Verification Network".to_string(),
            issued_at: now,
            expires_at: now + Duration::days(365),
            claims: HashMap::from([
                (
                    "institutionName".to_string(),
                    json!(identity
                        .organization
                        .as_deref()
                        .unwrap_or("General Hospital")),
                ),
                (
                    "position".to_string(),
                    json!(identity.position.as_deref().unwrap_or("Physician")),
                ),
                ("verifiedAt".to_string(), json!(rfc3339(now))),
            ]),
        };

        Ok(vec![license, affiliation])
    }
}
