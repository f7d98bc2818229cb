use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::common_models::{Credential, HealthcareRole};

/// Outcome of a role verification request.
///
/// Rejections always carry `role: None` and an empty credential list; a
/// verified result always references a durably persisted attestation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub verified: bool,
    pub role: Option<HealthcareRole>,
    pub credentials: Vec<Credential>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation_id: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}

impl VerificationResult {
    pub fn rejected() -> Self {
        Self {
            verified: false,
            role: None,
            credentials: vec![],
            attestation_id: None,
            expires_at: None,
        }
    }
}

/// Caller-supplied identity claims feeding the role checks.
///
/// All fields are optional; pipelines substitute role-appropriate defaults
/// for anything missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityData {
    pub specialty: Option<String>,
    pub organization: Option<String>,
    pub position: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
}
