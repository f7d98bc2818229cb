use serde::{Deserialize, Serialize};
use strum::Display;
use time::OffsetDateTime;

use super::{credential::Credential, role::HealthcareRole, wallet::WalletAddress};

/// A time-bounded assertion binding a wallet address to a role.
///
/// At most one attestation is current per wallet address; issuing a new one
/// supersedes the prior. Invariant: `issued_at < expires_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attestation {
    pub id: String,
    pub wallet_address: WalletAddress,
    pub role: HealthcareRole,
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub issuer: String,
    pub verification_proof: String,
    pub status: AttestationStatus,
}

impl Attestation {
    /// An attestation counts as valid only while active and unexpired.
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        self.status == AttestationStatus::Active && self.expires_at > now
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttestationStatus {
    Active,
    Revoked,
    Expired,
}

/// Lifecycle of a verification request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    NotStarted,
    Running,
    Verified,
    Rejected,
}

/// The persisted per-wallet verification cache row.
///
/// Created on successful verification and read on every permission-state
/// initialization. Treated as absent once `expires_at` has passed or the
/// referenced attestation is no longer active. Records carrying a role but no
/// attestation id are legacy entries: the role is known but untrusted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    pub status: VerificationStatus,
    pub role: HealthcareRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation_id: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub verified_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub credentials: Vec<Credential>,
}
