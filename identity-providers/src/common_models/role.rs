use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Duration;

/// The unit of access control. Closed set; there is no role hierarchy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthcareRole {
    Patient,
    Provider,
    Researcher,
    Admin,
}

impl HealthcareRole {
    /// Attestation validity horizon for the role.
    ///
    /// Higher-privilege roles get shorter-lived attestations.
    pub fn attestation_validity(&self) -> Duration {
        match self {
            HealthcareRole::Patient | HealthcareRole::Researcher => Duration::days(365),
            HealthcareRole::Provider => Duration::days(730),
            HealthcareRole::Admin => Duration::days(180),
        }
    }
}
