use std::time::Duration;

use identity_providers::wallet_resolver::model::Environment;

pub struct CoreConfig {
    pub environment: Environment,
    pub resolver_config: ResolverConfig,
    pub verification_config: VerificationConfig,
}

pub struct ResolverConfig {
    /// Cap on each async wallet lookup before the degraded path is taken.
    pub lookup_timeout: Duration,
}

pub struct VerificationConfig {
    /// Artificial latency per simulated verification step.
    pub step_delay: Duration,
    /// Issuer recorded on attestations.
    pub attestation_issuer: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            resolver_config: ResolverConfig {
                lookup_timeout: Duration::from_secs(1),
            },
            verification_config: VerificationConfig {
                step_delay: Duration::ZERO,
                attestation_issuer: "Healthcare Identity Platform".to_string(),
            },
        }
    }
}
