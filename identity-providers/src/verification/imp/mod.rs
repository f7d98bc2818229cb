use std::time::Duration;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub mod admin;
pub mod medical_provider;
pub mod patient;
pub mod provider;
pub mod researcher;

#[cfg(test)]
mod test;

/// Per-pipeline tuning; the delay stands in for the latency of the real
/// verification call each step simulates.
#[derive(Clone, Debug, Default)]
pub struct Params {
    pub step_delay: Duration,
}

/// Executes one simulated verification step.
pub(crate) async fn simulate_step(step: &'static str, delay: Duration) {
    tracing::debug!(step, "running verification step");

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub(crate) fn credential_id(prefix: &str, now: OffsetDateTime) -> String {
    format!("{prefix}-{}", unix_millis(now))
}

pub(crate) fn unix_millis(now: OffsetDateTime) -> i128 {
    now.unix_timestamp_nanos() / 1_000_000
}

pub(crate) fn rfc3339(timestamp: OffsetDateTime) -> String {
    timestamp.format(&Rfc3339).unwrap_or_default()
}
