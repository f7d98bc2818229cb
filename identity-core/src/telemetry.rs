//! Structured diagnostics for the identity core.
//!
//! The subscriber is owned by an explicit context object rather than
//! module-level state; `init` is idempotent and guarded by a flag, so wiring
//! code can call it unconditionally. The filter level can be overridden at
//! runtime via the `RUST_LOG` environment variable.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::EnvFilter;

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (development).
    Human,
    /// Newline-delimited JSON (production / log aggregation).
    Json,
}

/// Process-wide diagnostics context, created once at startup and passed to
/// whatever needs it.
pub struct Telemetry {
    initialized: AtomicBool,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    /// Installs the global tracing subscriber. Repeat calls are no-ops.
    pub fn init(&self, format: LogFormat, level: &str) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let result = match format {
            LogFormat::Human => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init(),
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .try_init(),
        };

        // another subscriber may already be installed (e.g. by a test harness)
        if let Err(error) = result {
            tracing::debug!(%error, "tracing subscriber already installed");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let telemetry = Telemetry::new();
        assert!(!telemetry.is_initialized());

        telemetry.init(LogFormat::Human, "debug");
        telemetry.init(LogFormat::Json, "info");

        assert!(telemetry.is_initialized());
    }
}
