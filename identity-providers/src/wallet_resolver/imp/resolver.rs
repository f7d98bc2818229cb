use std::sync::Arc;
use std::time::Duration;

use crate::common_models::wallet::WalletAddress;
use crate::wallet_resolver::{
    imp::strategies::default_strategies,
    model::{Environment, PartialIdentity},
    EmbeddedWalletLookup, GatewayTokenLookup, ResolutionStrategy,
};

/// Deterministic placeholder substituted when every strategy fails in a
/// non-production environment. Must never activate in production.
pub const DEVELOPMENT_FALLBACK_ADDRESS: &str = "5DAAnV9zFqyhRcjgMJiTzSxw3YkWW5BbNnGPZVmkyQhS";

pub struct Params {
    pub environment: Environment,
    /// Cap on each async lookup; past it the degraded path is taken instead
    /// of waiting indefinitely.
    pub lookup_timeout: Duration,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            lookup_timeout: Duration::from_secs(1),
        }
    }
}

/// Multi-strategy wallet-address resolver.
///
/// Probes the synchronous strategy cascade first, then (in the async variant)
/// the embedded-wallet and gateway-token collaborators, then the development
/// fallback. The winning candidate still has to pass
/// [`WalletAddress::format`].
pub struct WalletResolver {
    strategies: Vec<Arc<dyn ResolutionStrategy>>,
    embedded_wallet: Option<Arc<dyn EmbeddedWalletLookup>>,
    gateway_token: Option<Arc<dyn GatewayTokenLookup>>,
    params: Params,
}

impl WalletResolver {
    pub fn new(
        embedded_wallet: Option<Arc<dyn EmbeddedWalletLookup>>,
        gateway_token: Option<Arc<dyn GatewayTokenLookup>>,
        params: Params,
    ) -> Self {
        Self {
            strategies: default_strategies(),
            embedded_wallet,
            gateway_token,
            params,
        }
    }

    /// Synchronous resolution over the strategy cascade only.
    pub fn resolve(&self, identity: &PartialIdentity) -> Option<WalletAddress> {
        let candidate = self
            .probe_strategies(identity)
            .or_else(|| self.development_fallback(identity));

        self.format_candidate(candidate)
    }

    /// Full resolution: strategy cascade, then the async collaborators in
    /// order (they can disagree, so order matters), then the fallback.
    pub async fn resolve_with_lookups(&self, identity: &PartialIdentity) -> Option<WalletAddress> {
        let candidate = match self.probe_strategies(identity) {
            Some(candidate) => Some(candidate),
            None => match self.probe_embedded_wallet(identity).await {
                Some(candidate) => Some(candidate),
                None => self.probe_gateway_token(identity).await,
            },
        };

        let candidate = candidate.or_else(|| self.development_fallback(identity));

        self.format_candidate(candidate)
    }

    fn probe_strategies(&self, identity: &PartialIdentity) -> Option<String> {
        for strategy in &self.strategies {
            if let Some(candidate) = strategy.attempt(identity) {
                tracing::debug!(strategy = strategy.name(), "wallet candidate found");
                return Some(candidate);
            }
        }

        tracing::debug!("no synchronous strategy produced a wallet candidate");
        None
    }

    async fn probe_embedded_wallet(&self, identity: &PartialIdentity) -> Option<String> {
        let lookup = self.embedded_wallet.as_ref()?;

        let info =
            tokio::time::timeout(self.params.lookup_timeout, lookup.embedded_wallet_info(identity))
                .await;

        match info {
            Ok(Ok(info)) => info.data.and_then(|data| data.public_key),
            Ok(Err(error)) => {
                tracing::warn!(%error, "embedded wallet lookup failed");
                None
            }
            Err(_) => {
                tracing::warn!("embedded wallet lookup timed out");
                None
            }
        }
    }

    async fn probe_gateway_token(&self, identity: &PartialIdentity) -> Option<String> {
        let lookup = self.gateway_token.as_ref()?;

        let token =
            tokio::time::timeout(self.params.lookup_timeout, lookup.gateway_token(identity)).await;

        match token {
            Ok(Ok(token)) => token.and_then(|token| token.wallet),
            Ok(Err(error)) => {
                tracing::warn!(%error, "gateway token lookup failed");
                None
            }
            Err(_) => {
                tracing::warn!("gateway token lookup timed out");
                None
            }
        }
    }

    fn development_fallback(&self, identity: &PartialIdentity) -> Option<String> {
        if self.params.environment != Environment::Development {
            return None;
        }

        tracing::debug!(
            sub = identity.sub.as_deref().unwrap_or("unknown"),
            "using development fallback wallet address"
        );
        Some(DEVELOPMENT_FALLBACK_ADDRESS.to_string())
    }

    fn format_candidate(&self, candidate: Option<String>) -> Option<WalletAddress> {
        let candidate = candidate?;

        match WalletAddress::format(&candidate) {
            Some(address) => Some(address),
            None => {
                tracing::warn!(
                    length = candidate.trim().len(),
                    "wallet candidate rejected by shape check"
                );
                None
            }
        }
    }
}
