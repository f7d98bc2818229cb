//! Wallet-address resolution from heterogeneous third-party user objects.
//!
//! The upstream identity provider guarantees no fixed schema for its user
//! object, so resolution probes an ordered list of strategies until one
//! produces a candidate. Resolution never throws: any internal failure
//! degrades to `None` plus a logged diagnostic.

use crate::wallet_resolver::error::ResolutionError;
use crate::wallet_resolver::model::{EmbeddedWalletInfo, GatewayToken, PartialIdentity};

pub mod error;
pub mod imp;
pub mod model;

/// One probe in the fixed-priority cascade over a [`PartialIdentity`].
///
/// Strategies are pure field lookups; the first non-empty candidate wins.
pub trait ResolutionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn attempt(&self, identity: &PartialIdentity) -> Option<String>;
}

/// Best-effort lookup of the provider-managed embedded wallet.
///
/// Errors are swallowed and logged by the resolver, never surfaced.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait EmbeddedWalletLookup: Send + Sync {
    async fn embedded_wallet_info(
        &self,
        identity: &PartialIdentity,
    ) -> Result<EmbeddedWalletInfo, ResolutionError>;
}

/// Best-effort gateway-token lookup; same contract as [`EmbeddedWalletLookup`].
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait GatewayTokenLookup: Send + Sync {
    async fn gateway_token(
        &self,
        identity: &PartialIdentity,
    ) -> Result<Option<GatewayToken>, ResolutionError>;
}
