//! A service for resolving the active wallet address from an authenticated
//! identity.

use identity_providers::common_models::WalletAddress;
use identity_providers::wallet_resolver::{imp::resolver::WalletResolver, model::PartialIdentity};

pub struct WalletService {
    resolver: WalletResolver,
}

impl WalletService {
    pub fn new(resolver: WalletResolver) -> Self {
        Self { resolver }
    }

    /// Synchronous resolution over the known field shapes only.
    pub fn resolve(&self, identity: &PartialIdentity) -> Option<WalletAddress> {
        self.resolver.resolve(identity)
    }

    /// Full resolution including the best-effort async collaborators.
    pub async fn resolve_with_lookups(&self, identity: &PartialIdentity) -> Option<WalletAddress> {
        self.resolver.resolve_with_lookups(identity).await
    }
}
