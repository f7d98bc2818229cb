use std::sync::Arc;

use crate::wallet_resolver::{
    model::{BlockchainAccounts, PartialIdentity},
    ResolutionStrategy,
};

/// The fixed-priority cascade, highest priority first.
pub fn default_strategies() -> Vec<Arc<dyn ResolutionStrategy>> {
    vec![
        Arc::new(DirectFieldStrategy),
        Arc::new(BlockchainAccountsStrategy),
        Arc::new(LinkedIdentityStrategy),
        Arc::new(LegacyFieldStrategy),
        Arc::new(WalletListStrategy),
    ]
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

fn chain_account_address(accounts: &BlockchainAccounts) -> Option<String> {
    // solana preferred over ethereum
    accounts
        .solana
        .as_ref()
        .and_then(|account| non_empty(&account.address))
        .or_else(|| {
            accounts
                .ethereum
                .as_ref()
                .and_then(|account| non_empty(&account.address))
        })
}

/// Top-level `wallet` / `walletAddress` fields.
pub struct DirectFieldStrategy;

impl ResolutionStrategy for DirectFieldStrategy {
    fn name(&self) -> &'static str {
        "direct_field"
    }

    fn attempt(&self, identity: &PartialIdentity) -> Option<String> {
        non_empty(&identity.wallet).or_else(|| non_empty(&identity.wallet_address))
    }
}

/// Top-level blockchain-account map keyed by chain name.
pub struct BlockchainAccountsStrategy;

impl ResolutionStrategy for BlockchainAccountsStrategy {
    fn name(&self) -> &'static str {
        "blockchain_accounts"
    }

    fn attempt(&self, identity: &PartialIdentity) -> Option<String> {
        identity
            .blockchain_accounts
            .as_ref()
            .and_then(chain_account_address)
    }
}

/// Blockchain accounts nested under the `identity` sub-object.
pub struct LinkedIdentityStrategy;

impl ResolutionStrategy for LinkedIdentityStrategy {
    fn name(&self) -> &'static str {
        "linked_identity"
    }

    fn attempt(&self, identity: &PartialIdentity) -> Option<String> {
        identity
            .identity
            .as_ref()
            .and_then(|linked| linked.blockchain_accounts.as_ref())
            .and_then(chain_account_address)
    }
}

/// Legacy `wallet_address` / `account_address` field names.
pub struct LegacyFieldStrategy;

impl ResolutionStrategy for LegacyFieldStrategy {
    fn name(&self) -> &'static str {
        "legacy_field"
    }

    fn attempt(&self, identity: &PartialIdentity) -> Option<String> {
        non_empty(&identity.legacy_wallet_address)
            .or_else(|| non_empty(&identity.account_address))
    }
}

/// First entry of a generic wallet list, if present.
pub struct WalletListStrategy;

impl ResolutionStrategy for WalletListStrategy {
    fn name(&self) -> &'static str {
        "wallet_list"
    }

    fn attempt(&self, identity: &PartialIdentity) -> Option<String> {
        identity
            .wallets
            .as_ref()
            .and_then(|wallets| wallets.first())
            .and_then(|entry| non_empty(&entry.address))
    }
}
