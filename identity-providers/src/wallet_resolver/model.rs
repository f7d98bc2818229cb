use serde::{Deserialize, Serialize};

/// Structural projection of the third-party authenticated user object.
///
/// The upstream provider ships no stable schema, so every field ever observed
/// to carry a wallet is enumerated here as optional. An adapter at the auth
/// boundary fills in whatever the session object actually contains; internal
/// code never touches the raw blob.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialIdentity {
    /// Stable subject id assigned by the identity provider.
    pub sub: Option<String>,
    pub wallet: Option<String>,
    pub wallet_address: Option<String>,
    /// Legacy snake_case variant of `walletAddress`.
    #[serde(rename = "wallet_address")]
    pub legacy_wallet_address: Option<String>,
    #[serde(rename = "account_address")]
    pub account_address: Option<String>,
    #[serde(rename = "blockchain_accounts")]
    pub blockchain_accounts: Option<BlockchainAccounts>,
    pub identity: Option<LinkedIdentity>,
    pub wallets: Option<Vec<WalletEntry>>,
}

/// Per-chain account map; solana is preferred over ethereum.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockchainAccounts {
    pub solana: Option<ChainAccount>,
    pub ethereum: Option<ChainAccount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainAccount {
    pub address: Option<String>,
}

/// Nested identity sub-object some provider versions return.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedIdentity {
    #[serde(rename = "blockchain_accounts")]
    pub blockchain_accounts: Option<BlockchainAccounts>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletEntry {
    pub address: Option<String>,
}

/// Response shape of the embedded-wallet info collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddedWalletInfo {
    pub data: Option<EmbeddedWalletData>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbeddedWalletData {
    pub public_key: Option<String>,
}

/// Response shape of the gateway-token collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayToken {
    pub wallet: Option<String>,
}

/// Build-mode switch gating the development-only placeholder address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Environment {
    Production,
    Development,
}
