use serde::{Deserialize, Serialize};

use super::macros::{impl_display, impl_into};

/// Shortest accepted base58-style address.
pub const MIN_ADDRESS_LENGTH: usize = 32;
/// Longest accepted base58-style address.
pub const MAX_ADDRESS_LENGTH: usize = 44;

/// The stable identifier all permission state is keyed by.
///
/// Addresses are only shape-checked (trimmed, length within
/// [`MIN_ADDRESS_LENGTH`]..=[`MAX_ADDRESS_LENGTH`]); no checksum or on-chain
/// validation is performed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);
impl_display!(WalletAddress);
impl_into!(WalletAddress; String);

impl WalletAddress {
    /// Cleans up and validates a candidate address string.
    ///
    /// Returns `None` for anything outside the accepted length window.
    pub fn format(candidate: &str) -> Option<Self> {
        let formatted = candidate.trim();

        if (MIN_ADDRESS_LENGTH..=MAX_ADDRESS_LENGTH).contains(&formatted.len()) {
            Some(Self(formatted.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
