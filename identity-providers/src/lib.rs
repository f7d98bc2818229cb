//! Traits and implementations for resolving wallet identities and gating
//! healthcare features behind role attestations.

pub mod attestation_store;
pub mod common_models;
pub mod key_value_storage;
pub mod verification;
pub mod wallet_resolver;
