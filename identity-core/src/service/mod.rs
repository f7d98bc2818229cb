pub mod error;
pub mod permissions_service;
pub mod verification_service;
pub mod wallet_service;
