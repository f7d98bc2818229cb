pub mod attestation;
pub mod credential;
pub mod macros;
pub mod role;
pub mod wallet;

pub use attestation::{Attestation, AttestationStatus, VerificationRecord, VerificationStatus};
pub use credential::Credential;
pub use role::HealthcareRole;
pub use wallet::WalletAddress;
