use std::sync::Arc;

use crate::common_models::HealthcareRole;
use crate::verification::RoleVerificationMethod;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RoleVerificationProvider: Send + Sync {
    fn get_verification_method(
        &self,
        role: HealthcareRole,
    ) -> Option<Arc<dyn RoleVerificationMethod>>;
}
