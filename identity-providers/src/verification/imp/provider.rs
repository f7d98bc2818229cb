use std::{collections::HashMap, sync::Arc};

use crate::common_models::HealthcareRole;
use crate::verification::{provider::RoleVerificationProvider, RoleVerificationMethod};

pub struct RoleVerificationProviderImpl {
    verification_methods: HashMap<HealthcareRole, Arc<dyn RoleVerificationMethod>>,
}

impl RoleVerificationProviderImpl {
    pub fn new(
        verification_methods: HashMap<HealthcareRole, Arc<dyn RoleVerificationMethod>>,
    ) -> Self {
        Self {
            verification_methods,
        }
    }
}

impl RoleVerificationProvider for RoleVerificationProviderImpl {
    fn get_verification_method(
        &self,
        role: HealthcareRole,
    ) -> Option<Arc<dyn RoleVerificationMethod>> {
        self.verification_methods.get(&role).cloned()
    }
}
