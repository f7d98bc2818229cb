use identity_providers::common_models::HealthcareRole;

/// A named capability requiring membership in a fixed set of roles.
///
/// Read-only reference data; not user-mutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenGatedFeature {
    pub id: &'static str,
    pub name: &'static str,
    pub required_roles: &'static [HealthcareRole],
    pub description: &'static str,
}

pub const TOKEN_GATED_FEATURES: &[TokenGatedFeature] = &[
    TokenGatedFeature {
        id: "medical_records_view",
        name: "View Medical Records",
        required_roles: &[
            HealthcareRole::Patient,
            HealthcareRole::Provider,
            HealthcareRole::Admin,
        ],
        description: "Access to view medical records",
    },
    TokenGatedFeature {
        id: "medical_records_edit",
        name: "Edit Medical Records",
        required_roles: &[HealthcareRole::Provider, HealthcareRole::Admin],
        description: "Ability to modify medical records",
    },
    TokenGatedFeature {
        id: "provider_management",
        name: "Provider Management",
        required_roles: &[HealthcareRole::Admin],
        description: "Manage healthcare providers and their credentials",
    },
    TokenGatedFeature {
        id: "research_data_access",
        name: "Research Data Access",
        required_roles: &[HealthcareRole::Researcher, HealthcareRole::Admin],
        description: "Access to anonymized research datasets",
    },
    TokenGatedFeature {
        id: "user_management",
        name: "User Management",
        required_roles: &[HealthcareRole::Admin],
        description: "Manage user accounts and permissions",
    },
    TokenGatedFeature {
        id: "patient_data_view",
        name: "Patient Data Viewing",
        required_roles: &[
            HealthcareRole::Patient,
            HealthcareRole::Provider,
            HealthcareRole::Admin,
        ],
        description: "View patient medical data",
    },
    TokenGatedFeature {
        id: "patient_data_edit",
        name: "Patient Data Editing",
        required_roles: &[HealthcareRole::Provider, HealthcareRole::Admin],
        description: "Edit patient medical data",
    },
];

pub fn find_feature(feature_id: &str) -> Option<&'static TokenGatedFeature> {
    TOKEN_GATED_FEATURES
        .iter()
        .find(|feature| feature.id == feature_id)
}
