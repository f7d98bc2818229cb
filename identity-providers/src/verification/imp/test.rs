use std::{collections::HashMap, sync::Arc};

use serde_json::json;
use time::Duration;

use crate::common_models::{HealthcareRole, WalletAddress};
use crate::verification::{
    imp::{
        admin::AdminVerification, medical_provider::MedicalProviderVerification,
        patient::PatientVerification, provider::RoleVerificationProviderImpl,
        researcher::ResearcherVerification, Params,
    },
    model::IdentityData,
    provider::RoleVerificationProvider,
    RoleVerificationMethod,
};

fn wallet() -> WalletAddress {
    WalletAddress::format("5DAAnV9zFqyhRcjgMJiTzSxw3YkWW5BbNnGPZVmkyQhS").unwrap()
}

#[tokio::test]
async fn test_patient_pipeline_issues_basic_identity_credential() {
    let method = PatientVerification::new(Params::default());
    assert_eq!(HealthcareRole::Patient, method.role());

    let credentials = method
        .run_checks(&wallet(), &IdentityData::default())
        .await
        .unwrap();

    assert_eq!(1, credentials.len());
    let credential = &credentials[0];
    assert_eq!("PatientIdentity", credential.credential_type);
    assert_eq!("Healthcare Identity Platform", credential.issuer);
    assert!(credential.id.starts_with("patient-"));
    assert_eq!(Some(&json!("basic")), credential.claims.get("verificationType"));
    assert_eq!(
        Duration::days(365),
        credential.expires_at - credential.issued_at
    );
}

#[tokio::test]
async fn test_provider_pipeline_issues_license_and_affiliation() {
    let method = MedicalProviderVerification::new(Params::default());

    let credentials = method
        .run_checks(
            &wallet(),
            &IdentityData {
                specialty: Some("Cardiology".to_string()),
                organization: Some("Mercy Hospital".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(2, credentials.len());

    let license = &credentials[0];
    assert_eq!("MedicalLicense", license.credential_type);
    assert_eq!(Some(&json!("Cardiology")), license.claims.get("specialty"));
    assert_eq!(
        Duration::days(730),
        license.expires_at - license.issued_at
    );

    let license_number = license
        .claims
        .get("licenseNumber")
        .and_then(|v| v.as_str())
        .expect("license number claim");
    assert!(license_number.starts_with("ML"));
    assert_eq!(8, license_number.len());
    assert!(license_number[2..].chars().all(|c| c.is_ascii_digit()));

    let affiliation = &credentials[1];
    assert_eq!("InstitutionalAffiliation", affiliation.credential_type);
    assert_eq!(
        Some(&json!("Mercy Hospital")),
        affiliation.claims.get("institutionName")
    );
    // defaults fill in anything the caller left out
    assert_eq!(Some(&json!("Physician")), affiliation.claims.get("position"));
    assert_eq!(
        Duration::days(365),
        affiliation.expires_at - affiliation.issued_at
    );
}

#[tokio::test]
async fn test_researcher_pipeline_issues_affiliation_with_irb_claim() {
    let method = ResearcherVerification::new(Params::default());

    let credentials = method
        .run_checks(&wallet(), &IdentityData::default())
        .await
        .unwrap();

    assert_eq!(1, credentials.len());
    let credential = &credentials[0];
    assert_eq!("ResearchAffiliation", credential.credential_type);
    assert_eq!(Some(&json!(true)), credential.claims.get("irb"));
    assert_eq!(
        Some(&json!("Medical Research Institute")),
        credential.claims.get("institution")
    );
}

#[tokio::test]
async fn test_admin_pipeline_issues_short_lived_credential() {
    let method = AdminVerification::new(Params::default());

    let credentials = method
        .run_checks(&wallet(), &IdentityData::default())
        .await
        .unwrap();

    assert_eq!(1, credentials.len());
    let credential = &credentials[0];
    assert_eq!("SystemAdministrator", credential.credential_type);
    assert_eq!(
        Some(&json!(true)),
        credential.claims.get("multiFactorVerified")
    );
    assert_eq!(
        Duration::days(180),
        credential.expires_at - credential.issued_at
    );
}

#[test]
fn test_provider_registry_lookup() {
    let registry = RoleVerificationProviderImpl::new(HashMap::from([(
        HealthcareRole::Patient,
        Arc::new(PatientVerification::new(Params::default())) as _,
    )]));

    assert!(registry
        .get_verification_method(HealthcareRole::Patient)
        .is_some());
    assert!(registry
        .get_verification_method(HealthcareRole::Admin)
        .is_none());
}
