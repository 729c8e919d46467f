//! End-to-end registration and login tests.

use super::helpers::{CoreServices, services};
use foreman::account::{
    domain::Role,
    services::{CredentialServiceError, RegisterAccountRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_and_login_scenario(services: CoreServices) {
    let registered = services
        .credentials
        .register(RegisterAccountRequest::new(
            "Jane Doe",
            "jane@x.com",
            "Secret1!",
            "1234567890",
            "Employee",
        ))
        .await
        .expect("registration should succeed");

    let duplicate = services
        .credentials
        .register(RegisterAccountRequest::new(
            "Jane Doe",
            "jane@x.com",
            "Secret1!",
            "1234567890",
            "Employee",
        ))
        .await;
    assert!(matches!(
        duplicate,
        Err(CredentialServiceError::DuplicateAccount(_))
    ));

    let authenticated = services
        .credentials
        .login("jane@x.com", "Secret1!")
        .await
        .expect("login should succeed");
    assert_eq!(authenticated.account_id(), registered.id());
    assert_eq!(authenticated.role(), Role::Employee);

    let rejected = services.credentials.login("jane@x.com", "wrong").await;
    assert!(matches!(
        rejected,
        Err(CredentialServiceError::InvalidCredentials)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_distinguishes_missing_account_from_wrong_password(services: CoreServices) {
    services.credentials
        .register(RegisterAccountRequest::new(
            "Jane Doe",
            "jane@x.com",
            "Secret1!",
            "1234567890",
            "Employee",
        ))
        .await
        .expect("registration should succeed");

    let missing = services.credentials.login("nobody@x.com", "Secret1!").await;
    assert!(matches!(missing, Err(CredentialServiceError::NotFound)));

    let mismatch = services.credentials.login("jane@x.com", "Secret2!").await;
    assert!(matches!(
        mismatch,
        Err(CredentialServiceError::InvalidCredentials)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_lookup_is_case_sensitive(services: CoreServices) {
    services.credentials
        .register(RegisterAccountRequest::new(
            "Jane Doe",
            "jane@x.com",
            "Secret1!",
            "1234567890",
            "Employee",
        ))
        .await
        .expect("registration should succeed");

    let result = services.credentials.login("Jane@x.com", "Secret1!").await;
    assert!(matches!(result, Err(CredentialServiceError::NotFound)));
}
