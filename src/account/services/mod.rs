//! Application services for account registration and login.

mod credentials;

pub use credentials::{
    AuthenticatedAccount, CredentialService, CredentialServiceError, CredentialServiceResult,
    RegisterAccountRequest,
};
