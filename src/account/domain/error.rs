//! Error types for account domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The display name is empty.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The display name contains characters outside letters and spaces.
    #[error("display name '{0}' must contain only letters and spaces")]
    InvalidDisplayName(String),

    /// The email address is empty.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email address does not follow the `local@domain.tld` shape.
    #[error("invalid email format: '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the minimum length.
    #[error("password must be at least 8 characters")]
    PasswordTooShort,

    /// The password contains no special symbol.
    #[error("password must include at least one of !@#$%^&*")]
    PasswordMissingSymbol,

    /// The phone number is not exactly 10 digits.
    #[error("phone number must be exactly 10 digits")]
    InvalidPhoneNumber(String),

    /// The role string names neither recognised role.
    #[error("role must be either 'Reporting Officer' or 'Employee'")]
    InvalidRole(String),

    /// A login attempt supplied an empty email or password.
    #[error("email and password are required")]
    MissingCredentials,
}

/// Error returned while parsing account roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl From<ParseRoleError> for AccountDomainError {
    fn from(err: ParseRoleError) -> Self {
        Self::InvalidRole(err.0)
    }
}
