//! Policy-validated plaintext password type.

use super::AccountDomainError;
use std::fmt;

/// Minimum password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols of which a password must contain at least one.
const PASSWORD_SYMBOLS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

/// Policy-validated plaintext password, accepted only at registration.
///
/// The wrapped value is the secret itself: it is never persisted, never
/// serialized, and the `Debug` representation is redacted. The only way
/// out of this type is [`Password::as_str`], consumed by the credential
/// hasher when deriving the stored one-way credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a policy-validated password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::PasswordTooShort`] when the value is
    /// shorter than 8 characters, or
    /// [`AccountDomainError::PasswordMissingSymbol`] when it contains none
    /// of `!@#$%^&*`.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();

        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AccountDomainError::PasswordTooShort);
        }

        if !raw.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)) {
            return Err(AccountDomainError::PasswordMissingSymbol);
        }

        Ok(Self(raw))
    }

    /// Returns the raw secret.
    ///
    /// Callers must hand the value straight to a credential hasher and
    /// must not store, log, or echo it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}
