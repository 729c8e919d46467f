//! Validated email address type.

use super::AccountDomainError;
use serde::Serialize;
use std::fmt;

/// Validated email address in `local@domain.tld` shape.
///
/// The value is stored verbatim: no trimming and no case folding, so
/// lookups are case-sensitive exact matches against the stored form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The accepted shape is a non-empty local part, a single `@`, and a
    /// domain containing at least one dot with non-empty segments either
    /// side of the last dot. Whitespace is rejected anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyEmail`] when the value is empty,
    /// or [`AccountDomainError::InvalidEmail`] when the shape is malformed.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();

        if raw.is_empty() {
            return Err(AccountDomainError::EmptyEmail);
        }

        if !has_valid_shape(&raw) {
            return Err(AccountDomainError::InvalidEmail(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn has_valid_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with non-empty segments either side of the
    // last one, e.g. `example.com` or `mail.example.co`.
    domain
        .rsplit_once('.')
        .is_some_and(|(head, tld)| !head.is_empty() && !tld.is_empty())
}
