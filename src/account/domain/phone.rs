//! Validated phone number type.

use super::AccountDomainError;
use serde::Serialize;
use std::fmt;

/// Number of digits a phone number must carry.
const PHONE_DIGITS: usize = 10;

/// Validated ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a validated phone number.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidPhoneNumber`] when the value is
    /// not exactly 10 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();

        let is_valid = raw.len() == PHONE_DIGITS && raw.chars().all(|c| c.is_ascii_digit());
        if !is_valid {
            return Err(AccountDomainError::InvalidPhoneNumber(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
