//! Validated display name type.

use super::AccountDomainError;
use serde::Serialize;
use std::fmt;

/// Validated human display name.
///
/// Display names may contain only ASCII letters and spaces, matching the
/// registration contract. The value is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyDisplayName`] when the value is
    /// empty, or [`AccountDomainError::InvalidDisplayName`] when it contains
    /// characters outside ASCII letters and spaces.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();

        if raw.is_empty() {
            return Err(AccountDomainError::EmptyDisplayName);
        }

        let is_valid = raw.chars().all(|c| c.is_ascii_alphabetic() || c == ' ');
        if !is_valid {
            return Err(AccountDomainError::InvalidDisplayName(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the display name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
