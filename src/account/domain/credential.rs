//! Stored one-way password credential type.

use std::fmt;

/// One-way salted derivation of a password, as produced by a credential
/// hasher.
///
/// The wrapped value is a self-describing hash string (algorithm, cost,
/// salt, and digest); it cannot be reversed to the plaintext. `Debug`
/// output is redacted so the derived credential never lands in logs or
/// error payloads by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an already-derived credential string.
    ///
    /// Used by hasher adapters after derivation and by repository adapters
    /// when reconstructing persisted accounts.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the derived credential as a string slice.
    ///
    /// Needed by hasher adapters for verification and by repository
    /// adapters for persistence; never expose it in user-facing payloads.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordHash").field(&"<redacted>").finish()
    }
}
