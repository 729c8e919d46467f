//! Account aggregate root.

use super::{AccountId, DisplayName, EmailAddress, PasswordHash, PhoneNumber, Role};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Registered account aggregate root.
///
/// Accounts are created once at registration and never updated or deleted
/// by this core; login and task operations only read them. The aggregate
/// deliberately does not implement `Serialize` — aggregation views expose
/// the public fields without the stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    display_name: DisplayName,
    email: EmailAddress,
    credential: PasswordHash,
    phone: PhoneNumber,
    role: Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAccountData {
    /// Persisted account identifier.
    pub id: AccountId,
    /// Persisted display name.
    pub display_name: DisplayName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted one-way credential.
    pub credential: PasswordHash,
    /// Persisted phone number.
    pub phone: PhoneNumber,
    /// Persisted role.
    pub role: Role,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account from validated registration values.
    ///
    /// The credential must already be derived; plaintext passwords never
    /// reach the aggregate.
    #[must_use]
    pub fn new(
        display_name: DisplayName,
        email: EmailAddress,
        credential: PasswordHash,
        phone: PhoneNumber,
        role: Role,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AccountId::new(),
            display_name,
            email,
            credential,
            phone,
            role,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            display_name: data.display_name,
            email: data.email,
            credential: data.credential,
            phone: data.phone,
            role: data.role,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored one-way credential.
    ///
    /// Used for verification and persistence only; never include it in
    /// user-facing payloads.
    #[must_use]
    pub const fn credential(&self) -> &PasswordHash {
        &self.credential
    }

    /// Returns the phone number.
    #[must_use]
    pub const fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
