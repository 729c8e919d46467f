//! Domain model for account registration and credentials.
//!
//! The account domain models registered people (reporting officers and
//! employees), their validated contact details, and the one-way password
//! credential derived at registration, while keeping all infrastructure
//! concerns outside of the domain boundary.

mod account;
mod credential;
mod email;
mod error;
mod ids;
mod name;
mod password;
mod phone;
mod role;

pub use account::{Account, PersistedAccountData};
pub use credential::PasswordHash;
pub use email::EmailAddress;
pub use error::{AccountDomainError, ParseRoleError};
pub use ids::AccountId;
pub use name::DisplayName;
pub use password::Password;
pub use phone::PhoneNumber;
pub use role::Role;
