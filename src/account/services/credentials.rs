//! Service layer for account registration and login verification.

use crate::account::{
    domain::{
        Account, AccountDomainError, AccountId, DisplayName, EmailAddress, Password, PhoneNumber,
        Role,
    },
    ports::{AccountRepository, AccountRepositoryError, CredentialHashError, CredentialHasher},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new account.
///
/// All fields arrive as raw strings; validation happens inside
/// [`CredentialService::register`], before any store access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAccountRequest {
    name: String,
    email: String,
    password: String,
    phone: String,
    role: String,
}

impl RegisterAccountRequest {
    /// Creates a registration request from raw field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: phone.into(),
            role: role.into(),
        }
    }
}

/// Identifier and role handed back to a successfully authenticated caller.
///
/// No session token is minted; the caller owns remembering the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    account_id: AccountId,
    role: Role,
}

impl AuthenticatedAccount {
    /// Returns the authenticated account identifier.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns the authenticated account role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Service-level errors for registration and login.
#[derive(Debug, Error)]
pub enum CredentialServiceError {
    /// A supplied field failed validation; the store was not touched.
    #[error(transparent)]
    Validation(#[from] AccountDomainError),

    /// An account with the given email is already registered.
    #[error("an account with email '{0}' is already registered")]
    DuplicateAccount(EmailAddress),

    /// No account matches the given email.
    #[error("account does not exist")]
    NotFound,

    /// The supplied password does not match the stored credential.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The account store or credential hasher failed.
    #[error("credential store failure: {0}")]
    Store(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl From<AccountRepositoryError> for CredentialServiceError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::DuplicateEmail(email) => Self::DuplicateAccount(email),
            other => Self::Store(Arc::new(other)),
        }
    }
}

impl From<CredentialHashError> for CredentialServiceError {
    fn from(err: CredentialHashError) -> Self {
        Self::Store(Arc::new(err))
    }
}

/// Result type for credential service operations.
pub type CredentialServiceResult<T> = Result<T, CredentialServiceError>;

/// Registration and login orchestration service.
#[derive(Clone)]
pub struct CredentialService<R, H, C>
where
    R: AccountRepository,
    H: CredentialHasher,
    C: Clock + Send + Sync,
{
    accounts: Arc<R>,
    hasher: Arc<H>,
    clock: Arc<C>,
}

impl<R, H, C> CredentialService<R, H, C>
where
    R: AccountRepository,
    H: CredentialHasher,
    C: Clock + Send + Sync,
{
    /// Creates a new credential service.
    #[must_use]
    pub const fn new(accounts: Arc<R>, hasher: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            accounts,
            hasher,
            clock,
        }
    }

    /// Registers a new account.
    ///
    /// All five fields are validated before any store access, and the
    /// email is checked for prior registration before the expensive
    /// credential derivation. The uniqueness guarantee itself lives in the
    /// store's atomic insert; the early lookup only spares the hash work
    /// and keeps duplicates the common-case answer. The password is turned
    /// into a one-way salted credential before the aggregate is built, so
    /// the plaintext never reaches persistence.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Validation`] when a field is
    /// malformed, [`CredentialServiceError::DuplicateAccount`] when the
    /// email is already registered, or [`CredentialServiceError::Store`]
    /// when the store or hasher fails.
    pub async fn register(
        &self,
        request: RegisterAccountRequest,
    ) -> CredentialServiceResult<Account> {
        let RegisterAccountRequest {
            name,
            email,
            password,
            phone,
            role,
        } = request;

        let display_name = DisplayName::new(name)?;
        let address = EmailAddress::new(email)?;
        let secret = Password::new(password)?;
        let digits = PhoneNumber::new(phone)?;
        let parsed_role =
            Role::try_from(role.as_str()).map_err(AccountDomainError::from)?;

        if self
            .accounts
            .find_by_email(address.as_str())
            .await?
            .is_some()
        {
            return Err(CredentialServiceError::DuplicateAccount(address));
        }

        let credential = self.hasher.hash(&secret).await?;
        let account = Account::new(
            display_name,
            address,
            credential,
            digits,
            parsed_role,
            &*self.clock,
        );
        self.accounts.create(&account).await?;
        Ok(account)
    }

    /// Verifies an email/password pair against the stored credential.
    ///
    /// On success the caller receives the account identifier and role.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Validation`] when either value is
    /// empty, [`CredentialServiceError::NotFound`] when no account has the
    /// email, [`CredentialServiceError::InvalidCredentials`] when the
    /// password does not match, or [`CredentialServiceError::Store`] when
    /// the store or hasher fails.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> CredentialServiceResult<AuthenticatedAccount> {
        if email.is_empty() || password.is_empty() {
            return Err(AccountDomainError::MissingCredentials.into());
        }

        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(CredentialServiceError::NotFound)?;

        let matches = self.hasher.verify(password, account.credential()).await?;
        if !matches {
            return Err(CredentialServiceError::InvalidCredentials);
        }

        Ok(AuthenticatedAccount {
            account_id: account.id(),
            role: account.role(),
        })
    }
}
