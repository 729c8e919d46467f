//! `PostgreSQL` repository implementation for account persistence.

use super::{
    models::{AccountRow, NewAccountRow},
    schema::accounts,
};
use crate::account::{
    domain::{
        Account, AccountId, DisplayName, EmailAddress, PasswordHash, PersistedAccountData,
        PhoneNumber, Role,
    },
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed account repository.
///
/// Email uniqueness rides on the `idx_accounts_email` unique index, so the
/// check-then-insert race between two concurrent registrations resolves
/// inside the database.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: AccountPgPool,
}

impl PostgresAccountRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AccountPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AccountRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountRepositoryError::persistence)?
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: &Account) -> AccountRepositoryResult<()> {
        let account_id = account.id();
        let email = account.email().clone();
        let new_row = to_new_row(account);

        self.run_blocking(move |connection| {
            diesel::insert_into(accounts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        AccountRepositoryError::DuplicateEmail(email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AccountRepositoryError::DuplicateAccount(account_id)
                    }
                    _ => AccountRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::id.eq(id.into_inner()))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_email(&self, email: &str) -> AccountRepositoryResult<Option<Account>> {
        let email_value = email.to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::email.eq(&email_value))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn list_all(&self) -> AccountRepositoryResult<Vec<Account>> {
        self.run_blocking(move |connection| {
            let rows = accounts::table
                .order((accounts::created_at.asc(), accounts::id.asc()))
                .select(AccountRow::as_select())
                .load::<AccountRow>(connection)
                .map_err(AccountRepositoryError::persistence)?;
            rows.into_iter().map(row_to_account).collect()
        })
        .await
    }
}

fn to_new_row(account: &Account) -> NewAccountRow {
    NewAccountRow {
        id: account.id().into_inner(),
        display_name: account.display_name().as_str().to_owned(),
        email: account.email().as_str().to_owned(),
        password_hash: account.credential().as_str().to_owned(),
        phone: account.phone().as_str().to_owned(),
        role: account.role().as_str().to_owned(),
        created_at: account.created_at(),
        updated_at: account.updated_at(),
    }
}

fn row_to_account(row: AccountRow) -> AccountRepositoryResult<Account> {
    let AccountRow {
        id,
        display_name,
        email,
        password_hash,
        phone,
        role,
        created_at,
        updated_at,
    } = row;

    let parsed_name =
        DisplayName::new(display_name).map_err(AccountRepositoryError::invalid_persisted_data)?;
    let parsed_email =
        EmailAddress::new(email).map_err(AccountRepositoryError::invalid_persisted_data)?;
    let parsed_phone =
        PhoneNumber::new(phone).map_err(AccountRepositoryError::invalid_persisted_data)?;
    let parsed_role = Role::try_from(role.as_str())
        .map_err(AccountRepositoryError::invalid_persisted_data)?;

    let data = PersistedAccountData {
        id: AccountId::from_uuid(id),
        display_name: parsed_name,
        email: parsed_email,
        credential: PasswordHash::new(password_hash),
        phone: parsed_phone,
        role: parsed_role,
        created_at,
        updated_at,
    };
    Ok(Account::from_persisted(data))
}

fn is_email_unique_violation(info: &dyn diesel::result::DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_accounts_email")
}
