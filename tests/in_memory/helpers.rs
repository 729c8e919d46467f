//! Shared test helpers for in-memory end-to-end tests.

use foreman::account::{
    adapters::{bcrypt::BcryptCredentialHasher, memory::InMemoryAccountRepository},
    domain::AccountId,
    services::{CredentialService, RegisterAccountRequest},
};
use foreman::reporting::services::ReportingService;
use foreman::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Minimum bcrypt cost, to keep end-to-end derivations fast.
const TEST_COST: u32 = 4;

/// Credential service over the shared in-memory stores.
pub type Credentials =
    CredentialService<InMemoryAccountRepository, BcryptCredentialHasher, DefaultClock>;

/// Task lifecycle service over the shared in-memory stores.
pub type Lifecycle =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryAccountRepository, DefaultClock>;

/// Reporting service over the shared in-memory stores.
pub type Reporting = ReportingService<InMemoryAccountRepository, InMemoryTaskRepository>;

/// The three services wired over one pair of in-memory stores.
pub struct CoreServices {
    /// Registration and login.
    pub credentials: Credentials,
    /// Assignment and updates.
    pub lifecycle: Lifecycle,
    /// Aggregation listings.
    pub reporting: Reporting,
}

/// Provides freshly wired services for each test.
#[fixture]
pub fn services() -> CoreServices {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let hasher = Arc::new(BcryptCredentialHasher::with_cost(TEST_COST));
    let clock = Arc::new(DefaultClock);

    CoreServices {
        credentials: CredentialService::new(Arc::clone(&accounts), hasher, Arc::clone(&clock)),
        lifecycle: TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&accounts), clock),
        reporting: ReportingService::new(accounts, tasks),
    }
}

/// Builds a UTC midnight timestamp for the given calendar date.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

/// Registers an employee with policy-conforming defaults.
pub async fn register_employee(credentials: &Credentials, name: &str, email: &str) -> AccountId {
    credentials
        .register(RegisterAccountRequest::new(
            name,
            email,
            "Secret1!",
            "1234567890",
            "Employee",
        ))
        .await
        .expect("registration should succeed")
        .id()
}
