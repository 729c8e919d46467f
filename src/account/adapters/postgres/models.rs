//! Diesel row models for account persistence.

use super::schema::accounts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// Internal account identifier.
    pub id: uuid::Uuid,
    /// Human display name.
    pub display_name: String,
    /// Unique email address.
    pub email: String,
    /// One-way salted password credential.
    pub password_hash: String,
    /// Ten-digit phone number.
    pub phone: String,
    /// Account role.
    pub role: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Internal account identifier.
    pub id: uuid::Uuid,
    /// Human display name.
    pub display_name: String,
    /// Unique email address.
    pub email: String,
    /// One-way salted password credential.
    pub password_hash: String,
    /// Ten-digit phone number.
    pub phone: String,
    /// Account role.
    pub role: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
