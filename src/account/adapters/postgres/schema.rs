//! Diesel schema for account persistence.

diesel::table! {
    /// Registered account records.
    accounts (id) {
        /// Internal account identifier.
        id -> Uuid,
        /// Human display name.
        #[max_length = 100]
        display_name -> Varchar,
        /// Unique email address, stored verbatim.
        #[max_length = 254]
        email -> Varchar,
        /// One-way salted password credential.
        #[max_length = 100]
        password_hash -> Varchar,
        /// Ten-digit phone number.
        #[max_length = 10]
        phone -> Varchar,
        /// Account role (Reporting Officer or Employee).
        #[max_length = 50]
        role -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
