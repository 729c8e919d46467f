//! Account registration and credential verification for Foreman.
//!
//! This module covers the account half of the core: registering reporting
//! officers and employees with validated contact details, deriving one-way
//! password credentials, and verifying credentials at login. Plaintext
//! passwords never reach persistence, log output, or error payloads. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
