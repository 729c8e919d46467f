//! Task assignment and lifecycle tracking for Foreman.
//!
//! This module covers the task half of the core: reporting officers assign
//! tasks to existing accounts, and each task is tracked through its
//! progress, report submission, review text, rating, and actual submission
//! date. Updates are partial, with one deliberate exception: omitting the
//! actual submission date clears it. The module follows hexagonal
//! architecture:
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
