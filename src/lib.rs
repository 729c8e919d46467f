//! Foreman: work assignment and appraisal tracking.
//!
//! This crate provides the core functionality for a single organisation's
//! work supervision system: reporting officers and employees register and
//! authenticate, reporting officers assign tasks, and each task is tracked
//! through its progress, report submission, review, and rating.
//!
//! # Architecture
//!
//! Foreman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, hashing)
//!
//! # Modules
//!
//! - [`account`]: Registration, credential storage, and login verification
//! - [`task`]: Task assignment and lifecycle tracking
//! - [`reporting`]: Read-only aggregation across accounts and tasks

pub mod account;
pub mod reporting;
pub mod task;
