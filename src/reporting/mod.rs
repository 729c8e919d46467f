//! Read-only aggregation across accounts and tasks for Foreman.
//!
//! The reporting module composes the two repositories into the listings
//! the supervision screens need: every account with its task count, an
//! owner's task roster, and single-task detail — each joined with the
//! owner's display name and never exposing the stored credential.
//!
//! - Read-model types in [`views`]
//! - Orchestration services in [`services`]

pub mod services;
pub mod views;

#[cfg(test)]
mod tests;
