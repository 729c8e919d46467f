//! Unit tests for the account module.
//!
//! Tests are organised by layer: domain value validation and aggregate
//! construction, then service orchestration over the in-memory adapter.
