//! Repository layer: the parcel store contract and its SQLite backend.
//!
//! # Responsibility
//! - Isolate SQL from service orchestration.
//! - Report "does not exist" separately from storage failures.

pub mod parcel_repo;
