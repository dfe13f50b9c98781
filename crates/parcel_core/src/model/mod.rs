//! Domain model for tracked shipments.
//!
//! # Responsibility
//! - Define the canonical parcel record used by store and service layers.
//!
//! # Invariants
//! - Every persisted parcel is identified by a storage-assigned `ParcelNumber`.
//! - Deletion is a hard delete, gated on `registered` status.

pub mod parcel;
