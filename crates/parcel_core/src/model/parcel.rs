//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical shipment record persisted in the `parcel` table.
//! - Map status values to and from their stored text form.
//!
//! # Invariants
//! - `number` is assigned by storage on insert and never changes afterwards.
//! - `client` and `created_at` are fixed at creation.
//! - `ParcelStatus` text mapping is lossless, including unknown values.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Storage-assigned parcel identifier.
pub type ParcelNumber = i64;

/// Identifier of the client owning a parcel.
pub type ClientId = i64;

const STATUS_REGISTERED: &str = "registered";
const STATUS_SENT: &str = "sent";
const STATUS_DELIVERED: &str = "delivered";

static CREATED_AT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\d{4}-?\d{2}-?\d{2}[Tt ]\d{2}(:?\d{2}(:?\d{2}([.,]\d+)?)?)?([Zz]|[+-]\d{2}(:?\d{2})?)?$",
    )
    .expect("valid created_at regex")
});

/// Shipment lifecycle state.
///
/// Only `Registered` takes part in write guards. Values not known to this
/// crate are kept verbatim in `Other` so they survive a read/write cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParcelStatus {
    /// Accepted but not yet handed to a carrier.
    Registered,
    /// In transit.
    Sent,
    /// Handed to the recipient.
    Delivered,
    /// Any status string this crate does not interpret.
    Other(String),
}

impl ParcelStatus {
    /// Returns the stored text form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Registered => STATUS_REGISTERED,
            Self::Sent => STATUS_SENT,
            Self::Delivered => STATUS_DELIVERED,
            Self::Other(value) => value.as_str(),
        }
    }

    /// Parses the stored text form. Never fails.
    pub fn parse(value: &str) -> Self {
        Self::from(value.to_string())
    }

    /// Next step of the `registered -> sent -> delivered` progression.
    ///
    /// Returns `None` for `Delivered` and for statuses outside the progression.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered | Self::Other(_) => None,
        }
    }

    /// Whether this is the status that permits readdressing and deletion.
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered)
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ParcelStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            STATUS_REGISTERED => Self::Registered,
            STATUS_SENT => Self::Sent,
            STATUS_DELIVERED => Self::Delivered,
            _ => Self::Other(value),
        }
    }
}

impl From<ParcelStatus> for String {
    fn from(value: ParcelStatus) -> Self {
        match value {
            ParcelStatus::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

/// Validation errors for parcel records prior to persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelValidationError {
    /// `created_at` is not an ISO-8601-like timestamp.
    InvalidCreatedAt(String),
}

impl Display for ParcelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCreatedAt(value) => {
                write!(f, "created_at `{value}` is not an ISO-8601 timestamp")
            }
        }
    }
}

impl Error for ParcelValidationError {}

/// Canonical shipment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Assigned by storage. Ignored on insert; `0` until persisted.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: ParcelStatus,
    /// Mutable only while `status` is `Registered`.
    pub address: String,
    /// ISO-8601 timestamp text, e.g. `2024-01-01T00:00:00Z`.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved parcel with explicit fields.
    pub fn new(
        client: ClientId,
        status: ParcelStatus,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            status,
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Creates an unsaved `registered` parcel stamped with the current UTC time.
    pub fn registered(client: ClientId, address: impl Into<String>) -> Self {
        Self::new(client, ParcelStatus::Registered, address, now_rfc3339())
    }

    /// Checks that `created_at` looks like an ISO-8601 date-time.
    ///
    /// Storage does not call this; `ParcelService::add_parcel` does.
    pub fn validate(&self) -> Result<(), ParcelValidationError> {
        if !CREATED_AT_RE.is_match(&self.created_at) {
            return Err(ParcelValidationError::InvalidCreatedAt(
                self.created_at.clone(),
            ));
        }
        Ok(())
    }
}

fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    let now = now.replace_nanosecond(0).unwrap_or(now);
    // Rfc3339 formatting only fails for years outside 0..=9999.
    now.format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
