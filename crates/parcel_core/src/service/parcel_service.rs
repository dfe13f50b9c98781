//! Parcel use-case service.
//!
//! # Responsibility
//! - Offer tracking use-cases (register, list, advance, readdress, delete).
//! - Delegate every read and write to a `ParcelStore` implementation.
//!
//! # Invariants
//! - Guarded store semantics pass through unchanged: readdressing or deleting
//!   a non-`registered` parcel is a silent no-op here as well.
//! - Log events carry identifiers and statuses only, never address text.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelStore, RepoResult};
use log::{debug, info};

/// Use-case wrapper around a parcel store.
pub struct ParcelService<S: ParcelStore> {
    store: S,
}

impl<S: ParcelStore> ParcelService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new parcel for `client` and returns it with its number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let mut parcel = Parcel::registered(client, address);
        parcel.number = self.store.add(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, client
        );
        Ok(parcel)
    }

    /// Stores a caller-built parcel after checking its timestamp.
    ///
    /// Fails with `RepoError::Validation` without touching storage when
    /// `created_at` is malformed.
    pub fn add_parcel(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        parcel.validate()?;
        let number = self.store.add(parcel)?;
        info!(
            "event=parcel_add module=service status=ok number={} client={}",
            number, parcel.client
        );
        Ok(number)
    }

    /// Gets one parcel; fails with `RepoError::NotFound` when absent.
    pub fn parcel(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.store.get(number)
    }

    /// Lists a client's parcels ordered by number.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let mut parcels = self.store.get_by_client(client)?;
        parcels.sort_by_key(|parcel| parcel.number);
        debug!(
            "event=parcel_list module=service status=ok client={} count={}",
            client,
            parcels.len()
        );
        Ok(parcels)
    }

    /// Moves a parcel one step along `registered -> sent -> delivered`.
    ///
    /// Returns the new status, or `None` without writing when the parcel is
    /// already at the end of the progression.
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
        let parcel = self.store.get(number)?;
        let Some(next) = parcel.status.next() else {
            info!(
                "event=parcel_next_status module=service status=skipped number={} current={}",
                number, parcel.status
            );
            return Ok(None);
        };

        self.store.set_status(number, &next)?;
        info!(
            "event=parcel_next_status module=service status=ok number={} from={} to={}",
            number, parcel.status, next
        );
        Ok(Some(next))
    }

    /// Changes the delivery address; a no-op unless the parcel is `registered`.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.store.set_address(number, address)?;
        info!("event=parcel_change_address module=service status=ok number={number}");
        Ok(())
    }

    /// Deletes the parcel; a no-op unless it is `registered`.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.store.delete(number)?;
        info!("event=parcel_delete module=service status=ok number={number}");
        Ok(())
    }
}
