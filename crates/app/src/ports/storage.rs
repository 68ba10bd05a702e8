//! Storage port — repository trait for persisting locations.

use std::future::Future;

use locbox_domain::error::LocboxError;
use locbox_domain::id::LocationId;
use locbox_domain::location::Location;

/// Repository for the `Locations` collection.
///
/// Each call is one store transaction: a write is fully applied or not at
/// all, and a scan reads a single consistent snapshot.
pub trait LocationRepository {
    /// Store `location` under `id`.
    ///
    /// Returns `Ok(false)` without writing anything when `id` is already
    /// taken, so callers can pick another key.
    fn insert(
        &self,
        id: LocationId,
        location: Location,
    ) -> impl Future<Output = Result<bool, LocboxError>> + Send;

    /// Every stored location, in the store's native key order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Location>, LocboxError>> + Send;
}
