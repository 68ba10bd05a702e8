//! redb implementation of [`LocationRepository`].

use std::future::Future;
use std::sync::Arc;

use redb::ReadableTable;

use locbox_app::ports::LocationRepository;
use locbox_domain::error::LocboxError;
use locbox_domain::id::LocationId;
use locbox_domain::location::Location;

use crate::database::{Database, LOCATIONS};
use crate::error::StorageError;

/// redb-backed location repository.
///
/// redb transactions block on file IO, so each one runs on tokio's blocking
/// thread pool.
#[derive(Clone)]
pub struct RedbLocationRepository {
    db: Arc<redb::Database>,
}

impl RedbLocationRepository {
    /// Create a new repository on top of an opened [`Database`].
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            db: Arc::clone(db.handle()),
        }
    }
}

fn put(db: &redb::Database, id: LocationId, location: &Location) -> Result<bool, StorageError> {
    let key: &[u8] = id.as_bytes();
    let txn = db.begin_write()?;
    let inserted = {
        let mut table = txn.open_table(LOCATIONS)?;
        if table.get(key)?.is_some() {
            false
        } else {
            table.insert(key, location.as_bytes())?;
            true
        }
    };

    if inserted {
        txn.commit()?;
    } else {
        txn.abort()?;
    }
    Ok(inserted)
}

fn scan(db: &redb::Database) -> Result<Vec<Location>, StorageError> {
    let txn = db.begin_read()?;
    let table = txn.open_table(LOCATIONS)?;

    let mut locations = Vec::new();
    for entry in table.iter()? {
        let (_, value) = entry?;
        locations.push(Location::from_slice(value.value())?);
    }
    Ok(locations)
}

impl LocationRepository for RedbLocationRepository {
    fn insert(
        &self,
        id: LocationId,
        location: Location,
    ) -> impl Future<Output = Result<bool, LocboxError>> + Send {
        let db = Arc::clone(&self.db);
        async move {
            let inserted = tokio::task::spawn_blocking(move || put(&db, id, &location))
                .await
                .map_err(StorageError::from)??;

            Ok(inserted)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Location>, LocboxError>> + Send {
        let db = Arc::clone(&self.db);
        async move {
            let locations = tokio::task::spawn_blocking(move || scan(&db))
                .await
                .map_err(StorageError::from)??;

            Ok(locations)
        }
    }
}
