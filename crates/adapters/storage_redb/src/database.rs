//! Database file setup and `Locations` table creation.

use std::path::PathBuf;
use std::sync::Arc;

use redb::TableDefinition;
use redb::backends::InMemoryBackend;

use crate::error::StorageError;

/// The single collection: location key bytes to document bytes.
pub(crate) const LOCATIONS: TableDefinition<&[u8], &[u8]> = TableDefinition::new("Locations");

/// Configuration for the redb storage adapter.
pub struct Config {
    /// Path of the database file; created if missing.
    pub path: PathBuf,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Opens or creates the file and creates the `Locations` table if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be opened (missing
    /// directory, permissions, lock held by another process, corrupt file)
    /// or the table cannot be created.
    pub fn build(self) -> Result<Database, StorageError> {
        let db = redb::Database::create(&self.path)?;
        tracing::debug!(path = %self.path.display(), "database file opened");
        Database::initialize(db)
    }
}

/// Holds the redb handle shared by repositories.
///
/// The file is closed when the last clone of the inner handle is dropped.
pub struct Database {
    inner: Arc<redb::Database>,
}

impl Database {
    /// Open a database that lives only in memory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the table cannot be created.
    pub fn in_memory() -> Result<Self, StorageError> {
        let db = redb::Builder::new().create_with_backend(InMemoryBackend::new())?;
        Self::initialize(db)
    }

    fn initialize(db: redb::Database) -> Result<Self, StorageError> {
        let txn = db.begin_write()?;
        txn.open_table(LOCATIONS)?;
        txn.commit()?;

        Ok(Self {
            inner: Arc::new(db),
        })
    }

    /// Borrow the shared redb handle.
    #[must_use]
    pub fn handle(&self) -> &Arc<redb::Database> {
        &self.inner
    }
}
