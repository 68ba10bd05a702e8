//! Storage-specific error type wrapping redb errors.

use locbox_domain::error::LocboxError;

/// Errors originating from the redb storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database file could not be opened or created.
    #[error("database error")]
    Database(#[from] redb::DatabaseError),

    /// A transaction could not be started.
    #[error("transaction error")]
    Transaction(#[from] redb::TransactionError),

    /// The `Locations` table could not be opened.
    #[error("table error")]
    Table(#[from] redb::TableError),

    /// Reading or writing a record failed.
    #[error("storage error")]
    Storage(#[from] redb::StorageError),

    /// A write transaction failed to commit.
    #[error("commit error")]
    Commit(#[from] redb::CommitError),

    /// A stored value is not a valid location document.
    #[error("corrupt location record")]
    Corrupt(#[from] locbox_domain::error::ValidationError),

    /// The blocking task running the transaction panicked or was cancelled.
    #[error("storage task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl From<StorageError> for LocboxError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_box_into_storage_variant() {
        let err: LocboxError = StorageError::from(redb::StorageError::Corrupted(
            "bad page".to_string(),
        ))
        .into();
        assert!(matches!(err, LocboxError::Storage(_)));
    }
}
