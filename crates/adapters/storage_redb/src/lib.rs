//! # locbox-adapter-storage-redb
//!
//! Embedded persistence adapter using [redb](https://docs.rs/redb).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `locbox-app::ports::storage`
//! - Open (or create) the database file and make sure the `Locations` table exists
//! - Run every read or write as exactly one redb transaction
//!
//! redb gives the concurrency guarantees the service relies on: a single
//! writer at a time, readers on MVCC snapshots that never see a partial write
//! and are never blocked by the writer.
//!
//! ## Dependency rule
//! Depends on `locbox-app` (for port traits) and `locbox-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod database;
pub mod error;
pub mod location_repo;

pub use database::{Config, Database};
pub use error::StorageError;
pub use location_repo::RedbLocationRepository;
