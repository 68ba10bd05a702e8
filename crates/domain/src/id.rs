//! Typed identifier for stored locations, backed by a random UUID.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store key of a [`Location`](crate::location::Location).
///
/// Assigned at write time and never shown to clients. The storage form is
/// the 16 raw bytes of the UUID, so the store's native ordering is the
/// byte-wise ordering of those bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(uuid::Uuid);

impl Default for LocationId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl LocationId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }

    /// Key bytes as written to the store.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Rebuild an identifier from its stored key bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Uuid::from_bytes(bytes))
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LocationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}
