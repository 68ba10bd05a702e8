//! Location service — use-cases for recording and listing locations.

use locbox_domain::error::LocboxError;
use locbox_domain::id::LocationId;
use locbox_domain::location::Location;

use crate::ports::LocationRepository;

/// How many fresh keys to try before giving up on an insert.
pub const MAX_KEY_ATTEMPTS: usize = 3;

/// Application service for the location collection.
pub struct LocationService<R> {
    repo: R,
}

impl<R: LocationRepository> LocationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a location under a newly generated key.
    ///
    /// A random 128-bit key practically never collides, but the repository
    /// reports occupied keys, so a collision is retried with a new key.
    ///
    /// # Errors
    ///
    /// Returns [`LocboxError::KeyExhausted`] after [`MAX_KEY_ATTEMPTS`]
    /// collisions, or a storage error propagated from the repository.
    pub async fn record_location(&self, location: Location) -> Result<LocationId, LocboxError> {
        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let id = LocationId::new();
            if self.repo.insert(id, location.clone()).await? {
                tracing::debug!(%id, bytes = location.as_bytes().len(), "location recorded");
                return Ok(id);
            }
            tracing::warn!(%id, attempt, "location key already taken");
        }
        Err(LocboxError::KeyExhausted {
            attempts: MAX_KEY_ATTEMPTS,
        })
    }

    /// List every stored location in store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_locations(&self) -> Result<Vec<Location>, LocboxError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct InMemoryLocationRepo {
        store: Mutex<BTreeMap<LocationId, Location>>,
        /// Number of upcoming inserts to report as collisions.
        collisions: AtomicUsize,
    }

    impl InMemoryLocationRepo {
        fn colliding(times: usize) -> Self {
            Self {
                collisions: AtomicUsize::new(times),
                ..Self::default()
            }
        }
    }

    impl LocationRepository for InMemoryLocationRepo {
        fn insert(
            &self,
            id: LocationId,
            location: Location,
        ) -> impl Future<Output = Result<bool, LocboxError>> + Send {
            let collided = self
                .collisions
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            let inserted = if collided {
                false
            } else {
                let mut store = self.store.lock().unwrap();
                store.insert(id, location).is_none()
            };
            async move { Ok(inserted) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Location>, LocboxError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Location> = store.values().cloned().collect();
            async { Ok(result) }
        }
    }

    struct FailingRepo;

    impl LocationRepository for FailingRepo {
        async fn insert(&self, _id: LocationId, _location: Location) -> Result<bool, LocboxError> {
            Err(LocboxError::Storage(Box::new(std::io::Error::other("disk full"))))
        }

        async fn get_all(&self) -> Result<Vec<Location>, LocboxError> {
            Err(LocboxError::Storage(Box::new(std::io::Error::other(
                "unreadable",
            ))))
        }
    }

    fn make_service() -> LocationService<InMemoryLocationRepo> {
        LocationService::new(InMemoryLocationRepo::default())
    }

    fn location(body: &str) -> Location {
        Location::from_slice(body.as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn should_record_and_list_location() {
        let svc = make_service();
        svc.record_location(location(r#"{"lat":1,"lng":2}"#))
            .await
            .unwrap();

        let all = svc.list_locations().await.unwrap();
        assert_eq!(all, vec![location(r#"{"lat":1,"lng":2}"#)]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_nothing_recorded() {
        let svc = make_service();
        assert!(svc.list_locations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_assign_distinct_keys_to_identical_documents() {
        let svc = make_service();
        let a = svc.record_location(location("{}")).await.unwrap();
        let b = svc.record_location(location("{}")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(svc.list_locations().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_retry_with_new_key_when_key_taken() {
        let svc = LocationService::new(InMemoryLocationRepo::colliding(MAX_KEY_ATTEMPTS - 1));
        svc.record_location(location("[1]")).await.unwrap();
        assert_eq!(svc.list_locations().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_give_up_when_every_key_taken() {
        let svc = LocationService::new(InMemoryLocationRepo::colliding(MAX_KEY_ATTEMPTS));
        let result = svc.record_location(location("[1]")).await;
        assert!(matches!(
            result,
            Err(LocboxError::KeyExhausted {
                attempts: MAX_KEY_ATTEMPTS
            })
        ));
        assert!(svc.list_locations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_storage_errors() {
        let svc = LocationService::new(FailingRepo);
        assert!(matches!(
            svc.record_location(location("{}")).await,
            Err(LocboxError::Storage(_))
        ));
        assert!(matches!(
            svc.list_locations().await,
            Err(LocboxError::Storage(_))
        ));
    }
}
