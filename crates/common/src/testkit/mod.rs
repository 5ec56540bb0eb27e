/// In-memory collaborators for driving the stores without a server
///
/// Each collaborator keeps its rows behind a mutex, counts the calls it
/// receives, and can be told to fail so error paths can be exercised.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use common::prelude::*;
/// use common::testkit::{MemoryBucketService, MemoryPermissionStore, RecordingNotifier};
///
/// let permissions = Arc::new(MemoryPermissionStore::new());
/// permissions.grant_bucket("B", "alice", "READ");
///
/// let service = Arc::new(MemoryBucketService::new());
/// service.insert(Bucket::new("B", "Bee"));
///
/// let store = BucketStore::new(
///     permissions,
///     service,
///     LoadingIndicator::new(),
///     Arc::new(RecordingNotifier::new()),
/// );
/// store.fetch_buckets(None).await;
/// ```
mod buckets;
mod notifier;
mod objects;
mod permissions;

pub use buckets::MemoryBucketService;
pub use notifier::RecordingNotifier;
pub use objects::MemoryObjectService;
pub use permissions::MemoryPermissionStore;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::ServiceError;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared failure switch for the memory collaborators.
#[derive(Debug, Default)]
struct Failure(Mutex<Option<String>>);

impl Failure {
    fn set(&self, message: Option<String>) {
        *lock(&self.0) = message;
    }

    fn check(&self) -> Result<(), ServiceError> {
        match lock(&self.0).as_ref() {
            Some(message) => Err(ServiceError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}
