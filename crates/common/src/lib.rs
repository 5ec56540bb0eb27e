/**
 * Wire-level entity types shared by the stores
 *  and any service implementation.
 */
pub mod types;
/**
 * Collaborator contracts the stores are built on:
 *  permission lookups, bucket and object search,
 *  and the error type they all report.
 */
pub mod services;
pub mod error;
/**
 * Explicit observable container. Holds a value and
 *  notifies subscribers whenever it is replaced.
 */
pub mod observable;
/**
 * Process-wide counted loading indicator, shared
 *  by injection rather than as a singleton.
 */
pub mod loading;
/**
 * Toast notifications: options, defaults and sinks.
 */
pub mod toast;
/**
 * Partition-and-replace reconciliation of cached lists.
 */
pub mod reconcile;
/**
 * The bucket and bucket-object stores.
 */
pub mod store;
/**
 * In-memory collaborators for tests and local hosts.
 */
pub mod testkit;

pub mod prelude {
    pub use crate::error::ServiceError;
    pub use crate::loading::{LoadingGuard, LoadingIndicator};
    pub use crate::observable::Observable;
    pub use crate::services::{BucketService, ObjectService, PermissionStore};
    pub use crate::store::{BucketObjectStore, BucketStore};
    pub use crate::toast::{
        NoopNotifier, Notifier, Severity, ToastMessage, ToastOptions, TracingNotifier,
    };
    pub use crate::types::{
        Audit, Bucket, BucketObject, BucketPermission, BucketSearchPermissionsOptions,
        ObjectPermission, ObjectRecord,
    };
}
