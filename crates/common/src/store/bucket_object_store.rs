use std::sync::Arc;

use tokio::sync::watch;

use crate::error::ServiceError;
use crate::loading::LoadingIndicator;
use crate::observable::Observable;
use crate::reconcile::{dedupe_by, reconcile, unique_ids};
use crate::services::{BucketService, ObjectService, PermissionStore};
use crate::toast::Notifier;
use crate::types::{BucketObject, BucketSearchPermissionsOptions};

pub const FETCH_BUCKET_OBJECTS_SUMMARY: &str = "Fetching bucket objects";

/// Cache of per-user object grants, scoped by bucket.
pub struct BucketObjectStore {
    bucket_objects: Observable<Vec<BucketObject>>,
    permissions: Arc<dyn PermissionStore>,
    buckets: Arc<dyn BucketService>,
    objects: Arc<dyn ObjectService>,
    loading: LoadingIndicator,
    toast: Arc<dyn Notifier>,
}

impl BucketObjectStore {
    pub fn new(
        permissions: Arc<dyn PermissionStore>,
        buckets: Arc<dyn BucketService>,
        objects: Arc<dyn ObjectService>,
        loading: LoadingIndicator,
        toast: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            bucket_objects: Observable::default(),
            permissions,
            buckets,
            objects,
            loading,
            toast,
        }
    }

    pub fn bucket_objects(&self) -> Vec<BucketObject> {
        self.bucket_objects.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<BucketObject>> {
        self.bucket_objects.subscribe()
    }

    /// Seed the cache, e.g. from grants loaded elsewhere
    pub fn restore(&self, bucket_objects: Vec<BucketObject>) {
        self.bucket_objects.set(bucket_objects);
    }

    /// Refresh grants for the scope of `params`. Failures are reported
    /// through the notifier and leave the cache untouched.
    pub async fn fetch_bucket_objects(&self, params: Option<&BucketSearchPermissionsOptions>) {
        let _loading = self.loading.guard();

        if let Err(e) = self.try_fetch_bucket_objects(params).await {
            tracing::warn!(error = %e, ?params, "failed to fetch bucket objects");
            self.toast.error(FETCH_BUCKET_OBJECTS_SUMMARY, &e.to_string());
        }
    }

    async fn try_fetch_bucket_objects(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<(), ServiceError> {
        let bucket_permissions = self.permissions.fetch_bucket_permissions(params).await?;
        let object_permissions = self.permissions.fetch_object_permissions(params).await?;

        let bucket_ids = unique_ids(bucket_permissions.iter().map(|p| p.bucket_id.as_str()));
        let object_ids = unique_ids(object_permissions.iter().map(|p| p.object_id.as_str()));
        let scope = params.and_then(BucketSearchPermissionsOptions::scope);

        // Grants are never assembled from the searched records, so a
        // refresh only clears the scope.
        let merged: Vec<BucketObject> = Vec::new();

        if bucket_ids.is_empty() {
            tracing::debug!(
                objects = object_ids.len(),
                scope,
                "no visible buckets for bucket objects"
            );
        } else {
            let buckets = self.buckets.search_buckets(&bucket_ids).await?;
            let objects = self.objects.search_objects(&object_ids).await?;
            tracing::debug!(
                buckets = buckets.len(),
                objects = objects.len(),
                scope,
                "reconciling bucket objects"
            );
        }

        self.bucket_objects.modify(|cached| {
            let previous = std::mem::take(cached);
            *cached = dedupe_by(reconcile(previous, scope, merged), BucketObject::key);
        });
        Ok(())
    }
}

impl std::fmt::Debug for BucketObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketObjectStore")
            .field("bucket_objects", &self.bucket_objects.with(Vec::len))
            .field("loading", &self.loading.count())
            .finish()
    }
}
