use std::sync::Arc;

use tokio::sync::watch;

use crate::error::ServiceError;
use crate::loading::LoadingIndicator;
use crate::observable::Observable;
use crate::reconcile::{reconcile, unique_ids};
use crate::services::{BucketService, PermissionStore};
use crate::toast::{Notifier, ToastOptions};
use crate::types::{Bucket, BucketSearchPermissionsOptions};

pub const FETCH_BUCKETS_SUMMARY: &str = "Error fetching buckets";
pub const FETCH_BUCKETS_LIFE: u64 = 3000;

/// Cache of the buckets visible to the current user.
///
/// Reads never fail and never touch the network. `fetch_buckets`
/// refreshes the cache for a query scope and reports failures through
/// the notifier instead of returning them; `create_bucket` and
/// `update_bucket` return errors to the caller and leave the cache alone.
pub struct BucketStore {
    buckets: Observable<Vec<Bucket>>,
    permissions: Arc<dyn PermissionStore>,
    service: Arc<dyn BucketService>,
    loading: LoadingIndicator,
    toast: Arc<dyn Notifier>,
}

impl BucketStore {
    pub fn new(
        permissions: Arc<dyn PermissionStore>,
        service: Arc<dyn BucketService>,
        loading: LoadingIndicator,
        toast: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            buckets: Observable::default(),
            permissions,
            service,
            loading,
            toast,
        }
    }

    /// Snapshot of the cached buckets
    pub fn buckets(&self) -> Vec<Bucket> {
        self.buckets.get()
    }

    pub fn len(&self) -> usize {
        self.buckets.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Bucket>> {
        self.buckets.subscribe()
    }

    pub async fn create_bucket(&self, bucket: &Bucket) -> Result<Bucket, ServiceError> {
        let _loading = self.loading.guard();
        tracing::debug!(bucket_name = %bucket.bucket_name, "creating bucket");
        self.service.create_bucket(bucket).await
    }

    /// Refresh the cache for the scope of `params`.
    pub async fn fetch_buckets(&self, params: Option<&BucketSearchPermissionsOptions>) {
        let _loading = self.loading.guard();

        if let Err(e) = self.try_fetch_buckets(params).await {
            tracing::warn!(error = %e, ?params, "failed to fetch buckets");
            self.toast.add(
                ToastOptions::error(FETCH_BUCKETS_SUMMARY, e.to_string())
                    .with_life(FETCH_BUCKETS_LIFE),
            );
        }
    }

    async fn try_fetch_buckets(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<(), ServiceError> {
        let permissions = self.permissions.fetch_bucket_permissions(params).await?;
        let bucket_ids = unique_ids(permissions.iter().map(|p| p.bucket_id.as_str()));
        let scope = params.and_then(BucketSearchPermissionsOptions::scope);

        let fresh = if bucket_ids.is_empty() {
            tracing::debug!(scope, "no visible buckets");
            Vec::new()
        } else {
            self.service.search_buckets(&bucket_ids).await?
        };
        tracing::debug!(
            requested = bucket_ids.len(),
            received = fresh.len(),
            scope,
            "reconciling buckets"
        );

        self.buckets.modify(|buckets| {
            let cached = std::mem::take(buckets);
            *buckets = reconcile(cached, scope, fresh);
        });
        Ok(())
    }

    pub fn get_bucket_by_id(&self, bucket_id: &str) -> Option<Bucket> {
        self.buckets
            .with(|buckets| buckets.iter().find(|b| b.bucket_id == bucket_id).cloned())
    }

    pub async fn update_bucket(
        &self,
        bucket_id: &str,
        bucket: &Bucket,
    ) -> Result<Bucket, ServiceError> {
        let _loading = self.loading.guard();
        tracing::debug!(bucket_id, "updating bucket");
        self.service.update_bucket(bucket_id, bucket).await
    }

    /// The cached list, for persisting between sessions
    pub fn snapshot(&self) -> Vec<Bucket> {
        self.buckets()
    }

    /// Replace the cache with a previously persisted list
    pub fn restore(&self, buckets: Vec<Bucket>) {
        tracing::debug!(count = buckets.len(), "restoring bucket cache");
        self.buckets.set(buckets);
    }
}

impl std::fmt::Debug for BucketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketStore")
            .field("buckets", &self.len())
            .field("loading", &self.loading.count())
            .finish()
    }
}
