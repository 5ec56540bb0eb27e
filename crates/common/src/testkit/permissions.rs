use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{lock, Failure};
use crate::error::ServiceError;
use crate::services::PermissionStore;
use crate::types::{BucketPermission, BucketSearchPermissionsOptions, ObjectPermission};

/// Permission rows held in memory and filtered like the server would.
#[derive(Debug, Default)]
pub struct MemoryPermissionStore {
    buckets: Mutex<Vec<BucketPermission>>,
    objects: Mutex<Vec<(Option<String>, ObjectPermission)>>,
    failure: Failure,
    bucket_calls: AtomicUsize,
    object_calls: AtomicUsize,
}

impl MemoryPermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant_bucket(&self, bucket_id: &str, user_id: &str, perm_code: &str) {
        lock(&self.buckets).push(BucketPermission {
            bucket_id: bucket_id.to_string(),
            user_id: user_id.to_string(),
            perm_code: perm_code.to_string(),
        });
    }

    /// Grant on an object, optionally recording the bucket it lives in so
    /// bucket-scoped queries can find it.
    pub fn grant_object(
        &self,
        bucket_id: Option<&str>,
        object_id: &str,
        user_id: &str,
        perm_code: &str,
    ) {
        lock(&self.objects).push((
            bucket_id.map(str::to_string),
            ObjectPermission {
                object_id: object_id.to_string(),
                user_id: user_id.to_string(),
                perm_code: perm_code.to_string(),
            },
        ));
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        self.failure.set(Some(message.to_string()));
    }

    pub fn recover(&self) {
        self.failure.set(None);
    }

    pub fn bucket_calls(&self) -> usize {
        self.bucket_calls.load(Ordering::SeqCst)
    }

    pub fn object_calls(&self) -> usize {
        self.object_calls.load(Ordering::SeqCst)
    }
}

fn matches(
    params: Option<&BucketSearchPermissionsOptions>,
    bucket_id: Option<&str>,
    user_id: &str,
    perm_code: &str,
) -> bool {
    let Some(params) = params else {
        return true;
    };

    let bucket_ok = match (params.scope(), bucket_id) {
        (Some(wanted), Some(actual)) => wanted == actual,
        (Some(_), None) => false,
        (None, _) => true,
    };
    let user_ok = params.user_id.as_deref().map_or(true, |u| u == user_id);
    let perm_ok = params.perm_code.as_deref().map_or(true, |p| p == perm_code);

    bucket_ok && user_ok && perm_ok
}

#[async_trait]
impl PermissionStore for MemoryPermissionStore {
    async fn fetch_bucket_permissions(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<Vec<BucketPermission>, ServiceError> {
        self.bucket_calls.fetch_add(1, Ordering::SeqCst);
        self.failure.check()?;

        Ok(lock(&self.buckets)
            .iter()
            .filter(|p| matches(params, Some(&p.bucket_id), &p.user_id, &p.perm_code))
            .cloned()
            .collect())
    }

    async fn fetch_object_permissions(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<Vec<ObjectPermission>, ServiceError> {
        self.object_calls.fetch_add(1, Ordering::SeqCst);
        self.failure.check()?;

        Ok(lock(&self.objects)
            .iter()
            .filter(|(bucket_id, p)| {
                matches(params, bucket_id.as_deref(), &p.user_id, &p.perm_code)
            })
            .map(|(_, p)| p.clone())
            .collect())
    }
}
