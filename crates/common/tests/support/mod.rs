//! Shared fixtures for store integration tests
#![allow(dead_code)]

use std::sync::Arc;

use common::prelude::*;
use common::testkit::{
    MemoryBucketService, MemoryObjectService, MemoryPermissionStore, RecordingNotifier,
};

/// Both stores wired to one set of in-memory collaborators
pub struct Harness {
    pub permissions: Arc<MemoryPermissionStore>,
    pub buckets: Arc<MemoryBucketService>,
    pub objects: Arc<MemoryObjectService>,
    pub toast: Arc<RecordingNotifier>,
    pub loading: LoadingIndicator,
    pub bucket_store: BucketStore,
    pub bucket_object_store: BucketObjectStore,
}

pub fn harness() -> Harness {
    let permissions = Arc::new(MemoryPermissionStore::new());
    let buckets = Arc::new(MemoryBucketService::new());
    let objects = Arc::new(MemoryObjectService::new());
    let toast = Arc::new(RecordingNotifier::new());
    let loading = LoadingIndicator::new();

    let bucket_store = BucketStore::new(
        permissions.clone(),
        buckets.clone(),
        loading.clone(),
        toast.clone(),
    );
    let bucket_object_store = BucketObjectStore::new(
        permissions.clone(),
        buckets.clone(),
        objects.clone(),
        loading.clone(),
        toast.clone(),
    );

    Harness {
        permissions,
        buckets,
        objects,
        toast,
        loading,
        bucket_store,
        bucket_object_store,
    }
}

pub fn bucket(id: &str, name: &str) -> Bucket {
    Bucket::new(id, name)
}

pub fn grant(bucket_id: &str, object_id: &str, user_id: &str) -> BucketObject {
    BucketObject {
        bucket_id: bucket_id.to_string(),
        bucket_name: format!("bucket {}", bucket_id),
        object_id: object_id.to_string(),
        object_name: format!("object {}", object_id),
        user_id: user_id.to_string(),
        user_name: format!("user {}", user_id),
        permissions: "READ".to_string(),
        ..Default::default()
    }
}

pub fn ids(buckets: &[Bucket]) -> Vec<&str> {
    buckets.iter().map(|b| b.bucket_id.as_str()).collect()
}
