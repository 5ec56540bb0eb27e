use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{lock, Failure};
use crate::error::ServiceError;
use crate::services::BucketService;
use crate::types::Bucket;

/// Bucket records held in insertion order.
#[derive(Debug, Default)]
pub struct MemoryBucketService {
    buckets: Mutex<Vec<Bucket>>,
    failure: Failure,
    next_id: AtomicUsize,
    searches: Mutex<Vec<Vec<String>>>,
}

impl MemoryBucketService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record by id
    pub fn insert(&self, bucket: Bucket) {
        let mut buckets = lock(&self.buckets);
        match buckets.iter_mut().find(|b| b.bucket_id == bucket.bucket_id) {
            Some(existing) => *existing = bucket,
            None => buckets.push(bucket),
        }
    }

    pub fn get(&self, bucket_id: &str) -> Option<Bucket> {
        lock(&self.buckets)
            .iter()
            .find(|b| b.bucket_id == bucket_id)
            .cloned()
    }

    pub fn fail_with(&self, message: &str) {
        self.failure.set(Some(message.to_string()));
    }

    pub fn recover(&self) {
        self.failure.set(None);
    }

    /// Id lists received by `search_buckets`, in call order
    pub fn searches(&self) -> Vec<Vec<String>> {
        lock(&self.searches).clone()
    }
}

#[async_trait]
impl BucketService for MemoryBucketService {
    async fn search_buckets(&self, bucket_ids: &[String]) -> Result<Vec<Bucket>, ServiceError> {
        lock(&self.searches).push(bucket_ids.to_vec());
        self.failure.check()?;

        Ok(lock(&self.buckets)
            .iter()
            .filter(|b| bucket_ids.contains(&b.bucket_id))
            .cloned()
            .collect())
    }

    async fn create_bucket(&self, bucket: &Bucket) -> Result<Bucket, ServiceError> {
        self.failure.check()?;

        let mut created = bucket.clone();
        if created.bucket_id.is_empty() {
            let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            created.bucket_id = format!("bucket-{}", n);
        }
        self.insert(created.clone());
        Ok(created)
    }

    async fn update_bucket(
        &self,
        bucket_id: &str,
        bucket: &Bucket,
    ) -> Result<Bucket, ServiceError> {
        self.failure.check()?;

        let mut buckets = lock(&self.buckets);
        let existing = buckets
            .iter_mut()
            .find(|b| b.bucket_id == bucket_id)
            .ok_or_else(|| {
                ServiceError::HttpStatus(404, format!("Bucket not found: {}", bucket_id))
            })?;

        let mut updated = bucket.clone();
        updated.bucket_id = bucket_id.to_string();
        *existing = updated.clone();
        Ok(updated)
    }
}
