use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::{
    Bucket, BucketPermission, BucketSearchPermissionsOptions, ObjectPermission, ObjectRecord,
};

/// Resolves which entities the current user may see.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    async fn fetch_bucket_permissions(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<Vec<BucketPermission>, ServiceError>;

    async fn fetch_object_permissions(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<Vec<ObjectPermission>, ServiceError>;
}

#[async_trait]
pub trait BucketService: Send + Sync {
    /// Bulk fetch full bucket records for the given ids
    async fn search_buckets(&self, bucket_ids: &[String]) -> Result<Vec<Bucket>, ServiceError>;

    /// Create a bucket, returning the server's representation
    async fn create_bucket(&self, bucket: &Bucket) -> Result<Bucket, ServiceError>;

    async fn update_bucket(&self, bucket_id: &str, bucket: &Bucket)
        -> Result<Bucket, ServiceError>;
}

#[async_trait]
pub trait ObjectService: Send + Sync {
    async fn search_objects(&self, object_ids: &[String])
        -> Result<Vec<ObjectRecord>, ServiceError>;
}
