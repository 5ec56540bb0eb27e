use async_trait::async_trait;

use common::error::ServiceError;
use common::services::{BucketService, ObjectService, PermissionStore};
use common::types::{
    Bucket, BucketPermission, BucketSearchPermissionsOptions, ObjectPermission, ObjectRecord,
};

use super::client::ApiClient;
use super::v1::bucket::{CreateBucketRequest, SearchBucketsRequest, UpdateBucketRequest};
use super::v1::object::SearchObjectsRequest;
use super::v1::permission::{BucketPermissionsRequest, ObjectPermissionsRequest};

#[async_trait]
impl PermissionStore for ApiClient {
    async fn fetch_bucket_permissions(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<Vec<BucketPermission>, ServiceError> {
        let request = BucketPermissionsRequest {
            params: params.cloned().unwrap_or_default(),
        };
        Ok(self.call(request).await?)
    }

    async fn fetch_object_permissions(
        &self,
        params: Option<&BucketSearchPermissionsOptions>,
    ) -> Result<Vec<ObjectPermission>, ServiceError> {
        let request = ObjectPermissionsRequest {
            params: params.cloned().unwrap_or_default(),
        };
        Ok(self.call(request).await?)
    }
}

#[async_trait]
impl BucketService for ApiClient {
    async fn search_buckets(&self, bucket_ids: &[String]) -> Result<Vec<Bucket>, ServiceError> {
        let request = SearchBucketsRequest {
            bucket_ids: bucket_ids.to_vec(),
        };
        Ok(self.call(request).await?)
    }

    async fn create_bucket(&self, bucket: &Bucket) -> Result<Bucket, ServiceError> {
        let request = CreateBucketRequest {
            bucket: bucket.clone(),
        };
        Ok(self.call(request).await?)
    }

    async fn update_bucket(
        &self,
        bucket_id: &str,
        bucket: &Bucket,
    ) -> Result<Bucket, ServiceError> {
        let request = UpdateBucketRequest {
            bucket_id: bucket_id.to_string(),
            bucket: bucket.clone(),
        };
        Ok(self.call(request).await?)
    }
}

#[async_trait]
impl ObjectService for ApiClient {
    async fn search_objects(
        &self,
        object_ids: &[String],
    ) -> Result<Vec<ObjectRecord>, ServiceError> {
        let request = SearchObjectsRequest {
            object_ids: object_ids.to_vec(),
        };
        Ok(self.call(request).await?)
    }
}
