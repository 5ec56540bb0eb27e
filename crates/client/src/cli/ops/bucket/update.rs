use clap::Args;

use common::error::ServiceError;
use common::types::BucketSearchPermissionsOptions;
use coms_client::StateError;

use super::format_bucket;

#[derive(Args, Debug, Clone)]
pub struct Update {
    #[arg(long)]
    pub bucket_id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub access_key_id: Option<String>,

    #[arg(long)]
    pub secret_access_key: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    /// Mark the bucket active or inactive
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum BucketUpdateError {
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
    #[error("State error: {0}")]
    State(#[from] StateError),
    #[error("Bucket not found: {0}")]
    NotFound(String),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Update {
    type Error = BucketUpdateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = ctx.session()?;
        let params = BucketSearchPermissionsOptions::for_bucket(&self.bucket_id);

        if session.buckets.get_bucket_by_id(&self.bucket_id).is_none() {
            session.buckets.fetch_buckets(Some(&params)).await;
        }
        let mut bucket = session
            .buckets
            .get_bucket_by_id(&self.bucket_id)
            .ok_or_else(|| BucketUpdateError::NotFound(self.bucket_id.clone()))?;

        if let Some(name) = &self.name {
            bucket.bucket_name = name.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            bucket.endpoint = endpoint.clone();
        }
        if let Some(access_key_id) = &self.access_key_id {
            bucket.access_key_id = access_key_id.clone();
        }
        if let Some(secret_access_key) = &self.secret_access_key {
            bucket.secret_access_key = secret_access_key.clone();
        }
        if let Some(region) = &self.region {
            bucket.region = Some(region.clone());
        }
        if let Some(active) = self.active {
            bucket.active = active;
        }

        let updated = session
            .buckets
            .update_bucket(&self.bucket_id, &bucket)
            .await?;

        session.buckets.fetch_buckets(Some(&params)).await;
        ctx.persist(&session)?;

        Ok(format!("Updated {}", format_bucket(&updated)))
    }
}
