use clap::Args;

use common::error::ServiceError;
use common::types::{Bucket, BucketSearchPermissionsOptions};
use coms_client::StateError;

#[derive(Args, Debug, Clone)]
pub struct Create {
    /// Display name of the bucket
    #[arg(long)]
    pub name: String,

    /// Name of the backing bucket on the storage endpoint
    #[arg(long)]
    pub bucket: String,

    #[arg(long)]
    pub endpoint: String,

    #[arg(long)]
    pub access_key_id: String,

    #[arg(long)]
    pub secret_access_key: String,

    /// Key prefix inside the backing bucket
    #[arg(long, default_value = "")]
    pub key: String,

    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BucketCreateError {
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
    #[error("State error: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Create {
    type Error = BucketCreateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = ctx.session()?;

        let bucket = Bucket {
            bucket_name: self.name.clone(),
            bucket: self.bucket.clone(),
            endpoint: self.endpoint.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            key: self.key.clone(),
            region: self.region.clone(),
            ..Bucket::new("", "")
        };

        let created = session.buckets.create_bucket(&bucket).await?;

        // The store does not cache writes; pull the new bucket in
        let params = BucketSearchPermissionsOptions::for_bucket(&created.bucket_id);
        session.buckets.fetch_buckets(Some(&params)).await;
        ctx.persist(&session)?;

        Ok(format!(
            "Created bucket '{}' with ID {}",
            created.bucket_name, created.bucket_id
        ))
    }
}
