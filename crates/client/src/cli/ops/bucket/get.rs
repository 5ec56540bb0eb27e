use clap::Args;

use common::types::BucketSearchPermissionsOptions;
use coms_client::StateError;

use super::format_bucket;

#[derive(Args, Debug, Clone)]
pub struct Get {
    #[arg(long)]
    pub bucket_id: String,

    /// Refresh this bucket from the service before looking it up
    #[arg(long)]
    pub refresh: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum BucketGetError {
    #[error("State error: {0}")]
    State(#[from] StateError),
    #[error("Bucket not found: {0}")]
    NotFound(String),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Get {
    type Error = BucketGetError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = ctx.session()?;

        if self.refresh || session.buckets.get_bucket_by_id(&self.bucket_id).is_none() {
            let params = BucketSearchPermissionsOptions::for_bucket(&self.bucket_id);
            session.buckets.fetch_buckets(Some(&params)).await;
            ctx.persist(&session)?;
        }

        session
            .buckets
            .get_bucket_by_id(&self.bucket_id)
            .map(|bucket| format_bucket(&bucket))
            .ok_or_else(|| BucketGetError::NotFound(self.bucket_id.clone()))
    }
}
