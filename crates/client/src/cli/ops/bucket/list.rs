use clap::Args;

use coms_client::StateError;

use super::format_bucket;
use crate::cli::ops::ScopeArgs;

#[derive(Args, Debug, Clone)]
pub struct List {
    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum BucketListError {
    #[error("State error: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for List {
    type Error = BucketListError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = ctx.session()?;
        let params = self.scope.options();

        // Failures are reported through the notifier and leave the cache as is
        session.buckets.fetch_buckets(params.as_ref()).await;
        ctx.persist(&session)?;

        let buckets = session.buckets.buckets();
        if buckets.is_empty() {
            return Ok("No buckets found".to_string());
        }

        Ok(buckets
            .iter()
            .map(format_bucket)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
