use clap::Args;

use coms_client::StateError;

use crate::cli::ops::ScopeArgs;

/// List the per-user object grants visible to the current user
#[derive(Args, Debug, Clone)]
pub struct List {
    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectListError {
    #[error("State error: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for List {
    type Error = ObjectListError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = ctx.session()?;
        let params = self.scope.options();

        session
            .bucket_objects
            .fetch_bucket_objects(params.as_ref())
            .await;

        let grants = session.bucket_objects.bucket_objects();
        if grants.is_empty() {
            return Ok("No bucket objects found".to_string());
        }

        Ok(grants
            .iter()
            .map(|g| {
                format!(
                    "{}/{}  {} ({})  {}",
                    g.bucket_name, g.object_name, g.user_name, g.user_id, g.permissions
                )
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
