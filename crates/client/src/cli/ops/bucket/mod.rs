use clap::{Args, Subcommand};

pub mod create;
pub mod get;
pub mod list;
pub mod update;

use crate::cli::op::Op;

crate::command_enum! {
    (Create, create::Create),
    (Get, get::Get),
    (List, list::List),
    (Update, update::Update),
}

// Rename the generated Command to BucketCommand for clarity
pub type BucketCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Bucket {
    #[command(subcommand)]
    pub command: BucketCommand,
}

#[async_trait::async_trait]
impl Op for Bucket {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

/// One line per bucket: id, name, then where it lives
pub fn format_bucket(bucket: &common::types::Bucket) -> String {
    let status = if bucket.active { "" } else { " (inactive)" };
    format!(
        "{}  {}  {}/{}/{}{}",
        bucket.bucket_id,
        bucket.bucket_name,
        bucket.endpoint.trim_end_matches('/'),
        bucket.bucket,
        bucket.key,
        status
    )
}
