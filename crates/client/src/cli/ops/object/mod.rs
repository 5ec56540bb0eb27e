use clap::{Args, Subcommand};

pub mod list;

use crate::cli::op::Op;

crate::command_enum! {
    (List, list::List),
}

pub type ObjectCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Object {
    #[command(subcommand)]
    pub command: ObjectCommand,
}

#[async_trait::async_trait]
impl Op for Object {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
