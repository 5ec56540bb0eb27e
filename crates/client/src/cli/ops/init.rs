use clap::Args;
use url::Url;

use coms_client::{AppConfig, AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Service root URL to store in the config
    #[arg(long)]
    pub api_url: Option<Url>,

    /// Bearer token sent with every request
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Do not keep the bucket cache on disk between runs
    #[arg(long)]
    pub no_persist: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("State error: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            api_url: self.api_url.clone().unwrap_or_else(|| defaults.api_url.clone()),
            auth_token: self.auth_token.clone(),
            persist_buckets: !self.no_persist,
            ..defaults
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        Ok(format!(
            "Initialized coms directory at {}\n  api_url: {}",
            state.coms_dir.display(),
            state.config.api_url
        ))
    }
}
