use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use url::Url;

use common::toast::TracingNotifier;
use coms_client::state::DEFAULT_API_URL;
use coms_client::{ApiClient, ApiError, AppState, Session, StateError};

/// Resolve the remote URL for the API client.
///
/// Priority: explicit `--remote` flag > config file `api_url` > built-in default.
pub fn resolve_remote(explicit: Option<Url>, state: Option<&AppState>) -> Url {
    if let Some(url) = explicit {
        return url;
    }
    if let Some(state) = state {
        return state.config.api_url.clone();
    }
    Url::parse(DEFAULT_API_URL).expect("hardcoded URL must parse")
}

#[derive(Clone)]
pub struct OpContext {
    /// API client (always initialized with default or custom URL)
    pub client: ApiClient,
    /// Optional custom config path (defaults to ~/.coms)
    pub config_path: Option<PathBuf>,
    /// Loaded state, absent until `coms init` has run
    pub state: Option<AppState>,
}

impl OpContext {
    pub fn new(
        remote: Url,
        config_path: Option<PathBuf>,
        state: Option<AppState>,
    ) -> Result<Self, ApiError> {
        let mut client = ApiClient::new(&remote)?;
        if let Some(token) = state.as_ref().and_then(|s| s.config.auth_token.clone()) {
            client = client.with_auth_token(token);
        }

        Ok(Self {
            client,
            config_path,
            state,
        })
    }

    /// Stores over this context's client, with the bucket cache restored
    pub fn session(&self) -> Result<Session, StateError> {
        let session = Session::new(self.client.clone(), Arc::new(TracingNotifier));
        if let Some(state) = &self.state {
            session.buckets.restore(state.load_buckets()?);
        }
        Ok(session)
    }

    /// Write the bucket cache back to disk
    pub fn persist(&self, session: &Session) -> Result<(), StateError> {
        match &self.state {
            Some(state) => state.save_buckets(&session.buckets.snapshot()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use coms_client::AppConfig;

    #[test]
    fn test_resolve_remote_explicit_wins() {
        let explicit = Url::parse("http://example.com:9999").unwrap();
        let result = resolve_remote(Some(explicit.clone()), None);
        assert_eq!(result, explicit);
    }

    #[test]
    fn test_resolve_remote_uses_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = AppConfig {
            api_url: Url::parse("https://coms.example.com").unwrap(),
            ..Default::default()
        };
        let state = AppState::init(Some(temp.path().join("coms")), Some(config)).unwrap();

        let result = resolve_remote(None, Some(&state));
        assert_eq!(result.as_str(), "https://coms.example.com/");
    }

    #[test]
    fn test_resolve_remote_falls_back_to_default() {
        let result = resolve_remote(None, None);
        assert_eq!(result.port().unwrap(), 3000);
    }
}
