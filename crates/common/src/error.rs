/// Failure reported by a collaborator service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("HTTP status {0}: {1}")]
    HttpStatus(u16, String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
