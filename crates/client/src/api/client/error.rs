use common::error::ServiceError;
use reqwest::StatusCode;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("URL cannot be used as a base: {0}")]
    CannotBeABase(Url),
    #[error("HTTP status {0}: {1}")]
    HttpStatus(StatusCode, String),
}

impl From<ApiError> for ServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::HttpStatus(status, body) => ServiceError::HttpStatus(status.as_u16(), body),
            ApiError::Reqwest(e) if e.is_decode() => ServiceError::Decode(e.to_string()),
            ApiError::Reqwest(e) => ServiceError::Transport(e.to_string()),
            other => ServiceError::Other(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_service_status() {
        let error = ApiError::HttpStatus(StatusCode::FORBIDDEN, "nope".to_string());
        match ServiceError::from(error) {
            ServiceError::HttpStatus(code, body) => {
                assert_eq!(code, 403);
                assert_eq!(body, "nope");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_url_errors_stay_wrapped() {
        let error = ApiError::from(Url::parse("not a url").unwrap_err());
        let service = ServiceError::from(error);
        assert!(matches!(service, ServiceError::Other(_)));
        assert!(service.to_string().contains("URL parse error"));
    }
}
