pub mod bucket;
pub mod object;
pub mod permission;

use reqwest::Url;

use super::client::ApiError;

pub const API_PREFIX: &str = "/api/v1";

/// `base_url` joined with the API prefix, then each of `segments`
/// pushed as its own escaped path segment.
fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base_url.join(API_PREFIX)?;
    url.path_segments_mut()
        .map_err(|_| ApiError::CannotBeABase(base_url.clone()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_escapes_segments() {
        let base = Url::parse("http://localhost:3000/ignored/path").unwrap();
        let url = endpoint(&base, &["bucket", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/v1/bucket/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_rejects_opaque_base() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        assert!(endpoint(&base, &["bucket"]).is_err());
    }
}
