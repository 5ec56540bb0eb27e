use reqwest::{Client, RequestBuilder, Url};

use common::types::Bucket;

use super::endpoint;
use crate::api::client::ApiError;
use crate::api::ApiRequest;

/// `GET /bucket` filtered to a set of ids.
#[derive(Debug, Clone)]
pub struct SearchBucketsRequest {
    pub bucket_ids: Vec<String>,
}

impl ApiRequest for SearchBucketsRequest {
    type Response = Vec<Bucket>;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["bucket"])?;
        let query: Vec<(&str, &str)> = self
            .bucket_ids
            .iter()
            .map(|id| ("bucketId", id.as_str()))
            .collect();
        Ok(client.get(url).query(&query))
    }
}

/// `PUT /bucket` — the server assigns the id.
#[derive(Debug, Clone)]
pub struct CreateBucketRequest {
    pub bucket: Bucket,
}

impl ApiRequest for CreateBucketRequest {
    type Response = Bucket;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["bucket"])?;
        Ok(client.put(url).json(&self.bucket))
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBucketRequest {
    pub bucket_id: String,
    pub bucket: Bucket,
}

impl ApiRequest for UpdateBucketRequest {
    type Response = Bucket;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["bucket", self.bucket_id.as_str()])?;
        Ok(client.patch(url).json(&self.bucket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:3000").unwrap()
    }

    #[test]
    fn test_search_repeats_bucket_id() {
        let request = SearchBucketsRequest {
            bucket_ids: vec!["A".to_string(), "B".to_string()],
        }
        .build_request(&base(), &Client::new())
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:3000/api/v1/bucket?bucketId=A&bucketId=B"
        );
    }

    #[test]
    fn test_update_targets_bucket_path() {
        let request = UpdateBucketRequest {
            bucket_id: "b-1".to_string(),
            bucket: Bucket::new("b-1", "renamed"),
        }
        .build_request(&base(), &Client::new())
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(request.method(), reqwest::Method::PATCH);
        assert_eq!(request.url().path(), "/api/v1/bucket/b-1");
    }
}
