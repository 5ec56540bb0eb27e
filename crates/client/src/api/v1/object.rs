use reqwest::{Client, RequestBuilder, Url};

use common::types::ObjectRecord;

use super::endpoint;
use crate::api::client::ApiError;
use crate::api::ApiRequest;

/// `GET /object` filtered to a set of ids.
#[derive(Debug, Clone)]
pub struct SearchObjectsRequest {
    pub object_ids: Vec<String>,
}

impl ApiRequest for SearchObjectsRequest {
    type Response = Vec<ObjectRecord>;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["object"])?;
        let query: Vec<(&str, &str)> = self
            .object_ids
            .iter()
            .map(|id| ("objectId", id.as_str()))
            .collect();
        Ok(client.get(url).query(&query))
    }
}
