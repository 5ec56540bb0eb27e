pub mod client;
mod collaborators;
pub mod v1;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use client::ApiError;

/// One API operation: how to build its request and what it returns.
pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError>;
}
