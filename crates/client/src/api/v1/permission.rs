use reqwest::{Client, RequestBuilder, Url};

use common::types::{BucketPermission, BucketSearchPermissionsOptions, ObjectPermission};

use super::endpoint;
use crate::api::client::ApiError;
use crate::api::ApiRequest;

#[derive(Debug, Clone, Default)]
pub struct BucketPermissionsRequest {
    pub params: BucketSearchPermissionsOptions,
}

impl ApiRequest for BucketPermissionsRequest {
    type Response = Vec<BucketPermission>;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["permission", "bucket"])?;
        Ok(client.get(url).query(&self.params))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectPermissionsRequest {
    pub params: BucketSearchPermissionsOptions,
}

impl ApiRequest for ObjectPermissionsRequest {
    type Response = Vec<ObjectPermission>;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["permission", "object"])?;
        Ok(client.get(url).query(&self.params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_query_uses_camel_case_and_skips_unset() {
        let params = BucketSearchPermissionsOptions {
            user_id: Some("u1".to_string()),
            bucket_id: Some("b1".to_string()),
            perm_code: None,
            object_perms: Some(true),
        };
        let request = BucketPermissionsRequest { params }
            .build_request(&Url::parse("http://localhost:3000").unwrap(), &Client::new())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/api/v1/permission/bucket");
        assert_eq!(
            request.url().query(),
            Some("userId=u1&bucketId=b1&objectPerms=true")
        );
    }
}
