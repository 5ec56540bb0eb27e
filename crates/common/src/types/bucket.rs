use serde::{Deserialize, Serialize};

use super::Audit;

/// A named storage container the current user may have access to.
///
/// `bucket_id` is assigned by the server on creation; a locally built
/// bucket that has not been sent yet carries an empty id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bucket_id: String,
    pub bucket_name: String,
    #[serde(default)]
    pub access_key_id: String,
    /// Name of the backing bucket on the object storage endpoint
    #[serde(default)]
    pub bucket: String,
    #[serde(default)]
    pub endpoint: String,
    /// Key prefix inside the backing bucket
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret_access_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

fn default_active() -> bool {
    true
}

impl Bucket {
    pub fn new(bucket_id: impl Into<String>, bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            bucket_name: bucket_name.into(),
            active: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_wire_format_is_camel_case() {
        let json = r#"{
            "bucketId": "b1",
            "bucketName": "Bee",
            "accessKeyId": "ak",
            "bucket": "backing",
            "endpoint": "https://s3.example.com",
            "key": "prefix",
            "active": false,
            "createdBy": "u1",
            "createdAt": "2024-01-02T03:04:05Z"
        }"#;

        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.bucket_id, "b1");
        assert_eq!(bucket.bucket_name, "Bee");
        assert!(!bucket.active);
        assert_eq!(bucket.audit.created_by.as_deref(), Some("u1"));
        assert!(bucket.audit.created_at.is_some());
        assert!(bucket.audit.updated_at.is_none());
    }

    #[test]
    fn test_unsent_bucket_omits_id_and_secret() {
        let bucket = Bucket::new("", "draft");
        let value = serde_json::to_value(&bucket).unwrap();

        assert!(value.get("bucketId").is_none());
        assert!(value.get("secretAccessKey").is_none());
        assert!(value.get("createdAt").is_none());
        assert_eq!(value["bucketName"], "draft");
    }
}
