use serde::{Deserialize, Serialize};

/// A bucket-level permission row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPermission {
    pub bucket_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub perm_code: String,
}

/// An object-level permission row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPermission {
    pub object_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub perm_code: String,
}

/// Filters forwarded to the permission store.
///
/// Only `bucket_id` scopes local reconciliation; the remaining fields
/// narrow the permission query server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSearchPermissionsOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perm_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_perms: Option<bool>,
}

impl BucketSearchPermissionsOptions {
    pub fn for_bucket(bucket_id: impl Into<String>) -> Self {
        Self {
            bucket_id: Some(bucket_id.into()),
            ..Default::default()
        }
    }

    /// The bucket scope of a query, treating an empty id as unscoped.
    pub fn scope(&self) -> Option<&str> {
        self.bucket_id.as_deref().filter(|id| !id.is_empty())
    }
}
