use serde::{Deserialize, Serialize};

use super::Audit;

/// One (user, object) permission grant scoped to a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketObject {
    pub bucket_id: String,
    pub bucket_name: String,
    pub object_id: String,
    pub object_name: String,
    pub user_id: String,
    pub user_name: String,
    /// Encoded permission set held by the user on the object
    pub permissions: String,
    #[serde(flatten)]
    pub audit: Audit,
}

impl BucketObject {
    /// Identity of a grant. The store keeps each key at most once.
    pub fn key(&self) -> (String, String, String) {
        (
            self.bucket_id.clone(),
            self.object_id.clone(),
            self.user_id.clone(),
        )
    }
}
