use serde::{Deserialize, Serialize};

use super::Audit;

/// An object as returned by the object search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}
