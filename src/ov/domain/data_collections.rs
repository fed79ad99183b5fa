use crate::ov::domain::null_as_default::null_as_default;
use serde::{Deserialize, Serialize};

/// One page of the data collections gathered for a piece of hardware. Further pages are
/// reachable through `next_page_uri` and `prev_page_uri` but are never fetched implicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataCollections {
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(rename = "eTag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<CollectionMember>,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    pub next_page_uri: Option<String>,
    pub prev_page_uri: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub start: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionMember {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub download_uri: String,
    #[serde(rename = "eTag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub submit_guid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    pub uri: Option<String>,
}
