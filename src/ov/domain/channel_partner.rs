use crate::ov::domain::null_as_default::null_as_default;
use serde::{Deserialize, Serialize};

/// A reseller or support provider associated with a piece of hardware.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelPartner {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default: bool,
    #[serde(rename = "eTag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inherited_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub partner_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}
