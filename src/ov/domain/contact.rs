use crate::ov::domain::null_as_default::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub additional_emails: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub default_secondary: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "eTag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inherited_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub oos_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub primary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}
