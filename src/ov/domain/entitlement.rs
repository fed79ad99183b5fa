use crate::ov::domain::Contact;
use crate::ov::domain::null_as_default::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entitlement {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(rename = "eTag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub obligation_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub obligation_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    pub uri: Option<String>,
}

/// The support coverage terms of an entitlement.
///
/// Empty strings and `false` flags of the optional terms are left out when serialized,
/// so an absent and an empty term decode to the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntitlementDetails {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub coverage_days: String,
    /// For example `HoursADay12`.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub coverage_hours_day1to5: String,
    /// For example `HoursADay24`.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub coverage_hours_day6: String,
    /// For example `StandardOfficeHours`.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub coverage_hours_day7: String,
    #[serde(rename = "coversHoliday", skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub covers_holidays: bool,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entitlement_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entitlement_package: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub entitlement_status: String,
    #[serde(rename = "eTag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_entitled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub last_upd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub obligation_end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub obligation_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub obligation_start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub obligation_type: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub offer_end_date: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub offer_start_date: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub offer_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_contact: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_state: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub response_holidays: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub response_time_day1to5: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub response_time_day6: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub response_time_day7: String,
    #[serde(deserialize_with = "null_as_default")]
    pub response_time_holidays: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_contact: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}
