use crate::ov::domain::null_as_default::null_as_default;
use crate::ov::domain::{ChannelPartner, Contact, DataCollections, Entitlement, EntitlementDetails};
use crate::ov::ov_date::{DateParseError, ov_date};
use crate::rest::RestClient;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// API: GET /rest/support/server-hardware/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupportServerHardware {
    #[serde(deserialize_with = "null_as_default")]
    pub acquired_product_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub acquired_serial_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_delivery_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data_collections: DataCollections,
    pub data_collection_uri: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub entered_product_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entered_serial_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entered_obligation_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entered_obligation_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entitlement: Entitlement,
    #[serde(deserialize_with = "null_as_default")]
    pub entitlement_details: EntitlementDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub entitlement_uri: String,
    #[serde(rename = "eTag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_contact: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_contact_inherited_from: String,
    pub primary_contact_uri: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub rsdc_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sales_channel_partner: ChannelPartner,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_contact: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_contact_inherited_from: String,
    pub secondary_contact_uri: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub support_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub support_enabled_preference: String,
    #[serde(deserialize_with = "null_as_default")]
    pub support_channel_partner: ChannelPartner,
    #[serde(deserialize_with = "null_as_default")]
    pub support_channel_partner_inherited_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub support_channel_partner_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub supports_test_events: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,

    /// The client this record was retrieved with.
    #[serde(skip)]
    pub client: Option<Arc<dyn RestClient>>,
}

impl SupportServerHardware {
    pub fn offer_start_date(&self) -> Result<DateTime<FixedOffset>, DateParseError> {
        ov_date(&self.entitlement_details.offer_start_date)
    }

    pub fn offer_end_date(&self) -> Result<DateTime<FixedOffset>, DateParseError> {
        ov_date(&self.entitlement_details.offer_end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn with_offer(start: &str, end: &str) -> SupportServerHardware {
        SupportServerHardware {
            entitlement_details: EntitlementDetails {
                offer_start_date: start.to_string(),
                offer_end_date: end.to_string(),
                ..EntitlementDetails::default()
            },
            ..SupportServerHardware::default()
        }
    }

    #[test]
    fn offer_dates_parse_the_entitlement_details() {
        let hardware = with_offer("2021-06-01T00:00:00Z", "2024-05-31T23:59:59Z");

        assert_eq!(hardware.offer_start_date(), Ok(Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap().fixed_offset()));
        assert_eq!(hardware.offer_end_date(), Ok(Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap().fixed_offset()));
    }

    #[test]
    fn offer_dates_fail_on_empty_or_malformed_values() {
        let hardware = with_offer("", "not-a-date");

        assert!(hardware.offer_start_date().is_err());
        assert!(hardware.offer_end_date().is_err());
    }

    #[test]
    fn offer_dates_are_idempotent() {
        let valid = with_offer("2021-06-01T00:00:00Z", "2021-06-01T00:00:00Z");
        let invalid = with_offer("not-a-date", "");

        assert_eq!(valid.offer_start_date(), valid.offer_start_date());
        assert_eq!(valid.offer_end_date(), valid.offer_end_date());
        assert_eq!(invalid.offer_start_date(), invalid.offer_start_date());
        assert_eq!(invalid.offer_end_date(), invalid.offer_end_date());
    }

    #[test]
    fn reencoding_preserves_every_field() -> Result<(), serde_json::Error> {
        let original: Value = serde_json::from_str(include_str!("../../../tests/resources/support_server_hardware.json"))?;

        let hardware: SupportServerHardware = serde_json::from_value(original.clone())?;
        let reencoded = serde_json::to_value(&hardware)?;

        assert_eq!(reencoded, original);
        Ok(())
    }

    #[test]
    fn decodes_nested_records() -> Result<(), serde_json::Error> {
        let hardware: SupportServerHardware =
            serde_json::from_str(include_str!("../../../tests/resources/support_server_hardware.json"))?;

        assert_eq!(hardware.r#type, "SupportServerHardwareV4");
        assert_eq!(hardware.etag, "2021-06-01T10:11:12.345Z/2021-06-01T10:11:12.345Z");
        assert!(hardware.support_enabled);
        assert_eq!(hardware.primary_contact.first_name, "Ada");
        assert_eq!(hardware.primary_contact.oos_count, 2);
        assert_eq!(hardware.secondary_contact_uri, None);
        assert_eq!(hardware.data_collection_uri, Some(String::new()));
        assert_eq!(hardware.support_channel_partner.partner_type, "Support");
        assert_eq!(hardware.data_collections.members.len(), 1);
        assert_eq!(hardware.entitlement.obligation_id, "103423");
        assert!(hardware.entitlement_details.covers_holidays);
        assert!(hardware.client.is_none());
        Ok(())
    }

    #[test]
    fn missing_fields_decode_to_empty_values_and_unknown_fields_are_ignored() -> Result<(), serde_json::Error> {
        let hardware: SupportServerHardware = serde_json::from_value(json!({
            "uri": "/rest/support/server-hardware/abc",
            "somethingNew": { "nested": true },
        }))?;

        assert_eq!(hardware.uri, "/rest/support/server-hardware/abc");
        assert_eq!(hardware.category, "");
        assert!(!hardware.rsdc_enabled);
        assert_eq!(hardware.primary_contact, Contact::default());
        assert_eq!(hardware.primary_contact_uri, None);
        assert_eq!(hardware.entitlement_details, EntitlementDetails::default());
        Ok(())
    }

    #[test]
    fn the_client_is_not_serialized() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(SupportServerHardware::default())?;

        assert!(value.get("client").is_none());
        Ok(())
    }

    #[rstest]
    #[case::string(json!({ "uri": "/x", "customDeliveryId": null }))]
    #[case::bool(json!({ "uri": "/x", "supportEnabled": null }))]
    #[case::record(json!({ "uri": "/x", "primaryContact": null, "salesChannelPartner": null, "entitlementDetails": null }))]
    #[case::nested_list(json!({ "uri": "/x", "dataCollections": { "members": null, "count": null } }))]
    #[case::nested_int(json!({ "uri": "/x", "entitlementDetails": { "primaryContact": { "oosCount": null } } }))]
    fn null_values_decode_to_empty_values(#[case] value: Value) -> Result<(), serde_json::Error> {
        let hardware: SupportServerHardware = serde_json::from_value(value)?;

        assert_eq!(hardware.uri, "/x");
        assert_eq!(hardware.custom_delivery_id, "");
        assert!(!hardware.support_enabled);
        assert_eq!(hardware.primary_contact, Contact::default());
        assert_eq!(hardware.sales_channel_partner, ChannelPartner::default());
        assert_eq!(hardware.data_collections, DataCollections::default());
        assert_eq!(hardware.entitlement_details, EntitlementDetails::default());
        Ok(())
    }

    #[test]
    fn rejects_a_type_mismatch() {
        let result = serde_json::from_value::<SupportServerHardware>(json!({ "type": 123 }));

        assert!(result.is_err());
    }
}
