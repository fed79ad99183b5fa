mod domain;
mod ov_date;
mod support_server_hardware;

pub use domain::{
    ChannelPartner, CollectionMember, Contact, DataCollections, Entitlement, EntitlementDetails, SupportServerHardware,
};
pub use ov_date::{DateParseError, ov_date};
pub use support_server_hardware::{OvError, get_support_server_hardware};
