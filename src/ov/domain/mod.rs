mod channel_partner;
mod contact;
mod data_collections;
mod entitlement;
mod null_as_default;
mod support_server_hardware;

pub use channel_partner::ChannelPartner;
pub use contact::Contact;
pub use data_collections::{CollectionMember, DataCollections};
pub use entitlement::{Entitlement, EntitlementDetails};
pub use support_server_hardware::SupportServerHardware;
