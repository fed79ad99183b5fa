mod client;
mod rest_client;
mod session;

pub use client::OvClient;
pub use rest_client::{RestClient, RestError};
