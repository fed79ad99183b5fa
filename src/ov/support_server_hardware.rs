use crate::ov::domain::SupportServerHardware;
use crate::rest::{RestClient, RestError};
use reqwest::Method;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

const SUPPORT_SERVER_HARDWARE_URI: &str = "/rest/support/server-hardware/";

#[derive(Error, Debug)]
pub enum OvError {
    #[error(transparent)]
    Transport(#[from] RestError),
    #[error("unable to decode the OneView response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

/// Retrieves the support settings of a server hardware resource.
///
/// The id is appended to the resource path as is. On success the returned record holds a
/// reference to `client`.
#[instrument(skip(client))]
pub async fn get_support_server_hardware<C>(client: &Arc<C>, id: &str) -> Result<SupportServerHardware, OvError>
where
    C: RestClient + 'static,
{
    let uri = format!("{}{}", SUPPORT_SERVER_HARDWARE_URI, id);

    client.refresh_login().await;
    client.set_auth_header_options(client.get_auth_header_map());

    let data = client.rest_api_call(Method::GET, &uri, None, None).await?;
    debug!(body = %data, "Retrieved support server hardware");

    let mut support_server_hardware: SupportServerHardware =
        serde_json::from_str(&data).map_err(|source| OvError::Decode { source, body: data.clone() })?;
    support_server_hardware.client = Some(client.clone() as Arc<dyn RestClient>);

    Ok(support_server_hardware)
}
