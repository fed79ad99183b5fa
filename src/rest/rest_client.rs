use async_trait::async_trait;
use reqwest::header::{HeaderMap, InvalidHeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// The session and transport operations a OneView resource call relies on.
///
/// Implementations own the session state and must tolerate being shared
/// between concurrent callers.
#[async_trait]
pub trait RestClient: Debug + Send + Sync {
    /// Makes sure a usable session exists. Never fails; a request made without a valid
    /// session is rejected by the appliance instead.
    async fn refresh_login(&self);

    /// The headers that authenticate a request against the current session.
    fn get_auth_header_map(&self) -> HeaderMap;

    /// Replaces the headers sent with every subsequent [`RestClient::rest_api_call`].
    fn set_auth_header_options(&self, headers: HeaderMap);

    /// Sends a request to `uri`, relative to the appliance endpoint, and returns the raw body.
    async fn rest_api_call(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        params: Option<&HashMap<String, String>>,
    ) -> Result<String, RestError>;
}

#[derive(Error, Debug)]
pub enum RestError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("OneView responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("OneView returned a session id that is not a valid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error("unable to read the login session response: {0}")]
    InvalidLoginResponse(#[from] serde_json::Error),
}
