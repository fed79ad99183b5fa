use crate::app_config::AppConfig;
use crate::rest::rest_client::{RestClient, RestError};
use crate::rest::session::{LoginRequest, LoginResponse};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, instrument, warn};

const API_VERSION: HeaderName = HeaderName::from_static("x-api-version");
const AUTH: HeaderName = HeaderName::from_static("auth");

/// A reqwest backed connection to a single OneView appliance.
#[derive(Debug)]
pub struct OvClient {
    client: Client,
    endpoint: String,
    user: String,
    password: String,
    domain: String,
    api_version: u32,
    session: RwLock<Option<HeaderValue>>,
    header_options: RwLock<HeaderMap>,
}

impl OvClient {
    pub fn new(config: &AppConfig) -> Result<Self, RestError> {
        let oneview = config.oneview();
        let client = Client::builder()
            .danger_accept_invalid_certs(oneview.accept_invalid_certs())
            .timeout(oneview.timeout())
            .build()?;

        Ok(OvClient {
            client,
            endpoint: oneview.endpoint().to_string(),
            user: oneview.user().to_string(),
            password: oneview.password().to_string(),
            domain: oneview.domain().to_string(),
            api_version: oneview.api_version(),
            session: RwLock::new(None),
            header_options: RwLock::new(HeaderMap::new()),
        })
    }

    fn url(&self, uri: &str) -> String {
        format!("{}{}", self.endpoint, uri)
    }

    fn session(&self) -> Option<HeaderValue> {
        self.session.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_session(&self, session: Option<HeaderValue>) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Opens a new login session, replacing any session currently held.
    #[instrument(skip(self), fields(user = %self.user, domain = %self.domain))]
    pub async fn session_login(&self) -> Result<(), RestError> {
        info!("Logging in to OneView...");

        let request = LoginRequest {
            user_name: &self.user,
            password: &self.password,
            auth_login_domain: &self.domain,
            login_msg_ack: true,
        };
        let response = self
            .client
            .post(self.url("/rest/login-sessions"))
            .header(API_VERSION, self.api_version)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RestError::Status { status, body });
        }

        let login_response: LoginResponse = serde_json::from_str(&body)?;
        let mut session = HeaderValue::from_str(&login_response.session_id)?;
        session.set_sensitive(true);
        self.set_session(Some(session));

        info!("Logging in to OneView... OK");
        Ok(())
    }

    /// Ends the current login session. Does nothing when no session is held.
    #[instrument(skip(self))]
    pub async fn session_logout(&self) -> Result<(), RestError> {
        if self.session().is_none() {
            return Ok(());
        }

        let response = self
            .client
            .delete(self.url("/rest/login-sessions"))
            .headers(self.get_auth_header_map())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(RestError::Status { status, body });
        }

        self.set_session(None);
        info!("Logged out of OneView");
        Ok(())
    }

    /// Whether the appliance still accepts the held session.
    pub async fn is_session_valid(&self) -> bool {
        if self.session().is_none() {
            return false;
        }

        match self.client.get(self.url("/rest/sessions")).headers(self.get_auth_header_map()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Unable to verify the OneView session: {}", e);
                false
            }
        }
    }
}

/// `refresh_login` probes `GET /rest/sessions` on every call, so each resource request costs an extra round trip.
#[async_trait]
impl RestClient for OvClient {
    #[instrument(skip(self))]
    async fn refresh_login(&self) {
        if self.is_session_valid().await {
            debug!("OneView session is still valid");
            return;
        }

        if let Err(e) = self.session_login().await {
            warn!("⚠️ Unable to refresh the OneView session: {}", e);
        }
    }

    fn get_auth_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_VERSION, HeaderValue::from(self.api_version));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(session) = self.session() {
            headers.insert(AUTH, session);
        }
        headers
    }

    fn set_auth_header_options(&self, headers: HeaderMap) {
        *self.header_options.write().unwrap_or_else(PoisonError::into_inner) = headers;
    }

    #[instrument(skip(self, body, params))]
    async fn rest_api_call(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        params: Option<&HashMap<String, String>>,
    ) -> Result<String, RestError> {
        let headers = self.header_options.read().unwrap_or_else(PoisonError::into_inner).clone();

        let mut request = self.client.request(method, self.url(uri)).headers(headers);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(RestError::Status { status, body: text });
        }

        Ok(text)
    }
}
