use serde::{Deserialize, Serialize};

// API: POST /rest/login-sessions
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub user_name: &'a str,
    pub password: &'a str,
    pub auth_login_domain: &'a str,
    pub login_msg_ack: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionID")]
    pub session_id: String,
}
