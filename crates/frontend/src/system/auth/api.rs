use contracts::system::auth::{LoginRequest, LoginResponse, SessionUser};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, get_json};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Err(INVALID_CREDENTIALS.to_string());
    }
    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Identity behind the stored token
pub async fn current_user() -> Result<SessionUser, String> {
    get_json("/api/system/auth/me").await
}
