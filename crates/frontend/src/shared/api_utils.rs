//! API utilities for frontend-backend communication
//!
//! Every data request carries the stored bearer token. A 401 ends the session.

use crate::system::auth::context::expire_session;
use crate::system::auth::storage::{load_token, BrowserStore};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SESSION_EXPIRED: &str = "Session expired";

/// Body of a successful upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SavedId {
    pub id: i64,
}

/// Base URL of the backend: the page's host on port 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match load_token(&BrowserStore) {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Maps a non-2xx response to its message; the body text is surfaced verbatim when present.
async fn checked(response: Response) -> Result<Response, String> {
    if response.status() == 401 {
        expire_session();
        return Err(SESSION_EXPIRED.to_string());
    }
    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(error_message(status, &text));
    }
    Ok(response)
}

fn error_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, String> {
    let response = authorized(builder)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    checked(response).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(Request::get(&api_url(path))).await?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let request = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse(checked(response).await?).await
}

/// POST without a body, e.g. the state-transition actions
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(Request::post(&api_url(path))).await?;
    parse(response).await
}

/// POST of raw text, used for CSV uploads
pub async fn post_text<T: DeserializeOwned>(path: &str, text: String) -> Result<T, String> {
    let request = authorized(Request::post(&api_url(path)))
        .header("Content-Type", "text/csv")
        .body(text)
        .map_err(|e| format!("Failed to build request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse(checked(response).await?).await
}

/// POST that only reports success
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let request = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    checked(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    send(Request::delete(&api_url(path))).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_wins_over_status() {
        assert_eq!(error_message(409, "Challan CH-2025-001 is not sent"), "Challan CH-2025-001 is not sent");
        assert_eq!(error_message(500, "  "), "HTTP 500");
        assert_eq!(error_message(404, ""), "HTTP 404");
    }

    #[test]
    fn upsert_body_parses() {
        let saved: SavedId = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(saved.id, 42);
    }
}
