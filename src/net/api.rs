//! REST API helpers for the remote auth service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Network` since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is single-shot with no retry or timeout. Callers get a typed
//! `ApiError` and decide how much of it to show the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SigninRequest, SignupRequest};
use crate::config::AppConfig;
use crate::state::session::Session;

pub const SIGNUP_PATH: &str = "/api/v1/signup";
pub const SIGNIN_PATH: &str = "/api/v1/signin";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Pull a human-readable message out of an error response body.
///
/// Accepts a JSON string, a JSON object with a `message` or `error` string,
/// or plain text. An empty body falls back to the status code.
#[cfg(any(test, feature = "csr"))]
fn server_error_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("Request failed with status {status}");
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(message)) => message,
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map_or_else(|| body.to_owned(), str::to_owned),
        _ => body.to_owned(),
    }
}

#[cfg(any(test, feature = "csr"))]
fn rejected(status: u16, body: &str) -> ApiError {
    ApiError::Rejected {
        status,
        message: server_error_message(status, body),
    }
}

/// Register a new account via `POST /api/v1/signup`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the server's message for any status
/// other than 200, or a transport error if the request never completed.
pub async fn signup(config: &AppConfig, body: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(SIGNUP_PATH))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status() != 200 {
            let text = resp.text().await.unwrap_or_default();
            return Err(rejected(resp.status(), &text));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, body);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Sign in via `POST /api/v1/signin` and return the response as a `Session`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for any status other than 200,
/// `ApiError::Decode` if the body is not a usable session, or a transport
/// error if the request never completed.
pub async fn signin(config: &AppConfig, body: &SigninRequest) -> Result<Session, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(SIGNIN_PATH))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if resp.status() != 200 {
            return Err(rejected(resp.status(), &text));
        }
        Session::parse(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, body);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
