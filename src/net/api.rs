//! REST API helpers for the account backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a structured [`ApiError`] instead of panics so submit
//! handlers can log the cause and degrade to user-facing messages. No
//! retries and no explicit timeouts; the fetch defaults apply.
//!
//! CREDENTIALS
//! ===========
//! All requests flow through [`post`], which attaches a per-request
//! `Authorization: Bearer` header when a token is supplied. There is no
//! process-wide default header; code that needs an authorized call passes
//! the token explicitly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, RegisterRequest};

/// Backend base URL. The account page is the only consumer.
pub const API_BASE: &str = "http://localhost:3000";

/// Errors surfaced by the API helpers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network error, CORS, aborted fetch).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside a browser environment.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Join a path onto [`API_BASE`].
pub fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Format a bearer credential header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Compose a POST request, attaching the credential when one is supplied.
#[cfg(feature = "hydrate")]
fn post(path: &str, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    let url = endpoint(path);
    let mut req = gloo_net::http::Request::post(&url);
    if let Some(token) = token {
        req = req.header("Authorization", &bearer(token));
    }
    req
}

/// Register a new account via `POST /registro`.
///
/// The response body is treated as an opaque success payload.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn register(body: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post("/registro", None)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Authenticate via `POST /login`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or an
/// undecodable body. A 2xx body without a token parses successfully with
/// `token == None`; rejecting it is the caller's decision.
pub async fn login(body: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post("/login", None)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}
