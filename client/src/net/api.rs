//! REST API helpers for communicating with the wallet backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! host's same-origin `/api` forwarder so the session cookie rides along.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Form callers collapse every failure into one user-visible string via
//! [`ApiError::user_message`]. The session probe never surfaces an error at
//! all: any failure reads as "not authenticated".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{
    FundRequest, Identity, LoginRequest, LoginResponse, RegisterRequest, Transaction, TransferRequest,
    WithdrawRequest,
};

/// Path prefix the host forwards to the wallet backend.
pub const API_PREFIX: &str = "/api";

/// `localStorage` key holding the optional bearer token from login.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Which backend path family serves balance and history reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiLayout {
    /// `/user/balance` and `/transactions`, scoped by the session cookie.
    #[default]
    SessionScoped,
    /// `/wallet/{email}/balance` and `/wallet/{email}/transactions`.
    EmailScoped,
}

impl ApiLayout {
    pub fn balance_path(self, identity: Option<&Identity>) -> String {
        match (self, identity) {
            (Self::EmailScoped, Some(identity)) => {
                format!("/wallet/{}/balance", encode_path_segment(&identity.email))
            }
            _ => "/user/balance".to_owned(),
        }
    }

    pub fn transactions_path(self, identity: Option<&Identity>) -> String {
        match (self, identity) {
            (Self::EmailScoped, Some(identity)) => {
                format!("/wallet/{}/transactions", encode_path_segment(&identity.email))
            }
            _ => "/transactions".to_owned(),
        }
    }
}

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The single message a form shows for this failure.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b'@') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn error_from_response(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body).ok().and_then(|b| b.message);
    ApiError::Status { status, message }
}

/// Interpret a `GET /user` body. A truthy payload is an object carrying a
/// non-empty `email`, either at the top level or under `user`.
pub fn identity_from_session_body(body: &Value) -> Option<Identity> {
    let candidate = match body.get("user") {
        Some(user @ Value::Object(_)) => user,
        _ => body,
    };
    if !candidate.is_object() {
        return None;
    }
    let identity: Identity = serde_json::from_value(candidate.clone()).ok()?;
    if identity.email.trim().is_empty() {
        return None;
    }
    Some(identity)
}

/// Interpret a transaction-list body. Non-list payloads yield an empty list;
/// malformed entries are skipped.
pub fn transactions_from_body(body: Value) -> Vec<Transaction> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("transactions") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Transaction>(item) {
            Ok(tx) => Some(tx),
            Err(e) => {
                log::warn!("skipping malformed transaction: {e}");
                None
            }
        })
        .collect()
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::load_string(TOKEN_STORAGE_KEY) {
        Some(token) if !token.is_empty() => builder.header("Authorization", &format!("Bearer {token}")),
        _ => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(error_from_response(status, &body))
}

#[cfg(feature = "hydrate")]
async fn get_json(path: &str) -> Result<Value, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = ensure_ok(resp).await?;
    resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    let resp = authorized(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp).await
}

/// Probe the session via `GET /user`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_session() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        match get_json("/user").await {
            Ok(body) => identity_from_session_body(&body),
            Err(e) => {
                log::debug!("session probe failed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Interpret a login or registration body: an identity plus the optional
/// bearer token.
pub fn login_from_body(body: &Value) -> Option<LoginResponse> {
    let user = identity_from_session_body(body)?;
    let token = body.get("token").and_then(Value::as_str).map(str::to_owned);
    Some(LoginResponse { token, user })
}

/// Log in via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects the
/// credentials, or the body carries no identity.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/auth/login", request).await?;
        let body = resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        login_from_body(&body).ok_or_else(|| ApiError::Decode("missing user".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// Returns the session when the backend signs the new user in directly,
/// `None` when the user still has to log in.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn register(request: &RegisterRequest) -> Result<Option<LoginResponse>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/auth/register", request).await?;
        Ok(resp.json::<Value>().await.ok().and_then(|body| login_from_body(&body)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current balance.
///
/// # Errors
///
/// Returns an error if the request fails or the body has no numeric balance.
pub async fn fetch_balance(layout: ApiLayout, identity: Option<Identity>) -> Result<f64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(&layout.balance_path(identity.as_ref())).await?;
        serde_json::from_value::<super::types::BalanceResponse>(body)
            .map(|b| b.balance)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (layout, identity);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the transaction history.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_transactions(layout: ApiLayout, identity: Option<Identity>) -> Result<Vec<Transaction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(&layout.transactions_path(identity.as_ref())).await?;
        Ok(transactions_from_body(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (layout, identity);
        Err(ApiError::Unavailable)
    }
}

/// Fund the wallet via `POST /wallet/fund`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn fund(request: &FundRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/wallet/fund", request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Send funds via `POST /wallet/transfer`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn transfer(request: &TransferRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/wallet/transfer", request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Withdraw funds via `POST /wallet/withdraw`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn withdraw(request: &WithdrawRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/wallet/withdraw", request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = post_json("/logout", &serde_json::json!({})).await {
            log::debug!("logout request failed: {e}");
        }
    }
}
