//! `/api/*` forwarder to the wallet backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so the backend's session cookie
//! stays same-origin. Requests keep their method, path, query, and body; only
//! the credential and content-negotiation headers travel upstream, and only
//! `content-type` plus every `set-cookie` travel back.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, HeaderName, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const API_PREFIX: &str = "/api";

/// Request headers copied to the backend.
const FORWARDED_HEADERS: [HeaderName; 4] = [COOKIE, AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request path is outside /api")]
    OutsidePrefix,
    #[error("wallet backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::OutsidePrefix => (StatusCode::NOT_FOUND, "not found"),
            Self::Unreachable(_) => (StatusCode::BAD_GATEWAY, "wallet backend unavailable"),
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

/// Map an incoming `/api/...` URI onto the backend base URL.
pub fn upstream_url(base: &str, uri: &Uri) -> Option<String> {
    let path = uri.path().strip_prefix(API_PREFIX)?;
    if !(path.is_empty() || path.starts_with('/')) {
        return None;
    }
    let path = if path.is_empty() { "/" } else { path };
    Some(match uri.query().filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}{path}?{query}"),
        None => format!("{base}{path}"),
    })
}

pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn relayed_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    if let Some(content_type) = upstream.get(CONTENT_TYPE) {
        out.insert(CONTENT_TYPE, content_type.clone());
    }
    for cookie in upstream.get_all(SET_COOKIE) {
        out.append(SET_COOKIE, cookie.clone());
    }
    out
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.wallet_api_url, &uri).ok_or(ProxyError::OutsidePrefix)?;

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %method, %url, "backend request failed");
            ProxyError::Unreachable(e)
        })?;

    let status = upstream.status();
    let relayed = relayed_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %method, %url, "backend response body failed");
        ProxyError::Unreachable(e)
    })?;
    tracing::debug!(%method, %url, status = status.as_u16(), "forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = relayed;
    Ok(response)
}
