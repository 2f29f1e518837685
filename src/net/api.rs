//! Authenticated fetch wrapper over the HRIS REST API.
//!
//! Every request goes out with credentials included and, when a token is
//! present, a bearer authorization header. A 401 triggers exactly one
//! silent refresh followed by exactly one replay of the original request;
//! a second failure is surfaced to the caller. Any other non-success
//! status is terminal for that call.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;
use serde_json::Value;
use thiserror::Error;

use crate::state::session::SessionState;

/// Base URL of the HRIS API, fixed at build time.
const API_BASE: &str = match option_env!("HRIS_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// HTTP verbs used by the admin endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Failures surfaced by [`api_fetch`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status; `message` carries the
    /// body text when one could be read.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
}

/// Join a request path onto the configured API base.
pub fn api_url(path: &str) -> String {
    if path.starts_with('/') {
        format!("{API_BASE}{path}")
    } else {
        format!("{API_BASE}/{path}")
    }
}

/// Parse a success body: JSON when valid, `{}` when empty, and the raw
/// text under a fallback key otherwise. Never fails.
pub fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Object(serde_json::Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "raw": text }))
}

/// Issue an authenticated JSON request against the admin API.
///
/// On a 401 the session's refresh operation runs once; if it succeeds the
/// request is replayed once with the (possibly new) token, strictly after
/// the refresh has resolved. If the refresh fails the original 401 is
/// surfaced for the caller to interpret.
///
/// # Errors
///
/// `ApiError::Status` for a non-success final response, `ApiError::Network`
/// when the transport fails.
pub async fn api_fetch(
    session: RwSignal<SessionState>,
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;

        let token = session.get_untracked().token;
        let mut resp = do_fetch(token.as_deref(), method, path, body).await?;

        if resp.status() == 401 {
            let refreshed = crate::state::session::refresh_access_token(session).await;
            if refreshed {
                let token = session.get_untracked().token;
                resp = do_fetch(token.as_deref(), method, path, body).await?;
            }
        }

        if !resp.ok() {
            return Err(status_error(&resp).await);
        }

        let text = resp.text().await.unwrap_or_default();
        Ok(parse_body(&text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, method, path, body);
        Err(ApiError::Network(
            "API access requires a browser context".to_owned(),
        ))
    }
}

/// Issue an authenticated multipart upload with the same single-retry
/// protocol as [`api_fetch`]. The browser supplies the multipart boundary,
/// so no content-type header is set here.
///
/// # Errors
///
/// Same contract as [`api_fetch`].
#[cfg(feature = "hydrate")]
pub async fn api_upload(
    session: RwSignal<SessionState>,
    path: &str,
    form: &web_sys::FormData,
) -> Result<Value, ApiError> {
    use leptos::prelude::GetUntracked;

    let token = session.get_untracked().token;
    let mut resp = do_upload(token.as_deref(), path, form).await?;

    if resp.status() == 401 {
        if crate::state::session::refresh_access_token(session).await {
            let token = session.get_untracked().token;
            resp = do_upload(token.as_deref(), path, form).await?;
        }
    }

    if !resp.ok() {
        return Err(status_error(&resp).await);
    }

    let text = resp.text().await.unwrap_or_default();
    Ok(parse_body(&text))
}

#[cfg(feature = "hydrate")]
async fn do_fetch(
    token: Option<&str>,
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = api_url(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    builder = builder.credentials(web_sys::RequestCredentials::Include);
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        // `json` also attaches the application/json content-type header.
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn do_upload(
    token: Option<&str>,
    path: &str,
    form: &web_sys::FormData,
) -> Result<gloo_net::http::Response, ApiError> {
    let mut builder = gloo_net::http::Request::post(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include);
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    builder
        .body(form.clone())
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Build a `Status` error from a failed response, preferring the body text.
#[cfg(feature = "hydrate")]
async fn status_error(resp: &gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = match resp.text().await {
        Ok(text) if !text.is_empty() => text,
        _ => format!("HTTP {status}"),
    };
    ApiError::Status { status, message }
}
