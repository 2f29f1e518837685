//! Session store: the access-token lifecycle state machine.
//!
//! The session is either `Anonymous` (no token) or `Authenticated` (token,
//! expiry, and user present); a refresh is only ever an in-flight operation,
//! never a stored state. All transitions go through [`SessionState::set_auth`]
//! and [`SessionState::clear`]; the async operations below drive them from
//! the auth endpoints and mirror every transition into localStorage.
//!
//! The expiry is always derived from the token's own `exp` claim. Expiry is
//! not checked proactively anywhere; it is discovered reactively when a
//! request comes back 401 and the fetch wrapper asks for a refresh.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::net::token;
use crate::net::types::Profile;
use crate::util::storage;

/// Role required to use the console.
pub const ADMIN_ROLE: &str = "HRD_ADMIN";

/// localStorage key for the persisted session snapshot.
pub const SESSION_KEY: &str = "auth-storage-admin";

/// localStorage key for the long-lived refresh credential. Kept in its own
/// slot so the session blob and the credential can be cleared independently.
pub const REFRESH_KEY: &str = "refreshToken-admin";

/// Authentication state for the signed-in administrator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub expires_at: Option<String>,
    pub user: Option<Profile>,
    /// Whether the persisted snapshot has been loaded. Stays `false` during
    /// SSR so protected routes never render on the server.
    pub hydrated: bool,
}

impl SessionState {
    /// Replace the token and expiry; the user is replaced only when given.
    pub fn set_auth(&mut self, token: String, expires_at: String, user: Option<Profile>) {
        self.token = Some(token);
        self.expires_at = Some(expires_at);
        if let Some(user) = user {
            self.user = Some(user);
        }
    }

    /// Drop back to the anonymous state.
    pub fn clear(&mut self) {
        self.token = None;
        self.expires_at = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// The subset of [`SessionState`] that survives a page reload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSnapshot {
    token: Option<String>,
    expires_at: Option<String>,
    user: Option<Profile>,
}

/// Sign-in and refresh failures surfaced to the UI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("access denied: only administrators can sign in here")]
    AccessDenied,
    #[error("incomplete response from server: {0}")]
    MalformedResponse(&'static str),
    #[error("session expired, please sign in again")]
    SessionExpired,
    #[error("network error: {0}")]
    Network(String),
}

/// Validated payload of a successful login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginData {
    pub token: String,
    pub expires_at: String,
    pub refresh_token: Option<String>,
    pub user: Profile,
}

/// Validate a login response body. The payload may arrive bare or wrapped
/// in a `data` envelope.
///
/// # Errors
///
/// `MalformedResponse` when the user object, access token, or token expiry
/// is missing or unreadable; `AccessDenied` when the user's role is not
/// the administrative one.
pub fn parse_login_response(body: &Value) -> Result<LoginData, AuthError> {
    let data = body.get("data").filter(|d| d.is_object()).unwrap_or(body);

    let user_value = data
        .get("user")
        .ok_or(AuthError::MalformedResponse("missing user"))?;
    let user: Profile = serde_json::from_value(user_value.clone())
        .map_err(|_| AuthError::MalformedResponse("missing user"))?;
    if user.role != ADMIN_ROLE {
        return Err(AuthError::AccessDenied);
    }

    let token = data
        .get("accessToken")
        .and_then(Value::as_str)
        .ok_or(AuthError::MalformedResponse("missing access token"))?
        .to_owned();

    let expires_at =
        expiry_iso_for(&token).ok_or(AuthError::MalformedResponse("token has no expiry"))?;

    let refresh_token = data
        .get("refreshToken")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);

    Ok(LoginData {
        token,
        expires_at,
        refresh_token,
        user,
    })
}

/// Pull the rotated token pair out of a refresh response. Both the
/// `accessToken` and `access_token` spellings are accepted.
pub fn parse_refresh_response(body: &Value) -> Option<(String, Option<String>)> {
    let token = body
        .get("accessToken")
        .or_else(|| body.get("access_token"))
        .and_then(Value::as_str)?
        .to_owned();
    let rotated = body
        .get("refreshToken")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);
    Some((token, rotated))
}

/// Compute the ISO expiry embedded in an access token's claims.
fn expiry_iso_for(token_str: &str) -> Option<String> {
    let claims = token::decode_claims(token_str)?;
    let exp = token::expiry(&claims)?;
    token::expiry_to_iso(exp)
}

/// Restore the persisted session snapshot.
///
/// Called exactly once while the application root is being constructed, so
/// a fully-formed session value exists before any protected route can
/// render. An unreadable snapshot is discarded rather than propagated.
pub fn load() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        let mut state = SessionState {
            hydrated: true,
            ..SessionState::default()
        };
        if let Some(raw) = storage::get_item(SESSION_KEY) {
            match serde_json::from_str::<SessionSnapshot>(&raw) {
                Ok(snapshot) => {
                    state.token = snapshot.token;
                    state.expires_at = snapshot.expires_at;
                    state.user = snapshot.user;
                }
                Err(err) => {
                    leptos::logging::warn!("discarding unreadable session snapshot: {err}");
                    storage::remove_item(SESSION_KEY);
                }
            }
        }
        state
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionState::default()
    }
}

/// Persist the current snapshot of `session`. Public so flows that replace
/// the stored user (profile edits) can re-persist after updating it.
pub fn persist(session: RwSignal<SessionState>) {
    session.with_untracked(store_snapshot);
}

fn store_snapshot(state: &SessionState) {
    let snapshot = SessionSnapshot {
        token: state.token.clone(),
        expires_at: state.expires_at.clone(),
        user: state.user.clone(),
    };
    if let Ok(raw) = serde_json::to_string(&snapshot) {
        storage::set_item(SESSION_KEY, &raw);
    }
}

/// Exchange credentials for an access token and transition to
/// `Authenticated`.
///
/// # Errors
///
/// `InvalidCredentials` when the endpoint rejects the login, `AccessDenied`
/// when the account is not an administrator, `MalformedResponse` when the
/// payload is unusable, `Network` on transport failure.
pub async fn sign_in(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;

        let resp = gloo_net::http::Request::post(&api::api_url("/auth/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(AuthError::InvalidCredentials);
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|_| AuthError::MalformedResponse("unreadable body"))?;
        let data = parse_login_response(&body)?;

        if let Some(refresh) = &data.refresh_token {
            storage::set_item(REFRESH_KEY, refresh);
        }

        session.update(|s| s.set_auth(data.token, data.expires_at, Some(data.user)));
        persist(session);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, email, password);
        Err(AuthError::Network(
            "sign-in requires a browser context".to_owned(),
        ))
    }
}

/// Sign out: best-effort server notification, then local teardown.
///
/// The teardown always runs, so sign-out cannot fail: the server call's
/// outcome is only logged. Safe to call while already anonymous.
pub async fn sign_out(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;

        let sent = gloo_net::http::Request::post(&api::api_url("/auth/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        if let Err(err) = sent {
            leptos::logging::warn!("logout request failed: {err}");
        }
    }

    storage::remove_item(SESSION_KEY);
    storage::remove_item(REFRESH_KEY);
    storage::remove_item(crate::state::attendance::STORAGE_KEY);
    session.update(SessionState::clear);
}

/// Exchange the persisted refresh credential for a new access token.
///
/// Returns `false` and clears the session on any failure; callers never
/// see an error beyond the boolean. Each caller gets its own network
/// attempt; concurrent calls are not coalesced.
pub async fn refresh_access_token(session: RwSignal<SessionState>) -> bool {
    match try_refresh(session).await {
        Ok(()) => true,
        Err(err) => {
            leptos::logging::warn!("token refresh failed: {err}");
            storage::remove_item(REFRESH_KEY);
            session.update(SessionState::clear);
            persist(session);
            false
        }
    }
}

async fn try_refresh(session: RwSignal<SessionState>) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;

        // Without a credential there is nothing to exchange; fail before
        // touching the network.
        let refresh_token = storage::get_item(REFRESH_KEY).ok_or(AuthError::SessionExpired)?;

        let resp = gloo_net::http::Request::post(&api::api_url("/auth/refresh"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(AuthError::SessionExpired);
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|_| AuthError::MalformedResponse("unreadable body"))?;
        let (token, rotated) = parse_refresh_response(&body)
            .ok_or(AuthError::MalformedResponse("missing access token"))?;

        let expires_at =
            expiry_iso_for(&token).ok_or(AuthError::MalformedResponse("token has no expiry"))?;

        if let Some(rotated) = rotated {
            storage::set_item(REFRESH_KEY, &rotated);
        }

        // A refresh only rotates the token; the known user profile stays.
        session.update(|s| s.set_auth(token, expires_at, None));
        persist(session);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(AuthError::SessionExpired)
    }
}
