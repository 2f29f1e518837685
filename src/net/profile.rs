//! Profile self-service REST client.

use leptos::prelude::RwSignal;
use serde::Serialize;

use crate::net::api::{self, ApiError, Method};
use crate::net::types::Profile;
use crate::state::session::SessionState;

/// Payload for updating the signed-in administrator's profile.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub position: Option<String>,
    pub phone: Option<String>,
}

/// Payload for the change-password endpoint.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Update the signed-in profile. Returns the refreshed profile, or `None`
/// when the update failed or the response carried no profile.
pub async fn update_profile(
    session: RwSignal<SessionState>,
    request: &UpdateProfileRequest,
) -> Option<Profile> {
    let body = serde_json::to_value(request).ok()?;
    let resp = api::api_fetch(session, Method::Put, "/admin/profile", Some(&body))
        .await
        .map_err(|err| leptos::logging::warn!("failed to update profile: {err}"))
        .ok()?;
    let data = resp.get("data").filter(|d| d.is_object()).unwrap_or(&resp);
    serde_json::from_value(data.clone()).ok()
}

/// Upload a new profile photo; returns the stored photo URL.
#[cfg(feature = "hydrate")]
pub async fn upload_photo(session: RwSignal<SessionState>, file: &web_sys::File) -> Option<String> {
    let form = web_sys::FormData::new().ok()?;
    form.append_with_blob("file", file).ok()?;

    let resp = api::api_upload(session, "/admin/profile/photo", &form)
        .await
        .map_err(|err| leptos::logging::warn!("photo upload failed: {err}"))
        .ok()?;
    let data = resp.get("data").filter(|d| d.is_object()).unwrap_or(&resp);
    data.get("photoUrl")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

/// Change the signed-in administrator's password.
///
/// # Errors
///
/// Propagates the fetch wrapper's error so the dialog can show the
/// server-provided message.
pub async fn change_password(
    session: RwSignal<SessionState>,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Network(e.to_string()))?;
    api::api_fetch(session, Method::Post, "/auth/change-password", Some(&body)).await?;
    Ok(())
}
