//! Attendance history REST client.

use chrono::{Duration, Utc};
use leptos::prelude::{GetUntracked, RwSignal};

use crate::net::api::{self, Method};
use crate::state::attendance::{HistoryRecord, RawAttendanceRecord, build_history};
use crate::state::session::SessionState;

/// Fetch and project the attendance history for the signed-in user's
/// scope. Missing range bounds default to the trailing 30 days.
///
/// Requires a signed-in user; failures degrade to an empty list so any
/// cached history stays usable.
pub async fn fetch_history(
    session: RwSignal<SessionState>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<HistoryRecord> {
    let Some(user_id) = session.get_untracked().user.map(|u| u.id) else {
        return Vec::new();
    };

    let today = Utc::now().date_naive();
    let end = end_date
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
    let start = start_date
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| (today - Duration::days(30)).format("%Y-%m-%d").to_string());

    let path = format!(
        "/admin/attendance/all?userId={}&startDate={}&endDate={}",
        urlencoding::encode(&user_id),
        urlencoding::encode(&start),
        urlencoding::encode(&end),
    );

    match api::api_fetch(session, Method::Get, &path, None).await {
        Ok(body) => {
            // Anything but an array of clock events is treated as no data.
            let records: Vec<RawAttendanceRecord> = serde_json::from_value(body).unwrap_or_default();
            build_history(&records)
        }
        Err(err) => {
            leptos::logging::warn!("failed to fetch attendance history: {err}");
            Vec::new()
        }
    }
}
