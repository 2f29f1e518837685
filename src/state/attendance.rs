//! Attendance history store and the raw clock-event projection.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key for the cached history; sign-out clears it.
pub const STORAGE_KEY: &str = "attendance-storage";

/// Clock-ins after this time of day count as late.
const WORK_START: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// A raw clock event as returned by `/admin/attendance/all`.
#[derive(Clone, Debug, Deserialize)]
pub struct RawAttendanceRecord {
    pub timestamp: String,
    pub status: String,
    #[serde(default)]
    pub user: Option<AttendanceUser>,
}

/// The employee a clock event belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Outcome of one attendance day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    OnTime,
    Late,
    Absent,
}

impl DayStatus {
    pub fn label(self) -> &'static str {
        match self {
            DayStatus::OnTime => "On time",
            DayStatus::Late => "Late",
            DayStatus::Absent => "Absent",
        }
    }
}

/// One projected attendance day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: usize,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub status: DayStatus,
    pub user: AttendanceUser,
}

/// Attendance page state, cached across reloads.
#[derive(Clone, Debug, Default)]
pub struct AttendanceState {
    pub history: Vec<HistoryRecord>,
    pub loading: bool,
}

/// The cached subset written to localStorage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct AttendanceSnapshot {
    history: Vec<HistoryRecord>,
}

/// Restore the cached history, if any.
pub fn load() -> AttendanceState {
    let mut state = AttendanceState::default();
    if let Some(raw) = storage::get_item(STORAGE_KEY) {
        if let Ok(snapshot) = serde_json::from_str::<AttendanceSnapshot>(&raw) {
            state.history = snapshot.history;
        }
    }
    state
}

/// Persist the current history.
pub fn store(state: &AttendanceState) {
    let snapshot = AttendanceSnapshot {
        history: state.history.clone(),
    };
    if let Ok(raw) = serde_json::to_string(&snapshot) {
        storage::set_item(STORAGE_KEY, &raw);
    }
}

/// Group raw clock events into per-day history rows, newest day first.
///
/// The first `CLOCK_IN`/`CLOCK_OUT` event of a day supplies the in/out
/// times (`HH:MM`, `-` when missing); a day with no clock-in is `Absent`,
/// a clock-in after 08:00 is `Late`. Events whose timestamp is not RFC
/// 3339 are skipped.
pub fn build_history(records: &[RawAttendanceRecord]) -> Vec<HistoryRecord> {
    use std::collections::BTreeMap;

    let mut by_date: BTreeMap<String, Vec<&RawAttendanceRecord>> = BTreeMap::new();
    for record in records {
        if record.status.is_empty() || event_time(record).is_none() {
            continue;
        }
        let date = record
            .timestamp
            .split('T')
            .next()
            .unwrap_or_default()
            .to_owned();
        by_date.entry(date).or_default().push(record);
    }

    let mut history: Vec<HistoryRecord> = Vec::new();
    for (date, events) in by_date.iter().rev() {
        let clock_in = events.iter().find(|r| r.status == "CLOCK_IN").copied();
        let clock_out = events.iter().find(|r| r.status == "CLOCK_OUT").copied();

        let clock_in_time = clock_in.and_then(event_time);
        let clock_out_time = clock_out.and_then(event_time);

        let status = match clock_in_time {
            Some(t) if t <= WORK_START => DayStatus::OnTime,
            Some(_) => DayStatus::Late,
            None => DayStatus::Absent,
        };

        let user = clock_in
            .or(clock_out)
            .and_then(|r| r.user.clone())
            .unwrap_or_default();

        history.push(HistoryRecord {
            id: history.len() + 1,
            date: date.clone(),
            clock_in: format_time(clock_in_time),
            clock_out: format_time(clock_out_time),
            status,
            user,
        });
    }
    history
}

fn event_time(record: &RawAttendanceRecord) -> Option<NaiveTime> {
    chrono::DateTime::parse_from_rfc3339(&record.timestamp)
        .ok()
        .map(|dt| dt.time())
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| "-".to_owned(), |t| t.format("%H:%M").to_string())
}
