use super::*;

fn event(timestamp: &str, status: &str) -> RawAttendanceRecord {
    RawAttendanceRecord {
        timestamp: timestamp.to_owned(),
        status: status.to_owned(),
        user: Some(AttendanceUser {
            id: "u-1".to_owned(),
            email: "budi@example.com".to_owned(),
            name: "Budi".to_owned(),
            role: "EMPLOYEE".to_owned(),
        }),
    }
}

#[test]
fn groups_events_into_days_newest_first() {
    let records = vec![
        event("2024-03-01T07:45:00Z", "CLOCK_IN"),
        event("2024-03-01T17:02:00Z", "CLOCK_OUT"),
        event("2024-03-04T08:20:00Z", "CLOCK_IN"),
    ];

    let history = build_history(&records);
    assert_eq!(history.len(), 2);

    assert_eq!(history[0].date, "2024-03-04");
    assert_eq!(history[0].id, 1);
    assert_eq!(history[1].date, "2024-03-01");
    assert_eq!(history[1].id, 2);
}

#[test]
fn clock_in_at_or_before_eight_is_on_time() {
    let on_time = build_history(&[event("2024-03-01T08:00:00Z", "CLOCK_IN")]);
    assert_eq!(on_time[0].status, DayStatus::OnTime);

    let early = build_history(&[event("2024-03-01T06:58:00Z", "CLOCK_IN")]);
    assert_eq!(early[0].status, DayStatus::OnTime);

    let late = build_history(&[event("2024-03-01T08:00:01Z", "CLOCK_IN")]);
    assert_eq!(late[0].status, DayStatus::Late);
}

#[test]
fn day_without_clock_in_is_absent() {
    let history = build_history(&[event("2024-03-01T17:00:00Z", "CLOCK_OUT")]);
    assert_eq!(history[0].status, DayStatus::Absent);
    assert_eq!(history[0].clock_in, "-");
    assert_eq!(history[0].clock_out, "17:00");
}

#[test]
fn formats_times_as_hours_and_minutes() {
    let history = build_history(&[
        event("2024-03-01T07:45:30Z", "CLOCK_IN"),
        event("2024-03-01T17:02:59Z", "CLOCK_OUT"),
    ]);
    assert_eq!(history[0].clock_in, "07:45");
    assert_eq!(history[0].clock_out, "17:02");
}

#[test]
fn skips_events_with_bad_timestamps_or_status() {
    let mut bad_time = event("yesterday", "CLOCK_IN");
    bad_time.user = None;
    let mut no_status = event("2024-03-01T08:00:00Z", "");
    no_status.user = None;

    assert!(build_history(&[bad_time, no_status]).is_empty());
}

#[test]
fn takes_user_from_the_days_events() {
    let history = build_history(&[event("2024-03-01T07:45:00Z", "CLOCK_IN")]);
    assert_eq!(history[0].user.name, "Budi");

    let mut anonymous = event("2024-03-02T07:45:00Z", "CLOCK_IN");
    anonymous.user = None;
    let history = build_history(&[anonymous]);
    assert_eq!(history[0].user, AttendanceUser::default());
}

#[test]
fn first_event_of_each_kind_wins() {
    let history = build_history(&[
        event("2024-03-01T07:45:00Z", "CLOCK_IN"),
        event("2024-03-01T09:15:00Z", "CLOCK_IN"),
    ]);
    assert_eq!(history[0].clock_in, "07:45");
    assert_eq!(history[0].status, DayStatus::OnTime);
}

#[test]
fn snapshot_round_trips_through_json() {
    let history = build_history(&[event("2024-03-01T07:45:00Z", "CLOCK_IN")]);
    let state = AttendanceState {
        history,
        loading: false,
    };

    store(&state);

    let snapshot = AttendanceSnapshot {
        history: state.history.clone(),
    };
    let raw = serde_json::to_string(&snapshot).expect("serialize");
    assert!(raw.contains("clockIn"));
    let restored: AttendanceSnapshot = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(restored.history, state.history);
}
