use super::*;
use serde_json::json;

fn snapshot() -> serde_json::Value {
    json!({
        "n-1": {
            "userName": "Budi",
            "changes": { "phone": { "old": "1", "new": "2" } },
            "timestamp": 1_000,
            "isRead": false
        },
        "n-2": {
            "userName": "Sari",
            "changes": { "position": { "old": "a", "new": "b" } },
            "timestamp": 3_000,
            "isRead": true
        },
        "n-3": {
            "timestamp": 2_000
        }
    })
}

#[test]
fn projects_entries_newest_first() {
    let items = project_entries(&snapshot());
    let ids: Vec<_> = items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["n-2", "n-3", "n-1"]);
}

#[test]
fn projects_titles_and_bodies_with_fallbacks() {
    let items = project_entries(&snapshot());

    let n1 = items.iter().find(|n| n.id == "n-1").expect("n-1");
    assert_eq!(n1.title, "Profile updated by Budi");
    assert_eq!(n1.body, "Changed field: phone");

    let n3 = items.iter().find(|n| n.id == "n-3").expect("n-3");
    assert_eq!(n3.title, "Profile updated by User");
    assert_eq!(n3.body, "Changed field: unknown field");
    assert!(!n3.is_read);
}

#[test]
fn parses_rfc3339_timestamps() {
    let entries = json!({
        "n-1": { "timestamp": "1970-01-01T00:00:01Z" }
    });
    let items = project_entries(&entries);
    assert_eq!(items[0].timestamp, 1_000);
}

#[test]
fn non_object_snapshot_clears_the_list() {
    let mut state = NotificationsState::default();
    state.apply_snapshot(&snapshot());
    assert!(!state.items.is_empty());

    state.apply_snapshot(&json!(null));
    assert!(state.items.is_empty());
    assert_eq!(state.unread_count, 0);
}

#[test]
fn unread_count_tracks_read_flags() {
    let mut state = NotificationsState::default();
    state.apply_snapshot(&snapshot());
    assert_eq!(state.unread_count, 2);
    assert_eq!(state.unread_ids(), vec!["n-3".to_owned(), "n-1".to_owned()]);

    state.mark_read("n-1");
    assert_eq!(state.unread_count, 1);

    state.mark_all_read();
    assert_eq!(state.unread_count, 0);
    assert!(state.unread_ids().is_empty());
}

#[test]
fn toast_uses_payload_fields_when_present() {
    let toast = toast_from_message(&json!({
        "id": "m-1",
        "title": "Profile updated by Budi",
        "body": "Changed field: phone",
        "timestamp": 42
    }));
    assert_eq!(toast.id, "m-1");
    assert_eq!(toast.timestamp, 42);
    assert!(!toast.is_read);
}

#[test]
fn toast_generates_fallbacks_for_empty_payloads() {
    let toast = toast_from_message(&json!({}));
    assert!(!toast.id.is_empty());
    assert_eq!(toast.title, "New notification");
    assert_eq!(toast.body, "You have a new notification");
    assert_eq!(toast.timestamp, 0);
}
