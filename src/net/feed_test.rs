use super::*;
use serde_json::json;

#[test]
fn parses_snapshot_events() {
    let raw = json!({
        "type": "snapshot",
        "entries": { "n-1": { "userName": "Budi" } }
    })
    .to_string();

    match parse_feed_event(&raw) {
        Some(FeedEvent::Snapshot(entries)) => {
            assert!(entries.get("n-1").is_some());
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn parses_push_messages_as_toasts() {
    let raw = json!({ "type": "message", "title": "t", "body": "b" }).to_string();
    assert!(matches!(parse_feed_event(&raw), Some(FeedEvent::Toast(_))));
}

#[test]
fn ignores_unknown_and_invalid_frames() {
    assert_eq!(parse_feed_event(r#"{"type":"ping"}"#), None);
    assert_eq!(parse_feed_event("not json"), None);
    assert_eq!(parse_feed_event(r#"{"entries":{}}"#), None);
}

#[test]
fn mark_read_payload_carries_action_and_ids() {
    let payload = mark_read_payload(&["n-1".to_owned(), "n-2".to_owned()]);
    let value: serde_json::Value = serde_json::from_str(&payload).expect("json");
    assert_eq!(value["action"], "markRead");
    assert_eq!(value["ids"], json!(["n-1", "n-2"]));
}

#[test]
fn feed_url_swaps_scheme_and_encodes_token() {
    let url = feed_url("tok en");
    assert!(url.starts_with("ws"));
    assert!(!url.starts_with("http"));
    assert!(url.ends_with("/notifications/feed?token=tok%20en"));
}
