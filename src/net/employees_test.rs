use super::*;
use serde_json::json;

fn row(id: &str) -> serde_json::Value {
    json!({ "id": id, "name": "Ana", "email": "ana@example.com" })
}

#[test]
fn reads_bare_array_responses() {
    let body = json!([row("e-1"), row("e-2")]);
    let list = employees_from_response(&body);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "e-1");
}

#[test]
fn reads_data_enveloped_responses() {
    let body = json!({ "data": [row("e-1")] });
    let list = employees_from_response(&body);
    assert_eq!(list.len(), 1);
}

#[test]
fn non_array_payload_becomes_empty_list() {
    assert!(employees_from_response(&json!({ "message": "nope" })).is_empty());
    assert!(employees_from_response(&json!(null)).is_empty());
}

#[test]
fn skips_rows_that_do_not_deserialize() {
    let body = json!([row("e-1"), { "name": "missing id and email" }]);
    let list = employees_from_response(&body);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "e-1");
}

#[test]
fn dedupe_drops_duplicates_and_empty_ids() {
    let list = employees_from_response(&json!([row("e-1"), row("e-1"), row(""), row("e-2")]));
    let deduped = dedupe_by_id(list);
    let ids: Vec<_> = deduped.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e-1", "e-2"]);
}

#[test]
fn single_employee_accepts_envelope() {
    let bare = row("e-9");
    let enveloped = json!({ "data": row("e-9") });
    assert_eq!(employee_from_response(&bare).map(|e| e.id), Some("e-9".to_owned()));
    assert_eq!(
        employee_from_response(&enveloped).map(|e| e.id),
        Some("e-9".to_owned())
    );
}
