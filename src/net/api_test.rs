use super::*;

#[test]
fn api_url_joins_absolute_paths() {
    assert_eq!(api_url("/auth/login"), format!("{API_BASE}/auth/login"));
}

#[test]
fn api_url_inserts_missing_slash() {
    assert_eq!(
        api_url("admin/employees"),
        format!("{API_BASE}/admin/employees")
    );
}

#[test]
fn parse_body_reads_valid_json() {
    let value = parse_body(r#"{"id":"e-1","name":"Ana"}"#);
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some("e-1"));
}

#[test]
fn parse_body_maps_empty_to_empty_object() {
    assert_eq!(parse_body(""), serde_json::json!({}));
}

#[test]
fn parse_body_wraps_non_json_text() {
    assert_eq!(parse_body("plain text"), serde_json::json!({ "raw": "plain text" }));
}

#[test]
fn status_error_message_is_displayed_verbatim() {
    let err = ApiError::Status {
        status: 403,
        message: "forbidden".to_owned(),
    };
    assert_eq!(err.to_string(), "forbidden");
}
