use super::*;

fn segment(value: &serde_json::Value) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(value.to_string())
}

fn token_with(claims: &serde_json::Value) -> String {
    let header = segment(&serde_json::json!({ "alg": "HS256", "typ": "JWT" }));
    format!("{header}.{}.signature", segment(claims))
}

#[test]
fn decodes_claims_with_expiry() {
    let token = token_with(&serde_json::json!({ "sub": "u-1", "exp": 1_893_456_000 }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.get("sub").and_then(|v| v.as_str()), Some("u-1"));
    assert_eq!(expiry(&claims), Some(1_893_456_000));
}

#[test]
fn accepts_float_expiry() {
    let token = token_with(&serde_json::json!({ "exp": 1_893_456_000.5 }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(expiry(&claims), Some(1_893_456_000));
}

#[test]
fn rejects_wrong_segment_count() {
    assert!(decode_claims("").is_none());
    assert!(decode_claims("one.two").is_none());
    assert!(decode_claims("a.b.c.d").is_none());
}

#[test]
fn rejects_invalid_base64() {
    assert!(decode_claims("header.!!!.signature").is_none());
}

#[test]
fn rejects_non_json_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("not json");
    assert!(decode_claims(&format!("h.{payload}.s")).is_none());
}

#[test]
fn rejects_non_object_payload() {
    let payload = segment(&serde_json::json!([1, 2, 3]));
    assert!(decode_claims(&format!("h.{payload}.s")).is_none());
}

#[test]
fn expiry_missing_is_none() {
    let token = token_with(&serde_json::json!({ "sub": "u-1" }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(expiry(&claims), None);
}

#[test]
fn expiry_renders_as_utc_iso() {
    assert_eq!(
        expiry_to_iso(1_893_456_000).as_deref(),
        Some("2030-01-01T00:00:00.000Z")
    );
}
