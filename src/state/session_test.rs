use super::*;
use base64::Engine;
use serde_json::json;

fn segment(value: &serde_json::Value) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(value.to_string())
}

fn token_with(claims: &serde_json::Value) -> String {
    format!("header.{}.signature", segment(claims))
}

fn admin_user() -> serde_json::Value {
    json!({
        "id": "u-1",
        "email": "admin@example.com",
        "name": "Admin",
        "role": "HRD_ADMIN"
    })
}

#[test]
fn set_auth_then_read_returns_supplied_values() {
    let user = Profile {
        id: "u-1".to_owned(),
        email: "admin@example.com".to_owned(),
        name: "Admin".to_owned(),
        role: ADMIN_ROLE.to_owned(),
        position: None,
        phone: None,
        photo_url: None,
    };

    let mut state = SessionState::default();
    state.set_auth(
        "tok-1".to_owned(),
        "2030-01-01T00:00:00.000Z".to_owned(),
        Some(user.clone()),
    );

    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.expires_at.as_deref(), Some("2030-01-01T00:00:00.000Z"));
    assert_eq!(state.user, Some(user));
    assert!(state.is_authenticated());
}

#[test]
fn set_auth_without_user_preserves_previous_user() {
    let user = Profile {
        id: "u-1".to_owned(),
        email: "admin@example.com".to_owned(),
        name: "Admin".to_owned(),
        role: ADMIN_ROLE.to_owned(),
        position: None,
        phone: None,
        photo_url: None,
    };

    let mut state = SessionState::default();
    state.set_auth("tok-1".to_owned(), "e-1".to_owned(), Some(user.clone()));
    state.set_auth("tok-2".to_owned(), "e-2".to_owned(), None);

    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert_eq!(state.expires_at.as_deref(), Some("e-2"));
    assert_eq!(state.user, Some(user));
}

#[test]
fn clear_resets_to_anonymous() {
    let mut state = SessionState::default();
    state.set_auth("tok".to_owned(), "exp".to_owned(), None);
    state.clear();

    assert_eq!(state, SessionState::default());
    assert!(!state.is_authenticated());
}

#[test]
fn parse_login_accepts_bare_and_enveloped_payloads() {
    let token = token_with(&json!({ "exp": 1_893_456_000 }));
    let bare = json!({
        "accessToken": token,
        "refreshToken": "refresh-1",
        "user": admin_user()
    });
    let enveloped = json!({ "data": bare });

    for body in [&bare, &enveloped] {
        let data = parse_login_response(body).expect("login data");
        assert_eq!(data.token, token);
        assert_eq!(data.expires_at, "2030-01-01T00:00:00.000Z");
        assert_eq!(data.refresh_token.as_deref(), Some("refresh-1"));
        assert_eq!(data.user.id, "u-1");
    }
}

#[test]
fn parse_login_rejects_non_admin_role() {
    let mut user = admin_user();
    user["role"] = json!("EMPLOYEE");
    let body = json!({
        "accessToken": token_with(&json!({ "exp": 1_893_456_000 })),
        "user": user
    });

    assert_eq!(parse_login_response(&body), Err(AuthError::AccessDenied));
}

#[test]
fn parse_login_requires_user_and_token() {
    let token = token_with(&json!({ "exp": 1_893_456_000 }));

    assert_eq!(
        parse_login_response(&json!({ "accessToken": token })),
        Err(AuthError::MalformedResponse("missing user"))
    );
    assert_eq!(
        parse_login_response(&json!({ "user": admin_user() })),
        Err(AuthError::MalformedResponse("missing access token"))
    );
}

#[test]
fn parse_login_requires_decodable_expiry() {
    let no_exp = json!({
        "accessToken": token_with(&json!({ "sub": "u-1" })),
        "user": admin_user()
    });
    assert_eq!(
        parse_login_response(&no_exp),
        Err(AuthError::MalformedResponse("token has no expiry"))
    );

    let garbage = json!({
        "accessToken": "not-a-token",
        "user": admin_user()
    });
    assert_eq!(
        parse_login_response(&garbage),
        Err(AuthError::MalformedResponse("token has no expiry"))
    );
}

#[test]
fn parse_refresh_accepts_both_token_spellings() {
    let camel = json!({ "accessToken": "tok-a", "refreshToken": "r-2" });
    assert_eq!(
        parse_refresh_response(&camel),
        Some(("tok-a".to_owned(), Some("r-2".to_owned())))
    );

    let snake = json!({ "access_token": "tok-b" });
    assert_eq!(
        parse_refresh_response(&snake),
        Some(("tok-b".to_owned(), None))
    );
}

#[test]
fn parse_refresh_requires_a_token() {
    assert_eq!(parse_refresh_response(&json!({ "refreshToken": "r" })), None);
    assert_eq!(parse_refresh_response(&json!({})), None);
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = SessionSnapshot {
        token: Some("tok".to_owned()),
        expires_at: Some("2030-01-01T00:00:00.000Z".to_owned()),
        user: Some(Profile {
            id: "u-1".to_owned(),
            email: "admin@example.com".to_owned(),
            name: "Admin".to_owned(),
            role: ADMIN_ROLE.to_owned(),
            position: Some("HR Lead".to_owned()),
            phone: None,
            photo_url: None,
        }),
    };

    let raw = serde_json::to_string(&snapshot).expect("serialize");
    assert!(raw.contains("expiresAt"));

    let restored: SessionSnapshot = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(restored.token, snapshot.token);
    assert_eq!(restored.expires_at, snapshot.expires_at);
    assert_eq!(restored.user, snapshot.user);
}
