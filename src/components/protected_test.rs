use super::*;

#[test]
fn keeps_same_origin_paths_with_query() {
    assert_eq!(
        sanitize_return_path("/admin/employees?page=2"),
        "/admin/employees?page=2"
    );
    assert_eq!(sanitize_return_path("/"), "/");
}

#[test]
fn collapses_protocol_relative_urls() {
    assert_eq!(sanitize_return_path("//evil.com"), "/");
    assert_eq!(sanitize_return_path("//evil.com/admin"), "/");
}

#[test]
fn collapses_paths_without_a_leading_slash() {
    assert_eq!(sanitize_return_path("admin/employees"), "/");
    assert_eq!(sanitize_return_path("https://evil.com"), "/");
    assert_eq!(sanitize_return_path(""), "/");
}

#[test]
fn redirect_target_url_encodes_the_return_path() {
    assert_eq!(
        signin_redirect_target("/admin/attendance?start=2024-01-01&end=2024-02-01"),
        "/signin?redirect=%2Fadmin%2Fattendance%3Fstart%3D2024-01-01%26end%3D2024-02-01"
    );
}

#[test]
fn redirect_target_sanitizes_before_encoding() {
    assert_eq!(signin_redirect_target("//evil.com"), "/signin?redirect=%2F");
}
