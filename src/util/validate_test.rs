use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(email_looks_valid("admin@example.com"));
    assert!(email_looks_valid("a.b@hr.example.local"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!email_looks_valid(""));
    assert!(!email_looks_valid("admin"));
    assert!(!email_looks_valid("admin@example"));
    assert!(!email_looks_valid("@example.com"));
    assert!(!email_looks_valid("admin@.com"));
    assert!(!email_looks_valid("ad min@example.com"));
}

#[test]
fn none_if_empty_trims_and_maps() {
    assert_eq!(none_if_empty(""), None);
    assert_eq!(none_if_empty("   "), None);
    assert_eq!(none_if_empty(" HR Lead "), Some("HR Lead".to_owned()));
}
