//! Form input helpers shared by the sign-in and employee forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Loose email shape check: non-empty local part, an `@`, and a dotted
/// domain. Intentionally permissive; the server is the authority.
pub fn email_looks_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !domain.contains(char::is_whitespace)
}

/// Map an empty (or whitespace-only) form field to `None`.
pub fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
