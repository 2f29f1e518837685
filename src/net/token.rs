//! Access-token claim codec.
//!
//! Decodes the payload segment of a compact dot-separated token without
//! verifying its signature; the console only needs the embedded expiry.
//! Verification is the server's job, and a forged expiry merely changes
//! when the first 401 arrives.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use serde_json::{Map, Value};

/// Decode the claim set embedded in a three-segment token.
///
/// Returns `None` on any malformed input: wrong segment count, invalid
/// base64url, or a payload that is not a JSON object. Never panics.
pub fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Read the `exp` claim (seconds since the epoch) from a claim set.
///
/// Some issuers emit `exp` as a float; both spellings are accepted.
pub fn expiry(claims: &Map<String, Value>) -> Option<i64> {
    let exp = claims.get("exp")?;
    if let Some(seconds) = exp.as_i64() {
        return Some(seconds);
    }
    #[allow(clippy::cast_possible_truncation)]
    let truncated = exp.as_f64().map(|f| f as i64);
    truncated
}

/// Render an epoch-seconds expiry as an ISO 8601 UTC timestamp.
pub fn expiry_to_iso(exp: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(exp, 0)
        .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
