//! Bearer token expiry decoding.
//!
//! Tokens are JWTs: `header.payload.signature`, each segment base64url.
//! Only the payload's numeric `exp` claim (seconds since the Unix epoch) is
//! read. The signature is never checked here; the server remains the only
//! authority on token validity. Anything that does not decode cleanly is
//! treated as expired.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Current time in whole seconds since the Unix epoch.
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// The token's `exp` claim, or `None` if the token is malformed.
pub fn expiry(token: &str) -> Option<i64> {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    if header.is_empty() || payload.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?;
    if let Some(secs) = exp.as_i64() {
        return Some(secs);
    }
    let secs = exp.as_f64().filter(|f| f.is_finite())?;
    #[allow(clippy::cast_possible_truncation)]
    Some(secs.floor() as i64)
}

/// Whether `token` is expired at `now` (seconds). Malformed tokens are expired.
pub fn is_expired_at(token: &str, now: i64) -> bool {
    expiry(token).is_none_or(|exp| exp <= now)
}

/// Whether `token` is expired right now.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_unix())
}
