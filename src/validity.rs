use chrono::{DateTime, Utc};

// Validity
//------------------------------------------------------------------------------

/// Whether the access window keyed by `expires_at` is still open at `now`.
///
/// Fail-closed: expiry text that does not parse as an ISO-8601 timestamp is
/// treated as already expired. Malformed expiry data must never grant
/// access.
pub fn is_valid_at(expires_at: &str, now: DateTime<Utc>) -> bool {
    match DateTime::parse_from_rfc3339(expires_at) {
        Ok(expiry) => now <= expiry.with_timezone(&Utc),
        Err(_) => false,
    }
}

/// Wall-clock convenience over [`is_valid_at`], callable standalone at
/// render time without re-running any parser.
pub fn is_currently_valid(expires_at: &str) -> bool {
    is_valid_at(expires_at, Utc::now())
}
