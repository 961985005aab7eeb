//! Timestamps and their stored text form.

use chrono::{DateTime, ParseError, SecondsFormat, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as RFC 3339 with microsecond precision and a `Z` suffix.
#[must_use]
pub fn format(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse an RFC 3339 timestamp with any offset, normalised to UTC.
///
/// # Errors
///
/// Returns [`ParseError`] when `raw` is not valid RFC 3339.
pub fn parse(raw: &str) -> Result<Timestamp, ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|ts| ts.to_utc())
}
