//! Lenient timestamp parsing for request bodies and scraped payloads.
//!
//! Clients send either a full RFC 3339 timestamp or a bare `YYYY-MM-DD`
//! date; bare dates are read as midnight UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Error, Deserialize, Deserializer};

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date.
pub fn parse_flexible_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_or_error<E: Error>(raw: &str) -> Result<DateTime<Utc>, E> {
    parse_flexible_datetime(raw)
        .ok_or_else(|| E::custom(format!("invalid date or timestamp: {raw}")))
}

/// `Option<DateTime<Utc>>` field; `null` and a missing field both read as `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.as_deref().map(parse_or_error::<D::Error>).transpose()
}

/// `Option<Option<DateTime<Utc>>>` field for partial updates.
///
/// Pair with `#[serde(default)]`: missing is `None`, `null` is `Some(None)`.
pub fn deserialize_nullable<'de, D>(
    deserializer: D,
) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional(deserializer).map(Some)
}
