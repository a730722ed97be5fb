use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses a round date given either as a full timestamp or a bare calendar day.
/// A trailing `Z` or UTC offset is accepted and dropped; only ordering matters.
///
/// # Errors
///
/// Will return `Err` if the value matches none of the accepted layouts
pub fn parse_round_date(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("bad date: '{value}'"))
}

/// # Errors
///
/// Will return `Err` if a date string is present but unparseable
pub fn deserialize_optional_round_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_round_date(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[must_use]
pub fn now_naive() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
