use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("'{value}' is not an RFC 3339 date: {source}")]
pub struct DateParseError {
    pub value: String,
    pub source: chrono::ParseError,
}

/// Parses a date as OneView writes them, e.g. `2021-06-01T00:00:00.000Z`.
pub fn ov_date(value: &str) -> Result<DateTime<FixedOffset>, DateParseError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| DateParseError {
        value: value.to_string(),
        source,
    })
}
