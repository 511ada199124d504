//! Decoding helpers for the string-encoded fields of the wire format.
//!
//! Twelve Data sends prices and volumes as JSON strings and timestamps as
//! `YYYY-MM-DD HH:MM:SS` (intraday) or `YYYY-MM-DD` (daily and coarser) with
//! no zone suffix. Every helper here fails the whole decode on a bad value so
//! that a malformed field can never turn into a silent zero.
//!
//! The `decimal`, `option_decimal` and `datetime` modules pair each decoder
//! with an encoder writing the same wire form, for use with `#[serde(with)]`.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serializer};
use serde_json::Number;

/// Layout for intraday timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout for daily (and coarser) timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalInput {
    String(String),
    Number(Number),
}

fn parse_decimal_value(value: &str) -> Result<Decimal, String> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| format!("invalid decimal value '{}': {}", value, e))
}

/// Parse a timestamp in one of the two documented layouts.
///
/// The layout is chosen by input length, so a date-only value is never
/// accepted where a time is present and vice versa.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    match value.len() {
        19 => NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
            .map_err(|e| format!("invalid datetime '{}': {}", value, e)),
        10 => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|e| format!("invalid date '{}': {}", value, e))
            .and_then(|date| {
                date.and_hms_opt(0, 0, 0)
                    .ok_or_else(|| format!("invalid date '{}'", value))
            }),
        _ => Err(format!(
            "invalid datetime '{}': expected YYYY-MM-DD HH:MM:SS or YYYY-MM-DD",
            value
        )),
    }
}

/// Format a timestamp the way the service expects it in query strings.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match DecimalInput::deserialize(deserializer)? {
        DecimalInput::String(s) => parse_decimal_value(&s).map_err(de::Error::custom),
        DecimalInput::Number(n) => parse_decimal_value(&n.to_string()).map_err(de::Error::custom),
    }
}

pub fn deserialize_option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<DecimalInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(DecimalInput::String(s)) => {
            if s.trim().is_empty() {
                return Ok(None);
            }
            parse_decimal_value(&s)
                .map(Some)
                .map_err(de::Error::custom)
        }
        Some(DecimalInput::Number(n)) => parse_decimal_value(&n.to_string())
            .map(Some)
            .map_err(de::Error::custom),
    }
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(de::Error::custom)
}

pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn serialize_option_decimal<S>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}

pub fn serialize_datetime<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(DATETIME_FORMAT))
}

/// Required decimal as a JSON string.
pub mod decimal {
    pub use super::deserialize_decimal as deserialize;
    pub use super::serialize_decimal as serialize;
}

/// Optional decimal as a JSON string or `null`.
pub mod option_decimal {
    pub use super::deserialize_option_decimal as deserialize;
    pub use super::serialize_option_decimal as serialize;
}

/// Timestamp in the intraday layout.
pub mod datetime {
    pub use super::deserialize_datetime as deserialize;
    pub use super::serialize_datetime as serialize;
}
