use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wire::{datetime, decimal, option_decimal};

/// 52-week range block of a quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiftyTwoWeek {
    #[serde(default, with = "option_decimal")]
    pub low: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub high: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub low_change: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub high_change: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub low_change_percent: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub high_change_percent: Option<Decimal>,
    /// Human-readable range, e.g. "103.099998 - 157.259995"
    #[serde(default)]
    pub range: Option<String>,
}

/// Latest quote for an instrument (`/quote`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub mic_code: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,

    /// Start of the bar the quote describes, in the exchange's zone
    #[serde(with = "datetime")]
    pub datetime: NaiveDateTime,

    /// Unix seconds of the last update
    #[serde(default)]
    pub timestamp: Option<i64>,

    #[serde(with = "decimal")]
    pub open: Decimal,
    #[serde(with = "decimal")]
    pub high: Decimal,
    #[serde(with = "decimal")]
    pub low: Decimal,
    #[serde(with = "decimal")]
    pub close: Decimal,

    /// Absent for forex
    #[serde(default, with = "option_decimal")]
    pub volume: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub previous_close: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub change: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub percent_change: Option<Decimal>,
    #[serde(default, with = "option_decimal")]
    pub average_volume: Option<Decimal>,
    #[serde(default)]
    pub is_market_open: Option<bool>,
    #[serde(default)]
    pub fifty_two_week: Option<FiftyTwoWeek>,
}
