//! Series payloads: OHLCV time series and the indicator endpoints.
//!
//! All of them share the same envelope, a [`Meta`] block plus a `values` array
//! ordered newest first, so they are expressed as one generic [`Series`].

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::meta::Meta;
use super::wire::{datetime, decimal, option_decimal};

/// A `meta` block plus its data points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series<V> {
    pub meta: Meta,
    pub values: Vec<V>,
    /// `"ok"` on success
    #[serde(default)]
    pub status: Option<String>,
}

impl<V> Series<V> {
    /// The most recent data point.
    pub fn latest(&self) -> Option<&V> {
        self.values.first()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One OHLCV bar of `/time_series`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesValue {
    #[serde(with = "datetime")]
    pub datetime: NaiveDateTime,
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
}

/// One point of the `/avg` indicator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AverageValue {
    #[serde(with = "datetime")]
    pub datetime: NaiveDateTime,
    #[serde(with = "decimal")]
    pub avg: Decimal,
}

/// One point of the `/adx` indicator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdxValue {
    #[serde(with = "datetime")]
    pub datetime: NaiveDateTime,
    #[serde(with = "decimal")]
    pub adx: Decimal,
}

/// One point of the `/bbands` indicator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsValue {
    #[serde(with = "datetime")]
    pub datetime: NaiveDateTime,
    #[serde(with = "decimal")]
    pub upper_band: Decimal,
    #[serde(with = "decimal")]
    pub middle_band: Decimal,
    #[serde(with = "decimal")]
    pub lower_band: Decimal,
}

pub type TimeSeries = Series<TimeSeriesValue>;
pub type TimeSeriesAverage = Series<AverageValue>;
pub type Adx = Series<AdxValue>;
pub type BollingerBands = Series<BollingerBandsValue>;
