//! Twelve Data models
//!
//! This module contains the request and response types of the client:
//! - `options` - Request parameters (RequestOptions, Interval)
//! - `response` - Typed call result (TwelveDataResponse, ResponseStatus)
//! - `envelope` - The service's error payload (ApiErrorEnvelope)
//! - `meta` - `meta` block shared by series endpoints (Meta, IndicatorMeta)
//! - `quote` - Quote payload (Quote, FiftyTwoWeek)
//! - `price` - Real-time price payload (RealTimePrice)
//! - `series` - Time series and indicator payloads
//! - `wire` - Decoding of string-encoded numbers and timestamps

mod envelope;
mod meta;
mod options;
mod price;
mod quote;
mod response;
mod series;
pub mod wire;

pub use envelope::{ApiErrorEnvelope, ErrorMeta, ErrorStatus};
pub use meta::{IndicatorMeta, Meta};
pub use options::{Interval, RequestOptions};
pub use price::RealTimePrice;
pub use quote::{FiftyTwoWeek, Quote};
pub use response::{ResponseStatus, TwelveDataResponse, RESPONSE_OK};
pub use series::{
    Adx, AdxValue, AverageValue, BollingerBands, BollingerBandsValue, Series, TimeSeries,
    TimeSeriesAverage, TimeSeriesValue,
};
