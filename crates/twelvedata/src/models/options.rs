use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::TwelveDataError;
use crate::models::wire::format_datetime;

/// Bar interval accepted by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "45min")]
    FortyFiveMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "1month")]
    OneMonth,
}

impl Interval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::FortyFiveMinutes => "45min",
            Self::OneHour => "1h",
            Self::TwoHours => "2h",
            Self::FourHours => "4h",
            Self::OneDay => "1day",
            Self::OneWeek => "1week",
            Self::OneMonth => "1month",
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for a single endpoint call.
///
/// `symbol` is always present and non-empty. Every other field is optional and,
/// when absent, is left out of the query string entirely. An explicitly set
/// empty string is still sent, so "absent" and "empty" stay distinguishable.
///
/// # Example
///
/// ```
/// use twelvedata::{Interval, RequestOptions};
///
/// let options = RequestOptions::new("AAPL")?
///     .with_interval(Interval::OneDay)
///     .with_exchange("NASDAQ")
///     .with_output_size(5);
/// assert_eq!(options.symbol(), "AAPL");
/// # Ok::<(), twelvedata::TwelveDataError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    symbol: String,
    interval: Option<Interval>,
    exchange: Option<String>,
    mic_code: Option<String>,
    country: Option<String>,
    instrument_type: Option<String>,
    output_size: Option<u32>,
    start_date: Option<NaiveDateTime>,
    end_date: Option<NaiveDateTime>,
}

impl RequestOptions {
    /// Create options for `symbol`, rejecting an empty or blank symbol.
    pub fn new(symbol: impl Into<String>) -> Result<Self, TwelveDataError> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(TwelveDataError::EmptySymbol);
        }

        Ok(Self {
            symbol: trimmed.to_string(),
            interval: None,
            exchange: None,
            mic_code: None,
            country: None,
            instrument_type: None,
            output_size: None,
            start_date: None,
            end_date: None,
        })
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Market Identifier Code (ISO 10383).
    pub fn with_mic_code(mut self, mic_code: impl Into<String>) -> Self {
        self.mic_code = Some(mic_code.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Instrument type, e.g. "Common Stock" or "ETF". Sent as `type`.
    pub fn with_instrument_type(mut self, instrument_type: impl Into<String>) -> Self {
        self.instrument_type = Some(instrument_type.into());
        self
    }

    /// Number of data points to return. The service accepts 1..=5000.
    pub fn with_output_size(mut self, output_size: u32) -> Self {
        self.output_size = Some(output_size);
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDateTime) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDateTime) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    pub fn mic_code(&self) -> Option<&str> {
        self.mic_code.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn instrument_type(&self) -> Option<&str> {
        self.instrument_type.as_deref()
    }

    pub fn output_size(&self) -> Option<u32> {
        self.output_size
    }

    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.end_date
    }

    /// Query parameters for every present option, in a fixed order.
    ///
    /// The API key is not included; the executor appends it.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("symbol", self.symbol.clone())];

        if let Some(interval) = self.interval {
            pairs.push(("interval", interval.as_str().to_string()));
        }
        if let Some(ref exchange) = self.exchange {
            pairs.push(("exchange", exchange.clone()));
        }
        if let Some(ref mic_code) = self.mic_code {
            pairs.push(("mic_code", mic_code.clone()));
        }
        if let Some(ref country) = self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(ref instrument_type) = self.instrument_type {
            pairs.push(("type", instrument_type.clone()));
        }
        if let Some(output_size) = self.output_size {
            pairs.push(("outputsize", output_size.to_string()));
        }
        if let Some(ref start_date) = self.start_date {
            pairs.push(("start_date", format_datetime(start_date)));
        }
        if let Some(ref end_date) = self.end_date {
            pairs.push(("end_date", format_datetime(end_date)));
        }

        pairs
    }

    /// Copy with `interval` filled in when the caller left it absent.
    pub(crate) fn or_interval(&self, default: Interval) -> Self {
        let mut options = self.clone();
        options.interval.get_or_insert(default);
        options
    }

    /// Copy without `interval`, for endpoints that take none.
    pub(crate) fn without_interval(&self) -> Self {
        let mut options = self.clone();
        options.interval = None;
        options
    }
}
