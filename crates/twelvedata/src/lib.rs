//! Twelve Data Client Crate
//!
//! Typed access to the Twelve Data market data REST API.
//!
//! # Overview
//!
//! The crate supports:
//! - Quotes, real-time prices and OHLCV time series
//! - Technical indicators: time-series average, ADX, Bollinger Bands
//! - Pluggable HTTP transport (reqwest by default)
//! - A single typed result per call, classified by payload shape
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! | TwelveDataClient | --> | RequestExecutor  |  (URL + one transport call)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   RawResponse    |  (status + body, or failure)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    classify()    |  (envelope, DTO, or decode error)
//!                          +------------------+
//!                                  |
//!                                  v
//!                         +--------------------+
//!                         | TwelveDataResponse |  (Ok / ClientError / RemoteApiError)
//!                         +--------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use twelvedata::{Interval, RequestOptions, ResponseStatus, TwelveDataClient};
//!
//! # async fn run() -> Result<(), twelvedata::TwelveDataError> {
//! let client = TwelveDataClient::with_default_transport("your-api-key");
//! let options = RequestOptions::new("AAPL")?.with_interval(Interval::OneDay);
//!
//! let response = client.time_series(&options).await;
//! match response.status {
//!     ResponseStatus::Ok => println!("{:?}", response.payload),
//!     _ => eprintln!("{}: {}", response.status, response.message),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod models;
pub mod transport;

// Re-export client types
pub use client::{
    classify, Endpoint, RequestExecutor, TwelveDataClient, TwelveDataClientBuilder,
    DEFAULT_BASE_URL,
};

// Re-export error types
pub use errors::{TransportError, TwelveDataError};

// Re-export all public types from models
pub use models::{
    Adx, AdxValue, ApiErrorEnvelope, AverageValue, BollingerBands, BollingerBandsValue, ErrorMeta,
    ErrorStatus, FiftyTwoWeek, IndicatorMeta, Interval, Meta, Quote, RealTimePrice,
    RequestOptions, ResponseStatus, Series, TimeSeries, TimeSeriesAverage, TimeSeriesValue,
    TwelveDataResponse, RESPONSE_OK,
};

// Re-export transport types
pub use transport::{HttpReply, HttpTransport, RawResponse, ReqwestTransport, TransportFailure};
