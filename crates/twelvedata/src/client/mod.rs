//! Caller-facing Twelve Data client.
//!
//! Every endpoint operation runs the same pipeline: the [`RequestExecutor`]
//! produces a [`RawResponse`](crate::transport::RawResponse) and [`classify`]
//! turns it into a [`TwelveDataResponse`]. No operation returns `Err` for
//! network or payload problems; branch on the response status instead.

mod classifier;
mod executor;

pub use classifier::classify;
pub use executor::{Endpoint, RequestExecutor};

use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::errors::TwelveDataError;
use crate::models::{
    Adx, BollingerBands, Quote, RealTimePrice, RequestOptions, TimeSeries, TimeSeriesAverage,
    TwelveDataResponse,
};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";

/// Typed client for the Twelve Data REST API.
///
/// Cheap to clone and safe to share between tasks; calls hold no shared
/// mutable state.
#[derive(Clone)]
pub struct TwelveDataClient {
    executor: RequestExecutor,
}

impl TwelveDataClient {
    /// Create a client against the production host.
    ///
    /// With `transport` set to `None` every call reports a client error
    /// without touching the network.
    pub fn new(api_key: impl Into<String>, transport: Option<Arc<dyn HttpTransport>>) -> Self {
        Self {
            executor: RequestExecutor::new(DEFAULT_BASE_URL, api_key, transport),
        }
    }

    /// Create a client using [`ReqwestTransport`] with its default timeout.
    pub fn with_default_transport(api_key: impl Into<String>) -> Self {
        Self::new(api_key, Some(Arc::new(ReqwestTransport::new())))
    }

    pub fn builder(api_key: impl Into<String>) -> TwelveDataClientBuilder {
        TwelveDataClientBuilder::new(api_key)
    }

    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    /// Latest quote for a symbol.
    pub async fn quote(&self, options: &RequestOptions) -> TwelveDataResponse<Quote> {
        self.call(Endpoint::Quote, options).await
    }

    /// Latest traded price. Any interval set on `options` is not sent.
    pub async fn real_time_price(
        &self,
        options: &RequestOptions,
    ) -> TwelveDataResponse<RealTimePrice> {
        self.call(Endpoint::RealTimePrice, options).await
    }

    /// OHLCV bars, newest first.
    pub async fn time_series(&self, options: &RequestOptions) -> TwelveDataResponse<TimeSeries> {
        self.call(Endpoint::TimeSeries, options).await
    }

    pub async fn time_series_average(
        &self,
        options: &RequestOptions,
    ) -> TwelveDataResponse<TimeSeriesAverage> {
        self.call(Endpoint::TimeSeriesAverage, options).await
    }

    /// Average Directional Index.
    pub async fn adx(&self, options: &RequestOptions) -> TwelveDataResponse<Adx> {
        self.call(Endpoint::Adx, options).await
    }

    pub async fn bollinger_bands(
        &self,
        options: &RequestOptions,
    ) -> TwelveDataResponse<BollingerBands> {
        self.call(Endpoint::BollingerBands, options).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        options: &RequestOptions,
    ) -> TwelveDataResponse<T> {
        let raw = self.executor.execute(endpoint, options).await;
        classify(endpoint, &raw)
    }
}

/// Builder for [`TwelveDataClient`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use twelvedata::{ReqwestTransport, TwelveDataClient};
///
/// let client = TwelveDataClient::builder("demo")
///     .base_url("http://localhost:8080")
///     .transport(Arc::new(ReqwestTransport::new()))
///     .build()?;
/// assert_eq!(client.base_url(), "http://localhost:8080");
/// # Ok::<(), twelvedata::TwelveDataError>(())
/// ```
pub struct TwelveDataClientBuilder {
    api_key: String,
    base_url: String,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl TwelveDataClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: None,
        }
    }

    /// Override the API host, e.g. to point at a local test server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<TwelveDataClient, TwelveDataError> {
        let url = Url::parse(&self.base_url).map_err(|e| TwelveDataError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(TwelveDataError::InvalidBaseUrl {
                url: self.base_url,
                message: "expected an http or https URL".to_string(),
            });
        }

        Ok(TwelveDataClient {
            executor: RequestExecutor::new(self.base_url, self.api_key, self.transport),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_production_host() {
        let client = TwelveDataClient::builder("key").build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = TwelveDataClient::builder("key")
            .base_url("http://127.0.0.1:9000/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = TwelveDataClient::builder("key").base_url("not a url").build();
        assert!(matches!(
            result,
            Err(TwelveDataError::InvalidBaseUrl { .. })
        ));

        let result = TwelveDataClient::builder("key")
            .base_url("ftp://example.com")
            .build();
        assert!(matches!(
            result,
            Err(TwelveDataError::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_client_without_transport_reports_client_error() {
        let client = TwelveDataClient::new("key", None);
        let options = RequestOptions::new("AAPL").unwrap();

        let response = client.bollinger_bands(&options).await;

        assert_eq!(response.status, crate::models::ResponseStatus::ClientError);
        assert_eq!(response.message, "no HTTP transport configured");
        assert!(response.payload.is_none());
    }
}
