//! Turns an endpoint call into a [`RawResponse`].

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::{debug, warn};
use reqwest::Url;

use crate::errors::TwelveDataError;
use crate::models::{Interval, RequestOptions};
use crate::transport::{HttpTransport, RawResponse, TransportFailure};

/// Supported API operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Quote,
    RealTimePrice,
    TimeSeries,
    TimeSeriesAverage,
    Adx,
    BollingerBands,
}

impl Endpoint {
    /// URL path segment under the base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::RealTimePrice => "price",
            Self::TimeSeries => "time_series",
            Self::TimeSeriesAverage => "avg",
            Self::Adx => "adx",
            Self::BollingerBands => "bbands",
        }
    }

    /// Interval sent when the caller leaves it unset, `None` for endpoints
    /// that take no interval at all.
    pub const fn default_interval(self) -> Option<Interval> {
        match self {
            Self::RealTimePrice => None,
            _ => Some(Interval::OneMinute),
        }
    }

    /// Options as actually sent for this endpoint.
    pub(crate) fn prepare(self, options: &RequestOptions) -> RequestOptions {
        match self.default_interval() {
            Some(default) => options.or_interval(default),
            None => options.without_interval(),
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Builds request URLs and dispatches them through the configured transport.
///
/// Holds no per-call state; clones share the transport.
#[derive(Clone)]
pub struct RequestExecutor {
    base_url: String,
    api_key: String,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl RequestExecutor {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        transport: Option<Arc<dyn HttpTransport>>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// URL for `endpoint` with every present option plus the API key.
    ///
    /// The endpoint's interval default is applied first.
    pub fn build_url(
        &self,
        endpoint: Endpoint,
        options: &RequestOptions,
    ) -> Result<Url, TwelveDataError> {
        let mut params = endpoint.prepare(options).query_pairs();
        params.push(("apikey", self.api_key.clone()));

        let url = format!("{}/{}", self.base_url, endpoint.path());
        Url::parse_with_params(&url, &params).map_err(|e| TwelveDataError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })
    }

    /// Run one call. Sends at most one request and never retries.
    pub async fn execute(&self, endpoint: Endpoint, options: &RequestOptions) -> RawResponse {
        let Some(transport) = self.transport.as_ref() else {
            debug!("Twelve Data {}: no transport configured, nothing sent", endpoint);
            return RawResponse::TransportFailure(TransportFailure::NotConfigured);
        };

        let url = match self.build_url(endpoint, options) {
            Ok(url) => url,
            Err(e) => {
                warn!("Twelve Data {}: failed to build URL: {}", endpoint, e);
                return RawResponse::TransportFailure(TransportFailure::InvalidRequest(
                    e.to_string(),
                ));
            }
        };

        debug!("Twelve Data request: {}", redact(&url));

        match transport.get(url).await {
            Ok(reply) => {
                debug!(
                    "Twelve Data {}: HTTP {} ({} bytes)",
                    endpoint,
                    reply.status,
                    reply.body.len()
                );
                reply.into()
            }
            Err(e) => {
                warn!("Twelve Data {}: transport error: {}", endpoint, e);
                RawResponse::TransportFailure(TransportFailure::Transport(e))
            }
        }
    }

}

/// `url` with the `apikey` value masked, for logging.
fn redact(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "apikey" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(&pairs);
    redacted.to_string()
}
