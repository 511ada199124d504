//! HTTP transport abstraction.
//!
//! The client never talks to the network directly. It hands a fully built URL
//! to an [`HttpTransport`] and receives the status code and body back, whatever
//! the status code is. [`ReqwestTransport`] is the production implementation;
//! tests plug in their own.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::{Client, Url};

use crate::errors::TransportError;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status code and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Network capability supplied by the caller.
///
/// Implementations must return non-2xx replies as `Ok`; only failures to
/// complete the exchange are `Err`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: Url) -> Result<HttpReply, TransportError>;
}

/// Why no reply is available for a call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportFailure {
    /// No transport was configured; nothing was sent.
    NotConfigured,
    /// The request URL could not be built; nothing was sent.
    InvalidRequest(String),
    /// The transport was invoked and failed.
    Transport(TransportError),
}

impl TransportFailure {
    /// Fixed caller-facing description of the failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotConfigured => "no HTTP transport configured",
            Self::InvalidRequest(_) => "request could not be built",
            Self::Transport(TransportError::Timeout(_)) => "request timed out",
            Self::Transport(TransportError::Connect(_)) => "connection failed",
            Self::Transport(TransportError::Request(_) | TransportError::Body(_)) => {
                "request could not be completed"
            }
        }
    }
}

impl Display for TransportFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => f.write_str(self.message()),
            Self::InvalidRequest(detail) => write!(f, "{}: {}", self.message(), detail),
            Self::Transport(error) => write!(f, "{}", error),
        }
    }
}

/// What the executor hands to the classifier: a reply, or the reason there is none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawResponse {
    Received { status: u16, body: String },
    TransportFailure(TransportFailure),
}

impl From<HttpReply> for RawResponse {
    fn from(reply: HttpReply) -> Self {
        Self::Received {
            status: reply.status,
            body: reply.body,
        }
    }
}

/// [`HttpTransport`] backed by `reqwest`.
///
/// Connection pooling and the request timeout are whatever the wrapped
/// `reqwest::Client` provides.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the default 30 second timeout.
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Create a transport whose requests, body included, must finish within `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = match Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!(
                    "Failed to build HTTP client with {:?} timeout, falling back to defaults: {}",
                    timeout, e
                );
                Client::new()
            }
        };

        Self { client }
    }

    /// Wrap a preconfigured `reqwest::Client`.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<HttpReply, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpReply { status, body })
    }
}
