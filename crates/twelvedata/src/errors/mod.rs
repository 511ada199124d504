//! Error types for the Twelve Data client.
//!
//! This module provides:
//! - [`TwelveDataError`]: contract violations caught while configuring the client,
//!   plus the error form of a non-`Ok` [`TwelveDataResponse`](crate::TwelveDataResponse)
//! - [`TransportError`]: failures raised by an [`HttpTransport`](crate::HttpTransport)
//!
//! Ordinary network and payload conditions never surface as `Err` from the
//! endpoint operations. They are reported through the response status instead.

use thiserror::Error;

/// Errors produced by the Twelve Data client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwelveDataError {
    /// A request was built without a symbol.
    #[error("Symbol must not be empty")]
    EmptySymbol,

    /// The configured base URL cannot be parsed.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why the URL was rejected
        message: String,
    },

    /// The call failed on the library side (no transport, undecodable body).
    #[error("Client error: {message}")]
    Client {
        /// Description of the failure
        message: String,
    },

    /// The service answered with its error envelope.
    #[error("Twelve Data API error {code}: {message}")]
    RemoteApi {
        /// The envelope `code`
        code: i64,
        /// The envelope `message`, verbatim
        message: String,
    },
}

/// Transport-level failure while dispatching a request or reading its reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete before the transport's timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// No connection could be established.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request could not be sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_connect() {
            Self::Connect(error.to_string())
        } else if error.is_body() || error.is_decode() {
            Self::Body(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TwelveDataError::EmptySymbol.to_string(),
            "Symbol must not be empty"
        );

        let error = TwelveDataError::RemoteApi {
            code: 401,
            message: "apikey parameter is incorrect".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Twelve Data API error 401: apikey parameter is incorrect"
        );

        let error = TwelveDataError::InvalidBaseUrl {
            url: "not a url".to_string(),
            message: "relative URL without a base".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid base URL 'not a url': relative URL without a base"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::Timeout("operation timed out".to_string());
        assert_eq!(error.to_string(), "Request timed out: operation timed out");

        let error = TransportError::Connect("refused".to_string());
        assert_eq!(error.to_string(), "Connection failed: refused");
    }
}
