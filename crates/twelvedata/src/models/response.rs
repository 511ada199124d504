use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::errors::TwelveDataError;

/// Message attached to every successful response.
pub const RESPONSE_OK: &str = "RESPONSE_OK";

/// Outcome of one endpoint call. Exactly one applies per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// The payload was fully decoded.
    Ok,
    /// The failure originated on the caller/library side: no transport,
    /// undispatchable request, unreadable or unrecognized body.
    ClientError,
    /// The service reported a logical error through its error envelope.
    RemoteApiError,
}

impl ResponseStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::ClientError => "client_error",
            Self::RemoteApiError => "remote_api_error",
        }
    }
}

impl Display for ResponseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed result of an endpoint call.
///
/// Branch on [`status`](Self::status) before touching the payload: it is only
/// guaranteed to be present when the status is [`ResponseStatus::Ok`].
#[derive(Clone, Debug, PartialEq)]
pub struct TwelveDataResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub payload: Option<T>,
    /// Envelope `code`, only set for [`ResponseStatus::RemoteApiError`]
    pub api_error_code: Option<i64>,
}

impl<T> TwelveDataResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: RESPONSE_OK.to_string(),
            payload: Some(payload),
            api_error_code: None,
        }
    }

    pub fn client_error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::ClientError,
            message: message.into(),
            payload: None,
            api_error_code: None,
        }
    }

    pub fn remote_api_error(code: i64, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::RemoteApiError,
            message: message.into(),
            payload: None,
            api_error_code: Some(code),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Convert into a `Result` so the outcome can be propagated with `?`.
    pub fn into_result(self) -> Result<T, TwelveDataError> {
        match (self.status, self.payload) {
            (ResponseStatus::Ok, Some(payload)) => Ok(payload),
            (ResponseStatus::RemoteApiError, _) => Err(TwelveDataError::RemoteApi {
                code: self.api_error_code.unwrap_or_default(),
                message: self.message,
            }),
            (ResponseStatus::Ok, None) | (ResponseStatus::ClientError, _) => {
                Err(TwelveDataError::Client {
                    message: self.message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response() {
        let response = TwelveDataResponse::ok(42);
        assert!(response.is_ok());
        assert_eq!(response.message, RESPONSE_OK);
        assert_eq!(response.payload(), Some(&42));
        assert_eq!(response.into_result(), Ok(42));
    }

    #[test]
    fn test_client_error_has_no_payload() {
        let response: TwelveDataResponse<i32> =
            TwelveDataResponse::client_error("no HTTP transport configured");
        assert!(!response.is_ok());
        assert!(response.payload().is_none());
        assert!(response.api_error_code.is_none());
        assert_eq!(
            response.into_result(),
            Err(TwelveDataError::Client {
                message: "no HTTP transport configured".to_string()
            })
        );
    }

    #[test]
    fn test_remote_error_into_result() {
        let response: TwelveDataResponse<i32> =
            TwelveDataResponse::remote_api_error(401, "apikey parameter is incorrect");
        assert_eq!(response.status, ResponseStatus::RemoteApiError);
        assert_eq!(response.api_error_code, Some(401));
        assert_eq!(
            response.into_result(),
            Err(TwelveDataError::RemoteApi {
                code: 401,
                message: "apikey parameter is incorrect".to_string()
            })
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ResponseStatus::Ok.to_string(), "ok");
        assert_eq!(ResponseStatus::RemoteApiError.to_string(), "remote_api_error");
    }
}
