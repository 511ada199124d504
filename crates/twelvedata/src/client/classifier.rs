//! Maps a [`RawResponse`] onto a [`TwelveDataResponse`].
//!
//! The body is classified by its shape, not by the HTTP status code. The
//! service returns its error envelope with 200 as often as with 4xx, so the
//! envelope is tried first, then the endpoint's DTO. Only when neither
//! applies does the decode failure itself become the result.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::executor::Endpoint;
use crate::models::{ApiErrorEnvelope, TwelveDataResponse};
use crate::transport::RawResponse;

/// Outcome of decoding one body.
enum Decoded<T> {
    Error(ApiErrorEnvelope),
    Dto(T),
    /// Not JSON, or a DTO field was missing or failed to parse
    Malformed(String),
    /// Valid JSON that cannot be any response of this endpoint
    UnexpectedShape(String),
}

fn decode<T: DeserializeOwned>(body: &str) -> Decoded<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return Decoded::Malformed(e.to_string()),
    };

    let Some(object) = value.as_object() else {
        return Decoded::UnexpectedShape(format!("expected a JSON object, got {}", kind(&value)));
    };

    if let Ok(envelope) = ApiErrorEnvelope::deserialize(&value) {
        return Decoded::Error(envelope);
    }

    if object.get("status").and_then(Value::as_str) == Some("error") {
        return Decoded::UnexpectedShape(
            "error status without a valid code and message".to_string(),
        );
    }

    match serde_json::from_value::<T>(value) {
        Ok(dto) => Decoded::Dto(dto),
        Err(e) => Decoded::Malformed(e.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Classify the raw outcome of one `endpoint` call.
///
/// Pure: the same input always yields an equal result.
pub fn classify<T: DeserializeOwned>(
    endpoint: Endpoint,
    raw: &RawResponse,
) -> TwelveDataResponse<T> {
    let (status, body) = match raw {
        RawResponse::Received { status, body } => (*status, body),
        RawResponse::TransportFailure(failure) => {
            debug!("Twelve Data {}: client error ({})", endpoint, failure);
            return TwelveDataResponse::client_error(failure.message());
        }
    };

    match decode::<T>(body) {
        Decoded::Error(envelope) => {
            debug!(
                "Twelve Data {}: API error {} (HTTP {}): {}",
                endpoint, envelope.code, status, envelope.message
            );
            TwelveDataResponse::remote_api_error(envelope.code, envelope.message)
        }
        Decoded::Dto(dto) => {
            if !(200..300).contains(&status) {
                warn!(
                    "Twelve Data {}: HTTP {} carried a success payload, treating as ok",
                    endpoint, status
                );
            }
            debug!("Twelve Data {}: ok (HTTP {})", endpoint, status);
            TwelveDataResponse::ok(dto)
        }
        Decoded::Malformed(detail) => {
            debug!("Twelve Data {}: undecodable body (HTTP {}): {}", endpoint, status, detail);
            TwelveDataResponse::client_error(format!(
                "failed to decode {} response: {}",
                endpoint, detail
            ))
        }
        Decoded::UnexpectedShape(detail) => {
            debug!("Twelve Data {}: unexpected shape (HTTP {}): {}", endpoint, status, detail);
            TwelveDataResponse::client_error(format!(
                "unexpected {} response shape: {}",
                endpoint, detail
            ))
        }
    }
}
