use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Marker that only decodes from the literal `"error"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorStatus {
    #[serde(rename = "error")]
    Error,
}

/// Partial `meta` block that may accompany an error envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMeta {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
}

/// The service's standard error payload.
///
/// It can arrive with any HTTP status code, including 200. A body only
/// decodes as an envelope when it carries a `code`, a `message` and
/// `status == "error"`. A `meta` block that does not fit [`ErrorMeta`] is
/// dropped rather than failing the envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    pub code: i64,
    pub message: String,
    pub status: ErrorStatus,
    #[serde(default, deserialize_with = "deserialize_lenient_meta")]
    pub meta: Option<ErrorMeta>,
}

fn deserialize_lenient_meta<'de, D>(deserializer: D) -> Result<Option<ErrorMeta>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| ErrorMeta::deserialize(value).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_meta() {
        let json = r#"{"code":400,"message":"**symbol** not found: FAKE.","status":"error","meta":{"symbol":"FAKE","interval":"","exchange":""}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 400);
        assert_eq!(envelope.message, "**symbol** not found: FAKE.");
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.symbol.as_deref(), Some("FAKE"));
        assert_eq!(meta.interval.as_deref(), Some(""));
    }

    #[test]
    fn test_envelope_requires_error_status() {
        let json = r#"{"code":200,"message":"fine","status":"ok"}"#;
        assert!(serde_json::from_str::<ApiErrorEnvelope>(json).is_err());
    }

    #[test]
    fn test_envelope_requires_code_and_message() {
        assert!(serde_json::from_str::<ApiErrorEnvelope>(r#"{"status":"error"}"#).is_err());
        assert!(
            serde_json::from_str::<ApiErrorEnvelope>(r#"{"code":"x","message":"m","status":"error"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_malformed_meta_is_dropped() {
        let json = r#"{"code":400,"message":"symbol not found: FAKE","status":"error","meta":{"symbol":["FAKE"]}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 400);
        assert_eq!(envelope.message, "symbol not found: FAKE");
        assert!(envelope.meta.is_none());

        let json = r#"{"code":400,"message":"bad","status":"error","meta":"FAKE"}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.meta.is_none());
    }
}
