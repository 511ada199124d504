use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Indicator description attached to the `meta` block of indicator endpoints.
///
/// Parameters vary per indicator (`time_period`, `sd`, `ma_type`,
/// `series_type`, ...) and are kept as raw JSON values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub name: String,
    #[serde(flatten)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

impl IndicatorMeta {
    /// Integer parameter such as `time_period`.
    pub fn parameter_i64(&self, key: &str) -> Option<i64> {
        self.parameters.get(key).and_then(serde_json::Value::as_i64)
    }
}

/// `meta` block shared by the series endpoints.
///
/// Forex and crypto series report `currency_base`/`currency_quote` instead of
/// `currency`, and forex series carry no `exchange`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub symbol: String,
    pub interval: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_base: Option<String>,
    #[serde(default)]
    pub currency_quote: Option<String>,
    /// IANA zone identifier in which `datetime` values are expressed
    #[serde(default)]
    pub exchange_timezone: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub mic_code: Option<String>,
    #[serde(rename = "type", default)]
    pub instrument_type: Option<String>,
    #[serde(default)]
    pub indicator: Option<IndicatorMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_meta_keeps_parameters() {
        let json = r#"{
            "symbol": "AAPL",
            "interval": "1min",
            "currency": "USD",
            "exchange_timezone": "America/New_York",
            "exchange": "NASDAQ",
            "mic_code": "XNGS",
            "type": "Common Stock",
            "indicator": {
                "name": "BBANDS - Bollinger Bands",
                "series_type": "close",
                "time_period": 20,
                "sd": 2,
                "ma_type": "SMA"
            }
        }"#;

        let meta: Meta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.instrument_type.as_deref(), Some("Common Stock"));
        let indicator = meta.indicator.unwrap();
        assert_eq!(indicator.name, "BBANDS - Bollinger Bands");
        assert_eq!(indicator.parameter_i64("time_period"), Some(20));
        assert_eq!(indicator.parameter_i64("sd"), Some(2));
        assert_eq!(
            indicator.parameters.get("ma_type"),
            Some(&serde_json::Value::String("SMA".to_string()))
        );
    }

    #[test]
    fn test_forex_meta() {
        let json = r#"{"symbol":"EUR/USD","interval":"1day","currency_base":"Euro","currency_quote":"US Dollar","type":"Physical Currency"}"#;
        let meta: Meta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.currency_quote.as_deref(), Some("US Dollar"));
        assert!(meta.exchange.is_none());
        assert!(meta.indicator.is_none());
    }

    #[test]
    fn test_meta_requires_symbol_and_interval() {
        assert!(serde_json::from_str::<Meta>(r#"{"symbol":"AAPL"}"#).is_err());
        assert!(serde_json::from_str::<Meta>(r#"{"interval":"1min"}"#).is_err());
    }
}
