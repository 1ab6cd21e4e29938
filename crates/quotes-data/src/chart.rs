//! Wire format of the provider's chart endpoint.
//!
//! A response is either a success envelope carrying one timestamp array and
//! parallel price/volume arrays, or an error envelope with a code and a
//! description. Array entries are nullable: the provider emits `null` for
//! periods it has no data for.

use quotes_core::error::DataError;
use serde::Deserialize;

/// Top-level chart payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

/// Chart envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Error envelope, carried verbatim into `DataError::Provider`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: ChartIndicators,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub timezone: Option<String>,
    /// Exchange offset from UTC in seconds
    #[serde(default)]
    pub gmtoffset: i64,
    pub data_granularity: Option<String>,
    pub range: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

/// Parallel OHLCV arrays, one entry per timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    /// Integral on the wire; read as `f64` to match the record type.
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Decode a chart payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        serde_json::from_str(text).map_err(|e| DataError::Decode(e.to_string()))
    }

    /// True when the provider answered with an error envelope.
    pub fn is_error(&self) -> bool {
        self.chart.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let json = r#"{"chart":{"result":[{
            "meta":{"symbol":"META","currency":"USD","exchangeName":"NMS","gmtoffset":-18000,"dataGranularity":"1d","range":"5d"},
            "timestamp":[1704205800,1704292200],
            "indicators":{"quote":[{"open":[344.0,null],"high":[346.5,345.0],"low":[343.0,340.1],"close":[346.29,null],"volume":[12345,67890]}]}
        }],"error":null}}"#;

        let response = ChartResponse::from_json(json).unwrap();
        assert!(!response.is_error());

        let results = response.chart.result.unwrap();
        let result = &results[0];
        assert_eq!(result.meta.symbol, "META");
        assert_eq!(result.meta.gmtoffset, -18000);
        assert_eq!(result.meta.exchange_name.as_deref(), Some("NMS"));
        assert_eq!(result.timestamp.len(), 2);

        let quote = &result.indicators.quote[0];
        assert_eq!(quote.open, vec![Some(344.0), None]);
        assert_eq!(quote.volume, vec![Some(12345.0), Some(67890.0)]);
    }

    #[test]
    fn test_decode_error_envelope() {
        let json = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;

        let response = ChartResponse::from_json(json).unwrap();
        assert!(response.is_error());
        let error = response.chart.error.unwrap();
        assert_eq!(error.code, "Not Found");
        assert!(response.chart.result.is_none());
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            ChartResponse::from_json("<html>oops</html>"),
            Err(DataError::Decode(_))
        ));
    }
}
