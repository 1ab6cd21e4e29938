//! Quote source trait definitions.

use crate::error::DataError;
use crate::types::{Interval, Period};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Parameters of one chart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Instrument symbol, e.g. `META`
    pub symbol: String,
    /// Bar interval
    pub interval: Interval,
    /// Lookback window
    pub period: Period,
}

impl QuoteRequest {
    /// Create a daily request for the given lookback.
    pub fn daily(symbol: impl Into<String>, period: Period) -> Self {
        Self {
            symbol: symbol.into(),
            interval: Interval::Daily,
            period,
        }
    }

    /// Override the interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }
}

/// A remote provider of raw chart responses.
///
/// Sources only retrieve; turning a response into an `OhlcSeries` is the
/// normalizer's job. One call is one request: implementations do not retry.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Raw payload returned by the provider.
    type Response: Send;

    /// Fetch the chart for a request.
    async fn fetch(&self, request: &QuoteRequest) -> Result<Self::Response, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
