//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One trading day of price action.
///
/// Volume is integral on the wire but kept as `f64` so every column can feed
/// the indicator engine directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    /// Trading day
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Ohlc {
    /// Create a new record.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// True when none of the numeric fields is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl fmt::Display for Ohlc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{:.6},{:.6},{:.6},{:.6},{:.6}",
            self.date.format("%Y-%m-%d"),
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume
        )
    }
}

/// Ordered run of daily records for one symbol.
///
/// Records keep the order they were normalized in; the series never sorts or
/// deduplicates on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcSeries {
    /// Symbol identifier (empty when the source does not carry one)
    pub symbol: String,
    records: Vec<Ohlc>,
}

impl OhlcSeries {
    /// CSV header matching the `Display` layout of [`Ohlc`].
    pub const HEADER: &'static str = "Date,Open,High,Low,Close,Volume";

    /// Create a series from already ordered records.
    pub fn new(symbol: impl Into<String>, records: Vec<Ohlc>) -> Self {
        Self {
            symbol: symbol.into(),
            records,
        }
    }

    /// Get the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Ohlc> {
        self.records.get(index)
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }

    /// Extract trading days as a vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }
}

impl fmt::Display for OhlcSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
