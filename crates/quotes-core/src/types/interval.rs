//! Bar intervals understood by the quote provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sampling interval of a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "2m")]
    Minute2,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "60m")]
    Minute60,
    #[serde(rename = "90m")]
    Minute90,
    #[serde(rename = "1h")]
    Hour1,
    /// Daily bars
    #[serde(rename = "1d")]
    #[default]
    Daily,
    #[serde(rename = "5d")]
    Day5,
    #[serde(rename = "1wk")]
    Weekly,
    #[serde(rename = "1mo")]
    Monthly,
    #[serde(rename = "3mo")]
    Quarterly,
}

impl Interval {
    /// Wire representation used in request URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1m",
            Interval::Minute2 => "2m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Minute60 => "60m",
            Interval::Minute90 => "90m",
            Interval::Hour1 => "1h",
            Interval::Daily => "1d",
            Interval::Day5 => "5d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
            Interval::Quarterly => "3mo",
        }
    }

    /// Check if this is an intraday interval.
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            Interval::Minute1
                | Interval::Minute2
                | Interval::Minute5
                | Interval::Minute15
                | Interval::Minute30
                | Interval::Minute60
                | Interval::Minute90
                | Interval::Hour1
        )
    }

    /// Get all available intervals.
    pub fn all() -> &'static [Interval] {
        &[
            Interval::Minute1,
            Interval::Minute2,
            Interval::Minute5,
            Interval::Minute15,
            Interval::Minute30,
            Interval::Minute60,
            Interval::Minute90,
            Interval::Hour1,
            Interval::Daily,
            Interval::Day5,
            Interval::Weekly,
            Interval::Monthly,
            Interval::Quarterly,
        ]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::all()
            .iter()
            .copied()
            .find(|i| i.as_str() == s.trim())
            .ok_or_else(|| {
                let valid: Vec<&str> = Interval::all().iter().map(|i| i.as_str()).collect();
                format!("Invalid interval: {} (expected one of {})", s, valid.join(", "))
            })
    }
}
