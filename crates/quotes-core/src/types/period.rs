//! Lookback windows for chart requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far back a chart request reaches, e.g. `30d`, `6mo`, `1y`, `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Period {
    Days(u32),
    Months(u32),
    Years(u32),
    /// Year to date
    Ytd,
    /// Full available history
    Max,
}

impl Default for Period {
    fn default() -> Self {
        Period::Months(1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Days(n) => write!(f, "{}d", n),
            Period::Months(n) => write!(f, "{}mo", n),
            Period::Years(n) => write!(f, "{}y", n),
            Period::Ytd => f.write_str("ytd"),
            Period::Max => f.write_str("max"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "max" => return Ok(Period::Max),
            "ytd" => return Ok(Period::Ytd),
            _ => {}
        }

        let count = |digits: &str| -> Result<u32, String> {
            match digits.parse::<u32>() {
                Ok(0) | Err(_) => Err(format!("Invalid period: {}", s)),
                Ok(n) => Ok(n),
            }
        };

        // "mo" has to be checked before the minute suffix "m"
        if let Some(n) = s.strip_suffix("mo") {
            Ok(Period::Months(count(n)?))
        } else if let Some(n) = s.strip_suffix('d') {
            Ok(Period::Days(count(n)?))
        } else if let Some(n) = s.strip_suffix('y') {
            Ok(Period::Years(count(n)?))
        } else if s.ends_with('m') || s.ends_with('h') {
            Err(format!(
                "Invalid period: {} (minute and hour lookbacks are not supported)",
                s
            ))
        } else {
            Err(format!("Invalid period: {}", s))
        }
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}
