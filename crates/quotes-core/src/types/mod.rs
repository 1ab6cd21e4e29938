//! Core data types.

mod interval;
mod ohlc;
mod period;

pub use interval::Interval;
pub use ohlc::{Ohlc, OhlcSeries};
pub use period::Period;
