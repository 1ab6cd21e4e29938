//! Technical indicators over numeric series.
//!
//! This crate provides the indicator engine:
//! - Moving averages (SMA, EMA)
//! - Momentum (MACD)
//!
//! Every function borrows its input and returns a freshly allocated series,
//! so calls are independent and safe to run from several threads at once.

pub mod momentum;
pub mod moving_average;
pub mod simd;

pub use momentum::{macd, Macd, MacdParams, MacdSeries};
pub use moving_average::{alpha_for_period, ema, sma, Ema, Sma};
