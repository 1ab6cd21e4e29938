//! Core types and traits for the quotes workspace.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Ohlc, OhlcSeries)
//! - Request parameters for quote providers (Interval, Period)
//! - Core traits for indicators and quote sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, IndicatorError};
pub use traits::*;
pub use types::*;
