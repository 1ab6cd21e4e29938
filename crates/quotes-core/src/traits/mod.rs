//! Core traits.

mod indicator;
mod quote_source;

pub use indicator::{Indicator, MultiOutputIndicator};
pub use quote_source::{QuoteRequest, QuoteSource};
