//! Quote retrieval and OHLC normalization.

mod chart;
mod files;
mod normalize;
mod readers;
mod yahoo;

pub use chart::{Chart, ChartError, ChartMeta, ChartResponse, ChartResult, QuoteColumns};
pub use files::{list_data_files, DataFile};
pub use normalize::{normalize_chart, normalize_rows, ParsePolicy, ROW_DATE_FORMAT, ROW_FIELDS};
pub use readers::{read_chart_json, read_csv_rows, read_csv_rows_from_reader};
pub use yahoo::{YahooConfig, YahooFinance, DEFAULT_BASE_URL};

use quotes_core::error::DataError;
use quotes_core::traits::{QuoteRequest, QuoteSource};
use quotes_core::types::{OhlcSeries, Period};
use std::path::Path;
use tracing::info;

/// Load and normalize a `date,open,high,low,close,volume` CSV file.
///
/// The series symbol is taken from the file stem.
pub fn load_csv(path: impl AsRef<Path>, policy: ParsePolicy) -> Result<OhlcSeries, DataError> {
    let path = path.as_ref();
    let rows = read_csv_rows(path)?;
    let mut series = normalize_rows(&rows, policy)?;
    series.symbol = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_uppercase())
        .unwrap_or_default();

    info!(path = %path.display(), records = series.len(), "Loaded CSV");
    Ok(series)
}

/// Load and normalize a chart response saved as JSON.
pub fn load_chart_json(path: impl AsRef<Path>) -> Result<OhlcSeries, DataError> {
    let path = path.as_ref();
    let series = normalize_chart(&read_chart_json(path)?)?;

    info!(path = %path.display(), records = series.len(), "Loaded chart JSON");
    Ok(series)
}

/// Retrieve and normalize daily bars for `symbol` over `period`.
pub async fn fetch_daily<S>(source: &S, symbol: &str, period: Period) -> Result<OhlcSeries, DataError>
where
    S: QuoteSource<Response = ChartResponse>,
{
    let request = QuoteRequest::daily(symbol, period);
    let response = source.fetch(&request).await?;
    let series = normalize_chart(&response)?;

    info!(source = source.name(), symbol, records = series.len(), "Fetched daily series");
    Ok(series)
}
