//! Conversion of raw inputs into an ordered `OhlcSeries`.
//!
//! Two inputs are supported: tabular rows (a header row followed by
//! `date,open,high,low,close,volume` rows) and provider chart responses.
//! Neither path sorts or deduplicates; the source's order is kept.

use chrono::{DateTime, NaiveDate};
use quotes_core::error::DataError;
use quotes_core::types::{Ohlc, OhlcSeries};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chart::ChartResponse;

/// Date layout of tabular rows.
pub const ROW_DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of fields in a tabular row.
pub const ROW_FIELDS: usize = 6;

/// What to do with a tabular field that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Fail the whole call on the first bad field.
    Strict,
    /// Replace the bad field with its zero value and keep going.
    #[default]
    Lenient,
}

/// Normalize tabular rows. Row 0 is a header and is skipped.
///
/// Every other row must have exactly six fields; a different count is an
/// `InvalidRow` error under either policy. Unparseable (or non-finite) values
/// are handled according to `policy`. `InvalidRow::row` is the index into
/// `rows`, header included.
pub fn normalize_rows<R, S>(rows: &[R], policy: ParsePolicy) -> Result<OhlcSeries, DataError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(rows.len().saturating_sub(1));

    for (row, fields) in rows.iter().enumerate().skip(1) {
        let fields = fields.as_ref();
        if fields.len() != ROW_FIELDS {
            return Err(DataError::InvalidRow {
                row,
                reason: format!("expected {} fields, found {}", ROW_FIELDS, fields.len()),
            });
        }

        let parser = FieldParser { row, policy };
        let field: Vec<&str> = fields.iter().map(|f| f.as_ref().trim()).collect();

        records.push(Ohlc::new(
            parser.date(field[0])?,
            parser.number("open", field[1])?,
            parser.number("high", field[2])?,
            parser.number("low", field[3])?,
            parser.number("close", field[4])?,
            parser.number("volume", field[5])?,
        ));
    }

    Ok(OhlcSeries::new(String::new(), records))
}

/// Zero value of a row date: 0001-01-01.
fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default()
}

struct FieldParser {
    row: usize,
    policy: ParsePolicy,
}

impl FieldParser {
    fn date(&self, raw: &str) -> Result<NaiveDate, DataError> {
        match NaiveDate::parse_from_str(raw, ROW_DATE_FORMAT) {
            Ok(date) => Ok(date),
            Err(_) => self.fallback("date", raw, zero_date()),
        }
    }

    fn number(&self, name: &str, raw: &str) -> Result<f64, DataError> {
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => self.fallback(name, raw, 0.0),
        }
    }

    fn fallback<T>(&self, name: &str, raw: &str, zero: T) -> Result<T, DataError> {
        match self.policy {
            ParsePolicy::Strict => Err(DataError::InvalidRow {
                row: self.row,
                reason: format!("cannot parse {} from {:?}", name, raw),
            }),
            ParsePolicy::Lenient => {
                warn!(row = self.row, field = name, value = raw, "unparseable field replaced with zero");
                Ok(zero)
            }
        }
    }
}

/// Normalize a provider chart response.
///
/// An error envelope becomes `DataError::Provider`. The five value arrays must
/// each have one entry per timestamp, otherwise the call fails with
/// `MalformedResponse` and nothing is synthesized. Dates are the exchange-local
/// calendar day (`timestamp + meta.gmtoffset`). Periods with a null or
/// non-finite value in any column are dropped.
pub fn normalize_chart(response: &ChartResponse) -> Result<OhlcSeries, DataError> {
    if let Some(error) = &response.chart.error {
        return Err(DataError::Provider {
            code: error.code.clone(),
            description: error.description.clone(),
        });
    }

    let result = response
        .chart
        .result
        .as_deref()
        .and_then(|results| results.first())
        .ok_or_else(|| {
            DataError::MalformedResponse("response carries neither a result nor an error".into())
        })?;

    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| DataError::MalformedResponse("result has no quote block".into()))?;

    let expected = result.timestamp.len();
    for (name, len) in [
        ("open", quote.open.len()),
        ("high", quote.high.len()),
        ("low", quote.low.len()),
        ("close", quote.close.len()),
        ("volume", quote.volume.len()),
    ] {
        if len != expected {
            return Err(DataError::MalformedResponse(format!(
                "{} has {} entries but there are {} timestamps",
                name, len, expected
            )));
        }
    }

    let offset = result.meta.gmtoffset;
    let mut records = Vec::with_capacity(expected);
    let mut dropped = 0usize;

    for (i, &timestamp) in result.timestamp.iter().enumerate() {
        let date = DateTime::from_timestamp(timestamp.saturating_add(offset), 0)
            .ok_or_else(|| {
                DataError::MalformedResponse(format!("timestamp {} is out of range", timestamp))
            })?
            .date_naive();

        let values = (
            quote.open[i],
            quote.high[i],
            quote.low[i],
            quote.close[i],
            quote.volume[i],
        );
        match values {
            (Some(open), Some(high), Some(low), Some(close), Some(volume)) => {
                let record = Ohlc::new(date, open, high, low, close, volume);
                if record.is_finite() {
                    records.push(record);
                } else {
                    dropped += 1;
                }
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(symbol = %result.meta.symbol, dropped, "dropped incomplete periods");
    }

    Ok(OhlcSeries::new(result.meta.symbol.clone(), records))
}
