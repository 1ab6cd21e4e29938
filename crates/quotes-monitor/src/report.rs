//! Indicator report generation.

use chrono::NaiveDate;
use quotes_core::error::IndicatorError;
use quotes_core::types::OhlcSeries;
use quotes_core::traits::{Indicator, MultiOutputIndicator};
use quotes_indicators::{Ema, Macd, MacdParams, MacdSeries, Sma};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Indicators computed over the closing prices of one series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorReport {
    pub symbol: String,
    pub dates: Vec<NaiveDate>,
    pub closes: Vec<f64>,
    pub sma_window: usize,
    /// Trailing-window SMA; `sma[j]` belongs to `dates[j + sma_window - 1]`
    pub sma: Vec<f64>,
    pub ema_alpha: f64,
    pub ema: Vec<f64>,
    pub macd_params: MacdParams,
    pub macd: MacdSeries,
}

/// One day of the report, with every indicator aligned to that day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub close: f64,
    /// `None` until a full SMA window is available
    pub sma: Option<f64>,
    pub ema: f64,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl IndicatorReport {
    /// Compute SMA, EMA and MACD over the series' closes.
    pub fn build(
        series: &OhlcSeries,
        sma_window: usize,
        ema_alpha: f64,
        macd_params: MacdParams,
    ) -> Result<Self, IndicatorError> {
        let closes = series.closes();

        let sma_indicator = Sma::new(sma_window)?;
        let ema_indicator = Ema::new(ema_alpha)?;
        let macd_indicator = Macd::new(macd_params)?;

        let sma = sma_indicator.calculate(&closes)?;
        let ema = ema_indicator.calculate(&closes)?;
        let macd = macd_indicator.calculate(&closes)?;

        debug!(symbol = %series.symbol, records = closes.len(), sma_window, "Built indicator report");

        Ok(Self {
            symbol: series.symbol.clone(),
            dates: series.dates(),
            closes,
            sma_window: sma_indicator.window(),
            sma,
            ema_alpha: ema_indicator.alpha(),
            ema,
            macd_params: macd_indicator.params(),
            macd,
        })
    }

    /// Row for input index `i`.
    pub fn row(&self, i: usize) -> Option<ReportRow> {
        let date = *self.dates.get(i)?;
        let sma = (i + 1)
            .checked_sub(self.sma_window)
            .and_then(|j| self.sma.get(j).copied());

        Some(ReportRow {
            date,
            close: self.closes[i],
            sma,
            ema: self.ema[i],
            macd: self.macd.macd[i],
            signal: self.macd.signal[i],
            histogram: self.macd.histogram[i],
        })
    }

    /// The last `n` rows, oldest first.
    pub fn tail(&self, n: usize) -> Vec<ReportRow> {
        let start = self.dates.len().saturating_sub(n);
        (start..self.dates.len()).filter_map(|i| self.row(i)).collect()
    }

    /// Generate a text summary of the last `rows` days.
    pub fn summary(&self, rows: usize) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  INDICATORS  {}\n", self.symbol));
        s.push_str("═══════════════════════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("  Records:             {}\n", self.closes.len()));
        if let (Some(first), Some(last)) = (self.dates.first(), self.dates.last()) {
            s.push_str(&format!("  Range:               {} .. {}\n", first, last));
        }
        s.push_str(&format!("  SMA window:          {}\n", self.sma_window));
        s.push_str(&format!("  EMA alpha:           {:.4}\n", self.ema_alpha));
        s.push_str(&format!(
            "  MACD periods:        {}/{}/{}\n\n",
            self.macd_params.short, self.macd_params.long, self.macd_params.signal
        ));

        s.push_str(&format!(
            "  {:<10} {:>12} {:>12} {:>12} {:>10} {:>10} {:>10}\n",
            "Date", "Close", "SMA", "EMA", "MACD", "Signal", "Hist"
        ));
        s.push_str("───────────────────────────────────────────────────────────────────────────\n");
        for row in self.tail(rows) {
            let sma = row
                .sma
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string());
            s.push_str(&format!(
                "  {:<10} {:>12.4} {:>12} {:>12.4} {:>10.4} {:>10.4} {:>10.4}\n",
                row.date.format("%Y-%m-%d"),
                row.close,
                sma,
                row.ema,
                row.macd,
                row.signal,
                row.histogram
            ));
        }

        s
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
