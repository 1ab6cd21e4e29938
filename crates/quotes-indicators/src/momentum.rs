//! Momentum indicators.

use quotes_core::error::IndicatorError;
use quotes_core::traits::MultiOutputIndicator;
use serde::{Deserialize, Serialize};

use crate::moving_average::{alpha_for_period, ema};
use crate::simd::sub_simd;

/// Period preset for MACD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    /// Fast EMA period
    pub short: usize,
    /// Slow EMA period
    pub long: usize,
    /// Signal EMA period
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            short: 12,
            long: 26,
            signal: 9,
        }
    }
}

/// MACD output: three series, index-aligned with each other and the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    /// MACD line (short EMA - long EMA)
    pub macd: Vec<f64>,
    /// Signal line (EMA of the MACD line)
    pub signal: Vec<f64>,
    /// Histogram (MACD - signal)
    pub histogram: Vec<f64>,
}

/// Moving Average Convergence/Divergence.
///
/// A composition of three full-length EMAs, so every output series has the
/// same length as `series`. Zero periods fail with `InvalidParameter`; an empty
/// series fails with `EmptyInput`.
pub fn macd(
    series: &[f64],
    short: usize,
    long: usize,
    signal: usize,
) -> Result<MacdSeries, IndicatorError> {
    let short_alpha = alpha_for_period(short)?;
    let long_alpha = alpha_for_period(long)?;
    let signal_alpha = alpha_for_period(signal)?;

    let short_ema = ema(series, short_alpha)?;
    let long_ema = ema(series, long_alpha)?;

    let macd_line = sub_simd(&short_ema, &long_ema);
    let signal_line = ema(&macd_line, signal_alpha)?;
    let histogram = sub_simd(&macd_line, &signal_line);

    Ok(MacdSeries {
        macd: macd_line,
        signal: signal_line,
        histogram,
    })
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum.
#[derive(Debug, Clone, Default)]
pub struct Macd {
    params: MacdParams,
}

impl Macd {
    /// Create a MACD with custom periods.
    pub fn new(params: MacdParams) -> Result<Self, IndicatorError> {
        for (label, period) in [
            ("short", params.short),
            ("long", params.long),
            ("signal", params.signal),
        ] {
            if period == 0 {
                return Err(IndicatorError::InvalidParameter(format!(
                    "MACD {} period must be greater than 0",
                    label
                )));
            }
        }
        Ok(Self { params })
    }

    /// Periods in use.
    pub fn params(&self) -> MacdParams {
        self.params
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdSeries;

    fn calculate(&self, data: &[f64]) -> Result<MacdSeries, IndicatorError> {
        macd(data, self.params.short, self.params.long, self.params.signal)
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macd_preserves_length() {
        for len in [1, 2, 5, 26, 50] {
            let data: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            let result = macd(&data, 12, 26, 9).unwrap();

            assert_eq!(result.macd.len(), len);
            assert_eq!(result.signal.len(), len);
            assert_eq!(result.histogram.len(), len);
        }
    }

    #[test]
    fn test_macd_matches_ema_composition() {
        let data = vec![10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0];
        let result = macd(&data, 2, 4, 3).unwrap();

        let short = ema(&data, 2.0 / 3.0).unwrap();
        let long = ema(&data, 2.0 / 5.0).unwrap();
        for i in 0..data.len() {
            assert!((result.macd[i] - (short[i] - long[i])).abs() < 1e-12);
        }

        let signal = ema(&result.macd, 0.5).unwrap();
        for i in 0..data.len() {
            assert!((result.signal[i] - signal[i]).abs() < 1e-12);
            assert!((result.histogram[i] - (result.macd[i] - result.signal[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_starts_at_zero() {
        // Both EMAs are seeded with the first value
        let result = macd(&[42.0, 43.0, 44.0], 12, 26, 9).unwrap();
        assert_eq!(result.macd[0], 0.0);
        assert_eq!(result.signal[0], 0.0);
        assert_eq!(result.histogram[0], 0.0);
    }

    #[test]
    fn test_macd_uptrend_is_positive() {
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = Macd::default().calculate(&data).unwrap();

        assert!(*result.macd.last().unwrap() > 0.0);
    }

    #[test]
    fn test_macd_rejects_zero_periods() {
        let data = vec![1.0, 2.0, 3.0];

        assert!(matches!(macd(&data, 0, 26, 9), Err(IndicatorError::InvalidParameter(_))));
        assert!(matches!(macd(&data, 12, 0, 9), Err(IndicatorError::InvalidParameter(_))));
        assert!(matches!(macd(&data, 12, 26, 0), Err(IndicatorError::InvalidParameter(_))));
        assert!(Macd::new(MacdParams { short: 12, long: 26, signal: 0 }).is_err());
    }

    #[test]
    fn test_macd_empty_input() {
        assert_eq!(macd(&[], 12, 26, 9), Err(IndicatorError::EmptyInput));
    }

    #[test]
    fn test_default_params() {
        let params = Macd::default().params();
        assert_eq!(params, MacdParams { short: 12, long: 26, signal: 9 });
    }
}
