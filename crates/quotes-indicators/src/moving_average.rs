//! Moving average indicators.

use quotes_core::error::IndicatorError;
use quotes_core::traits::Indicator;

use crate::simd::sum_simd;

/// Simple moving average over a trailing window.
///
/// `out[i]` is the mean of `series[i..i + window]`, i.e. the window that
/// *ends* at input index `i + window - 1`. The output has
/// `series.len() - window + 1` entries and no padding.
///
/// Each window is summed on its own, so a NaN only poisons the windows that
/// contain it.
pub fn sma(series: &[f64], window: usize) -> Result<Vec<f64>, IndicatorError> {
    if series.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if window == 0 || window > series.len() {
        return Err(IndicatorError::InvalidParameter(format!(
            "SMA window must be in 1..={}, got {}",
            series.len(),
            window
        )));
    }

    let window_f64 = window as f64;
    Ok(series
        .windows(window)
        .map(|w| sum_simd(w) / window_f64)
        .collect())
}

/// Exponential moving average with smoothing factor `alpha`.
///
/// Seeded with the first input: `out[0] = series[0]`, then
/// `out[i] = alpha * series[i] + (1 - alpha) * out[i - 1]`. The output has the
/// same length as the input.
pub fn ema(series: &[f64], alpha: f64) -> Result<Vec<f64>, IndicatorError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(IndicatorError::InvalidParameter(format!(
            "EMA alpha must be in [0, 1], got {}",
            alpha
        )));
    }
    let Some((&seed, rest)) = series.split_first() else {
        return Err(IndicatorError::EmptyInput);
    };

    let one_minus_alpha = 1.0 - alpha;
    let mut result = Vec::with_capacity(series.len());
    let mut current = seed;
    result.push(current);

    for &value in rest {
        current = alpha * value + one_minus_alpha * current;
        result.push(current);
    }

    Ok(result)
}

/// Convert a period into the conventional EMA smoothing factor `2 / (period + 1)`.
pub fn alpha_for_period(period: usize) -> Result<f64, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "Period must be greater than 0".to_string(),
        ));
    }
    Ok(2.0 / (period as f64 + 1.0))
}

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "SMA window must be greater than 0".to_string(),
            ));
        }
        Ok(Self { window })
    }

    /// Window length.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
        self.validate_data(data)?;
        sma(data, self.window)
    }

    fn min_len(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay.
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f64,
}

impl Ema {
    /// Create an EMA with an explicit smoothing factor.
    pub fn new(alpha: f64) -> Result<Self, IndicatorError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(IndicatorError::InvalidParameter(format!(
                "EMA alpha must be in [0, 1], got {}",
                alpha
            )));
        }
        Ok(Self { alpha })
    }

    /// Create an EMA whose smoothing factor is derived from a period.
    pub fn with_period(period: usize) -> Result<Self, IndicatorError> {
        Self::new(alpha_for_period(period)?)
    }

    /// Smoothing factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Result<Vec<f64>, IndicatorError> {
        self.validate_data(data)?;
        ema(data, self.alpha)
    }

    fn min_len(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<f64> {
        (0..40)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 4.0)
            .collect()
    }

    #[test]
    fn test_sma() {
        let result = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_length_law() {
        let data = sample();
        for window in 1..=data.len() {
            assert_eq!(sma(&data, window).unwrap().len(), data.len() - window + 1);
        }
    }

    #[test]
    fn test_sma_window_one_is_identity() {
        let data = sample();
        assert_eq!(sma(&data, 1).unwrap(), data);
    }

    #[test]
    fn test_sma_full_window_is_mean() {
        let result = sma(&[2.0, 4.0, 6.0, 8.0], 4).unwrap();
        assert_eq!(result, vec![5.0]);
    }

    #[test]
    fn test_sma_invalid_window() {
        let data = vec![1.0, 2.0, 3.0];

        assert!(matches!(sma(&data, 0), Err(IndicatorError::InvalidParameter(_))));
        assert!(matches!(sma(&data, 4), Err(IndicatorError::InvalidParameter(_))));
        assert_eq!(sma(&[], 1), Err(IndicatorError::EmptyInput));
    }

    #[test]
    fn test_sma_nan_stays_inside_its_windows() {
        let result = sma(&[1.0, f64::NAN, 3.0, 4.0, 5.0], 2).unwrap();

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!((result[2] - 3.5).abs() < 1e-10);
        assert!((result[3] - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_ema() {
        let result = ema(&[10.0, 20.0, 30.0], 0.5).unwrap();
        assert_eq!(result, vec![10.0, 15.0, 22.5]);
    }

    #[test]
    fn test_ema_preserves_length() {
        let data = sample();
        for alpha in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(ema(&data, alpha).unwrap().len(), data.len());
        }
    }

    #[test]
    fn test_ema_alpha_zero_freezes_at_seed() {
        let data = sample();
        let result = ema(&data, 0.0).unwrap();
        assert!(result.iter().all(|&v| v == data[0]));
    }

    #[test]
    fn test_ema_alpha_one_tracks_input() {
        let data = sample();
        assert_eq!(ema(&data, 1.0).unwrap(), data);
    }

    #[test]
    fn test_ema_rejects_out_of_range_alpha() {
        let data = vec![1.0, 2.0];

        assert!(matches!(ema(&data, -0.1), Err(IndicatorError::InvalidParameter(_))));
        assert!(matches!(ema(&data, 1.1), Err(IndicatorError::InvalidParameter(_))));
        assert!(matches!(ema(&data, f64::NAN), Err(IndicatorError::InvalidParameter(_))));
    }

    #[test]
    fn test_ema_empty_input() {
        assert_eq!(ema(&[], 0.5), Err(IndicatorError::EmptyInput));
    }

    #[test]
    fn test_ema_long_series_does_not_recurse() {
        let data = vec![1.0; 1_000_000];
        let result = ema(&data, 0.2).unwrap();
        assert_eq!(result.len(), data.len());
        assert!((result.last().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_alpha_for_period() {
        assert!((alpha_for_period(1).unwrap() - 1.0).abs() < 1e-12);
        assert!((alpha_for_period(3).unwrap() - 0.5).abs() < 1e-12);
        assert!((alpha_for_period(9).unwrap() - 0.2).abs() < 1e-12);
        assert!(alpha_for_period(0).is_err());
    }

    #[test]
    fn test_indicator_structs_check_input_length() {
        let sma5 = Sma::new(5).unwrap();
        assert_eq!(sma5.calculate(&[]), Err(IndicatorError::EmptyInput));
        match sma5.calculate(&[1.0, 2.0, 3.0]) {
            Err(IndicatorError::InvalidParameter(msg)) => assert!(msg.starts_with("SMA")),
            other => panic!("unexpected {:?}", other),
        }

        let ema = Ema::new(0.5).unwrap();
        assert_eq!(ema.calculate(&[]), Err(IndicatorError::EmptyInput));
        assert_eq!(ema.calculate(&[4.0]).unwrap(), vec![4.0]);
    }

    #[test]
    fn test_indicator_structs() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let sma3 = Sma::new(3).unwrap();
        assert_eq!(sma3.name(), "SMA");
        assert_eq!(sma3.calculate(&data).unwrap(), vec![2.0, 3.0, 4.0]);

        let ema3 = Ema::with_period(3).unwrap();
        assert!((ema3.alpha() - 0.5).abs() < 1e-12);
        assert_eq!(ema3.calculate(&[10.0, 20.0, 30.0]).unwrap(), vec![10.0, 15.0, 22.5]);

        assert!(Sma::new(0).is_err());
        assert!(Ema::new(1.5).is_err());
        assert!(Ema::with_period(0).is_err());
    }
}
