//! Indicator trait definitions.

use crate::error::IndicatorError;

/// Trait for technical indicators producing one value per output position.
///
/// Implementations never mutate their input and either return the full
/// output series or an error; there is no truncated or sentinel-filled
/// result.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically closing prices)
    ///
    /// # Returns
    /// A vector of indicator values
    fn calculate(&self, data: &[f64]) -> Result<Vec<Self::Output>, IndicatorError>;

    /// Get the minimum number of data points that yields output.
    fn min_len(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that there's enough data.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        if data.is_empty() {
            return Err(IndicatorError::EmptyInput);
        }
        if data.len() < self.min_len() {
            return Err(IndicatorError::InvalidParameter(format!(
                "{} needs at least {} points, got {}",
                self.name(),
                self.min_len(),
                data.len()
            )));
        }
        Ok(())
    }
}

/// Multi-output indicator (e.g. MACD).
///
/// Produces several related series at once.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple series.
    type Outputs;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Result<Self::Outputs, IndicatorError>;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}
