use crate::estimators::baseline_estimator::effective_window;
use crate::estimators::{BaselineEstimator, EstimatorError};
use crate::utils::math::{mean, round_baseline};
use tracing::debug;

/// Trailing-window moving average.
///
/// The value at position `i` is the mean of the last `period` inputs up to and
/// including `i`. Near the start of the series the window is cut short, so the
/// first outputs average over fewer values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingAverage {
    period: usize,
}

impl MovingAverage {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl BaselineEstimator for MovingAverage {
    fn name(&self) -> &str {
        "Moving Average"
    }

    fn calculate_baseline(&self, inputs: &[f64]) -> Result<Vec<f64>, EstimatorError> {
        let window = effective_window(self.period);
        debug!(period = self.period, window, len = inputs.len(), "moving average");

        let mut output = Vec::with_capacity(inputs.len());
        for end in 1..=inputs.len() {
            let lower = end.saturating_sub(window);
            // `lower < end` always holds, so the window is never empty.
            let average = mean(&inputs[lower..end]).unwrap_or(0.0);
            output.push(round_baseline(average.max(0.0)));
        }

        Ok(output)
    }
}
