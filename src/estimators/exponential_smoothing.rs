use crate::estimators::baseline_estimator::effective_window;
use crate::estimators::{BaselineEstimator, EstimatorError};
use crate::utils::math::{mean, round_baseline};
use tracing::debug;

/// Single exponential smoothing seeded with an initial window average.
///
/// The first output is the mean of the first `period` inputs. Every later
/// output blends the current input with the previous *emitted* output:
///
/// ```text
/// b_1 = round(max(0, mean(x_1..x_p)))
/// b_t = round(max(0, α x_t + (1 - α) b_{t-1}))
/// ```
///
/// The recursion feeds back the rounded, clamped value rather than an
/// unrounded accumulator, so rounding error compounds from step to step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleExponentialSmoothing {
    period: usize,
    smoothing_factor: f64,
}

impl SingleExponentialSmoothing {
    pub fn new(period: usize, smoothing_factor: f64) -> Self {
        Self {
            period,
            smoothing_factor,
        }
    }
}

impl BaselineEstimator for SingleExponentialSmoothing {
    fn name(&self) -> &str {
        "Single Exponential Smoothing"
    }

    fn calculate_baseline(&self, inputs: &[f64]) -> Result<Vec<f64>, EstimatorError> {
        let window = effective_window(self.period);
        if window > inputs.len() {
            return Err(EstimatorError::InsufficientData {
                required: window,
                got: inputs.len(),
            });
        }
        debug!(
            period = self.period,
            alpha = self.smoothing_factor,
            len = inputs.len(),
            "single exponential smoothing"
        );

        let alpha = self.smoothing_factor;
        let seed = mean(&inputs[..window]).unwrap_or(0.0);

        let mut output = Vec::with_capacity(inputs.len());
        let mut previous = round_baseline(seed.max(0.0));
        output.push(previous);

        for &x in &inputs[1..] {
            let smoothed = alpha * x + (1.0 - alpha) * previous;
            previous = round_baseline(smoothed.max(0.0));
            output.push(previous);
        }

        Ok(output)
    }
}
