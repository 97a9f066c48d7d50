use crate::estimators::EstimatorError;

/// A method that turns a noisy series into its estimated baseline.
///
/// Implementations are configured once at construction and hold no state
/// between calls, so the same estimator can be applied to any number of
/// series, in any order, with identical results for identical input.
pub trait BaselineEstimator {
    /// Human readable method name, used in logs and prompts.
    fn name(&self) -> &str;

    /// Computes the baseline for every position of `inputs`.
    ///
    /// On success the returned series has exactly `inputs.len()` values, each
    /// non-negative and rounded with [`round_baseline`]. A method that cannot
    /// produce a full series fails as a whole; partial output is never
    /// returned.
    ///
    /// [`round_baseline`]: crate::utils::math::round_baseline
    fn calculate_baseline(&self, inputs: &[f64]) -> Result<Vec<f64>, EstimatorError>;
}

/// Window length actually used for a configured period.
///
/// A period of zero would describe an empty window, so it is read as a
/// window over the single current value.
#[inline]
pub(crate) fn effective_window(period: usize) -> usize {
    period.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_period_reads_as_one() {
        assert_eq!(effective_window(0), 1);
        assert_eq!(effective_window(1), 1);
        assert_eq!(effective_window(10), 10);
    }
}
