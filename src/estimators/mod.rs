mod baseline_estimator;
mod error;
mod exponential_smoothing;
mod moving_average;

pub use baseline_estimator::BaselineEstimator;
pub use error::EstimatorError;
pub use exponential_smoothing::SingleExponentialSmoothing;
pub use moving_average::MovingAverage;
