use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("insufficient data for initial window: required {required} values, got {got}")]
    InsufficientData { required: usize, got: usize },
}
