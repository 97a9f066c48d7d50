use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("no values found")]
    Empty,

    #[error("value {position} is not numeric: {token:?}")]
    InvalidValue { position: usize, token: String },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
