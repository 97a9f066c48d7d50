mod error;
mod estimators;
mod series;

pub use error::BuildError;

pub use estimators::build_estimator;
pub use series::load_series;
