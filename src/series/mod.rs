//! Reading raw series from text and writing baselines back out.
//!
//! Series travel as a single line of delimited numbers, the format users
//! paste into the console or keep in a text file.

mod error;
mod input;
mod output;

pub use error::SeriesError;
pub use input::{parse_series, read_series_file};
pub use output::{SeriesFormat, format_series, format_value, write_series_file};
