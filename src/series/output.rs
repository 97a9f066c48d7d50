use crate::series::SeriesError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::info;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SeriesFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Formats a value with at most two decimals, dropping trailing zeros.
pub fn format_value(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        t => t.to_string(),
    }
}

pub fn format_series(values: &[f64], fmt: SeriesFormat) -> Result<String, SeriesError> {
    let joined = |d: &str| {
        values
            .iter()
            .map(|v| format_value(*v))
            .collect::<Vec<_>>()
            .join(d)
    };

    Ok(match fmt {
        SeriesFormat::Csv => joined(","),
        SeriesFormat::Tsv => joined("\t"),
        SeriesFormat::Json => serde_json::to_string(values)?,
    })
}

pub fn write_series_file<P: AsRef<Path>>(
    path: P,
    values: &[f64],
    fmt: SeriesFormat,
) -> Result<(), SeriesError> {
    let path = path.as_ref();
    let line = format_series(values, fmt)?;
    let mut w = File::create(path)?;
    writeln!(w, "{line}")?;
    info!(path = %path.display(), format = %fmt, len = values.len(), "baseline exported");
    Ok(())
}
