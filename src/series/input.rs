use crate::series::SeriesError;
use crate::utils::file_parsing::split_fields;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parses one line of comma-separated numbers.
///
/// Every field must hold a number; an empty field (e.g. `1,,2`) is rejected
/// rather than skipped so the series keeps its positions.
pub fn parse_series(text: &str) -> Result<Vec<f64>, SeriesError> {
    if text.trim().is_empty() {
        return Err(SeriesError::Empty);
    }

    split_fields(text, ',')
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| SeriesError::InvalidValue {
                    position: i + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Reads a series from a text file.
///
/// Each line is parsed on its own and the last line that parses wins. Lines
/// that fail are logged and skipped; if none parse, the last failure is
/// returned.
pub fn read_series_file<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, SeriesError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut parsed = None;
    let mut last_error = SeriesError::Empty;
    for (n, line) in content.lines().enumerate() {
        match parse_series(line) {
            Ok(values) => parsed = Some(values),
            Err(e) => {
                warn!(path = %path.display(), line = n + 1, error = %e, "skipping line");
                last_error = e;
            }
        }
    }

    match parsed {
        Some(values) => {
            debug!(path = %path.display(), len = values.len(), "series imported");
            Ok(values)
        }
        None => Err(last_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_plain_csv() {
        let got = parse_series("50,60,40,30,90,-5,40,50,30,40").unwrap();
        assert_eq!(got.len(), 10);
        assert_eq!(got[5], -5.0);
    }

    #[test]
    fn tolerates_whitespace_and_decimals() {
        let got = parse_series(" 1.5 , -2.25,3e1 \n").unwrap();
        assert_eq!(got, vec![1.5, -2.25, 30.0]);
    }

    #[test]
    fn rejects_non_numeric_field_with_position() {
        match parse_series("1,two,3") {
            Err(SeriesError::InvalidValue { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "two");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_field_and_blank_text() {
        assert!(matches!(
            parse_series("1,,3"),
            Err(SeriesError::InvalidValue { position: 2, .. })
        ));
        assert!(matches!(parse_series("   "), Err(SeriesError::Empty)));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_series("1,NaN").is_err());
        assert!(parse_series("inf,2").is_err());
    }

    #[test]
    fn file_last_valid_line_wins() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "1,2,3").unwrap();
        writeln!(tf, "not,numbers").unwrap();
        writeln!(tf, "4,5").unwrap();
        writeln!(tf).unwrap();

        let got = read_series_file(tf.path()).unwrap();
        assert_eq!(got, vec![4.0, 5.0]);
    }

    #[test]
    fn file_without_valid_lines_reports_last_error() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "a,b").unwrap();
        writeln!(tf, "1,x").unwrap();

        assert!(matches!(
            read_series_file(tf.path()),
            Err(SeriesError::InvalidValue { position: 2, .. })
        ));
    }

    #[test]
    fn empty_file_is_empty_error() {
        let tf = NamedTempFile::new().unwrap();
        assert!(matches!(read_series_file(tf.path()), Err(SeriesError::Empty)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(read_series_file(missing), Err(SeriesError::Io(_))));
    }
}
