use crate::ui::types::choices::{InputChoice, MethodChoice, OutputChoice};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// A complete run: where the series comes from, how the baseline is
/// estimated and where it goes. Saved sessions replay without prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub input: InputChoice,
    pub method: MethodChoice,
    pub output: OutputChoice,
}

impl Session {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open session file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid session file {}", path.display()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create session file {}", path.display()))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesFormat;
    use crate::ui::types::choices::{
        ConsoleInputParameters, ExponentialSmoothingParameters, ExportParameters,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample() -> Session {
        Session {
            input: InputChoice::EnterInConsole(ConsoleInputParameters {
                values: "15,20,16,90".into(),
            }),
            method: MethodChoice::SingleExponentialSmoothing(ExponentialSmoothingParameters {
                period: 2,
                smoothing_factor: 0.5,
            }),
            output: OutputChoice::ExportToFile(ExportParameters {
                path: "baseline.txt".into(),
                format: SeriesFormat::Tsv,
            }),
        }
    }

    #[test]
    fn save_then_load() {
        let tf = NamedTempFile::new().unwrap();
        sample().save(tf.path()).unwrap();
        assert_eq!(Session::load(tf.path()).unwrap(), sample());
    }

    #[test]
    fn reads_handwritten_session() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(
            tf,
            r#"{{
                "input": {{ "type": "enter-in-console", "params": {{ "values": "1,2" }} }},
                "method": {{ "type": "moving-average", "params": {{}} }},
                "output": {{ "type": "display-in-console", "params": {{}} }}
            }}"#
        )
        .unwrap();

        let s = Session::load(tf.path()).unwrap();
        assert!(matches!(s.method, MethodChoice::MovingAverage(ref p) if p.period == 3));
    }

    #[test]
    fn malformed_session_names_the_file() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(tf, "{{ not json").unwrap();
        let err = Session::load(tf.path()).unwrap_err();
        assert!(format!("{err}").contains("invalid session file"));
    }
}
