use crate::estimators::{BaselineEstimator, EstimatorError};
use crate::series::{SeriesError, SeriesFormat, format_series, write_series_file};
use crate::ui::types::build::{build_estimator, load_series};
use crate::ui::types::choices::{OutputChoice, Session};
use anyhow::Context;
use std::io::Write;
use tracing::info;

/// One series paired with the estimator that will smooth it.
pub struct BaselineTask {
    series: Vec<f64>,
    estimator: Box<dyn BaselineEstimator>,
}

impl BaselineTask {
    pub fn new(series: Vec<f64>, estimator: Box<dyn BaselineEstimator>) -> Self {
        Self { series, estimator }
    }

    pub fn run(&self) -> Result<Vec<f64>, EstimatorError> {
        let baseline = self.estimator.calculate_baseline(&self.series)?;
        info!(
            method = self.estimator.name(),
            len = baseline.len(),
            "baseline calculated"
        );
        Ok(baseline)
    }
}

/// Hands a finished baseline to its destination. Console output goes to `out`
/// as a comma-separated line.
pub fn deliver<W: Write>(
    baseline: &[f64],
    output: &OutputChoice,
    out: &mut W,
) -> Result<(), SeriesError> {
    match output {
        OutputChoice::ExportToFile(p) => {
            write_series_file(&p.path, baseline, p.format)?;
            writeln!(out, "Successfully written to {}", p.path.display())?;
        }
        OutputChoice::DisplayInConsole(_) => {
            writeln!(out, "Results:")?;
            writeln!(out, "{}", format_series(baseline, SeriesFormat::Csv)?)?;
        }
    }
    Ok(())
}

/// Executes a saved session without any prompts.
pub fn run_session<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<Vec<f64>> {
    let series = load_series(&session.input).context("failed to load input series")?;
    let estimator =
        build_estimator(session.method.clone()).context("invalid estimation parameters")?;
    let baseline = BaselineTask::new(series, estimator)
        .run()
        .context("baseline calculation failed")?;
    deliver(&baseline, &session.output, out).context("failed to deliver results")?;
    Ok(baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::{MovingAverage, SingleExponentialSmoothing};
    use crate::ui::types::choices::{
        ConsoleInputParameters, ExponentialSmoothingParameters, ExportParameters, InputChoice,
        MethodChoice, MovingAverageParameters, NoParams,
    };
    use std::fs;
    use tempfile::TempDir;

    fn console(values: &str) -> InputChoice {
        InputChoice::EnterInConsole(ConsoleInputParameters {
            values: values.into(),
        })
    }

    #[test]
    fn task_runs_its_estimator() {
        let task = BaselineTask::new(vec![-10.0, -20.0, -30.0], Box::new(MovingAverage::new(3)));
        assert_eq!(task.run().unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn task_reports_insufficient_data() {
        let task = BaselineTask::new(
            vec![1.0, 2.0],
            Box::new(SingleExponentialSmoothing::new(3, 0.5)),
        );
        assert!(matches!(
            task.run(),
            Err(EstimatorError::InsufficientData {
                required: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn display_prints_results_line() {
        let mut out = Vec::new();
        deliver(
            &[50.0, 55.0, 43.33, 8.5],
            &OutputChoice::DisplayInConsole(NoParams {}),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Results:\n50,55,43.33,8.5\n");
    }

    #[test]
    fn session_exports_to_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("baseline.txt");
        let session = Session {
            input: console("15,20,16,90,-90,-5,17,19,16,18"),
            method: MethodChoice::SingleExponentialSmoothing(ExponentialSmoothingParameters {
                period: 4,
                smoothing_factor: 0.5,
            }),
            output: OutputChoice::ExportToFile(ExportParameters {
                path: target.clone(),
                format: SeriesFormat::Csv,
            }),
        };

        let mut out = Vec::new();
        let baseline = run_session(&session, &mut out).unwrap();
        assert_eq!(baseline.len(), 10);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "35.25,27.63,21.81,55.91,0,0,8.5,13.75,14.88,16.44\n"
        );
        assert!(String::from_utf8(out).unwrap().starts_with("Successfully written"));
    }

    #[test]
    fn session_errors_carry_context() {
        let session = Session {
            input: console("1,2"),
            method: MethodChoice::SingleExponentialSmoothing(ExponentialSmoothingParameters {
                period: 5,
                smoothing_factor: 0.5,
            }),
            output: OutputChoice::DisplayInConsole(NoParams {}),
        };
        let err = run_session(&session, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "baseline calculation failed");
        assert!(err.root_cause().to_string().contains("insufficient data"));

        let bad_input = Session {
            input: console("1,x"),
            method: MethodChoice::MovingAverage(MovingAverageParameters::default()),
            output: OutputChoice::DisplayInConsole(NoParams {}),
        };
        let err = run_session(&bad_input, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "failed to load input series");
    }
}
