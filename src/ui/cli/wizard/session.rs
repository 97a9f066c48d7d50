use anyhow::Result;
use std::io::Write;

use crate::tasks::{BaselineTask, deliver};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::build::{build_estimator, load_series};
use crate::ui::types::choices::{InputChoice, MethodChoice, OutputChoice, Session};

const BANNER: &str = "\
Baseline Estimator
------------------
Enter a series of numeric data, estimate its baseline and output it as you like.
The baseline is a smoothed trend that removes large variations caused by external factors.
";

/// Runs the interactive flow: input, method, output.
///
/// Each step is repeated until it succeeds, so a file that does not parse or a
/// period longer than the series sends the user back to that step instead of
/// ending the session.
pub fn run_wizard<D: PromptDriver, W: Write>(driver: &D, out: &mut W) -> Result<Session> {
    writeln!(out, "{BANNER}")?;

    let (input, series) = loop {
        let input = prompt_choice::<InputChoice, _>(driver)?;
        match load_series(&input) {
            Ok(series) => {
                writeln!(out, "Imported {} values", series.len())?;
                break (input, series);
            }
            Err(e) => eprintln!("✗ {e}"),
        }
    };

    let (method, baseline) = loop {
        let method = prompt_choice::<MethodChoice, _>(driver)?;
        let estimator = match build_estimator(method.clone()) {
            Ok(estimator) => estimator,
            Err(e) => {
                eprintln!("✗ {e}");
                continue;
            }
        };
        match BaselineTask::new(series.clone(), estimator).run() {
            Ok(baseline) => {
                writeln!(out, "Calculation successful")?;
                break (method, baseline);
            }
            Err(e) => eprintln!("✗ {e}"),
        }
    };

    let output = loop {
        let output = prompt_choice::<OutputChoice, _>(driver)?;
        match deliver(&baseline, &output, out) {
            Ok(()) => break output,
            Err(e) => eprintln!("✗ {e}"),
        }
    };

    Ok(Session {
        input,
        method,
        output,
    })
}

/// Offers to store the session as JSON so it can be replayed later.
pub fn offer_save_session<D: PromptDriver>(driver: &D, session: &Session) -> Result<()> {
    if !driver.ask_bool(
        "Save this session?",
        "Saved sessions can be replayed with `baseline-estimator <file>`",
        false,
    )? {
        return Ok(());
    }
    loop {
        let path = driver.ask_string(
            "Session File",
            "Path of the JSON file to create",
            "session.json",
        )?;
        match session.save(path.trim()) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("✗ {e:#}"),
        }
    }
}
