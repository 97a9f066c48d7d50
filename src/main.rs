use anyhow::Result;
use baseline_estimator::tasks::run_session;
use baseline_estimator::ui::cli::drivers::InquireDriver;
use baseline_estimator::ui::cli::wizard::{offer_save_session, run_wizard};
use baseline_estimator::ui::types::choices::Session;
use std::env;
use std::io;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with printed results.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "baseline_estimator=warn".into()),
        )
        .init();

    let mut stdout = io::stdout().lock();

    match env::args_os().nth(1) {
        Some(path) => {
            let session = Session::load(&path)?;
            run_session(&session, &mut stdout)?;
        }
        None => {
            let driver = InquireDriver;
            let session = run_wizard(&driver, &mut stdout)?;
            offer_save_session(&driver, &session)?;
        }
    }

    Ok(())
}
