use std::io;

use chrono::Utc;
use clap::Parser;
use termcal_app::cli::Cli;
use termcal_app::error::AppError;
use termcal_app::logging;
use termcal_app::run::{Outcome, report_record_errors, run};
use termcal_core::config::load_config;
use termcal_service::ServiceError;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter_handle = logging::init();

    let settings = load_config(cli.config.as_deref())?;
    tracing::debug!(config = ?settings, "Configuration loaded");
    logging::apply_level(&filter_handle, &settings.logging.level);

    match run(&cli, &settings, Utc::now(), &mut io::stdout().lock()) {
        Ok(Outcome::Written { path, events }) => {
            println!("Wrote {events} event(s) to {}", path.display());
            Ok(())
        }
        Ok(Outcome::Listed { .. }) => Ok(()),
        Err(err) => {
            if let AppError::ServiceError(ServiceError::InvalidRecords(errors)) = &err {
                report_record_errors(errors, &mut io::stderr().lock())?;
            }
            Err(err.into())
        }
    }
}
