use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use termcal_core::config::Settings;
use termcal_rfc::rfc::ical::serialize;
use termcal_service::{CalendarAssembler, RecordError, ScheduleDocument, preview};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, events: usize },
    Listed { events: usize },
}

/// ## Summary
/// Reads the schedule named by `cli`, builds the calendar and either writes
/// it to the output path or lists its occurrences to `stdout`.
///
/// The timezone is taken from `--timezone`, then the document, then `settings`.
///
/// ## Errors
/// Returns `FileError` when the schedule cannot be read or the calendar
/// cannot be written, and `ServiceError` when the document is malformed or
/// any record fails to convert. Nothing is written in the latter case.
#[tracing::instrument(skip_all, fields(schedule = %cli.schedule.display()))]
pub fn run(
    cli: &Cli,
    settings: &Settings,
    now: DateTime<Utc>,
    stdout: &mut impl Write,
) -> AppResult<Outcome> {
    let text = fs::read_to_string(&cli.schedule).map_err(AppError::file(&cli.schedule))?;
    let mut doc = ScheduleDocument::from_yaml(&text)?;
    if let Some(tz) = &cli.timezone {
        doc.timezone = Some(tz.clone());
    }

    let assembler = CalendarAssembler::new(
        settings.calendar.prodid.as_str(),
        settings.calendar.timezone.as_str(),
        now,
    );
    let ical = assembler.assemble(&doc)?;
    let events = ical.events().len();

    if cli.list {
        for event in preview(&ical, cli.limit)? {
            writeln!(stdout, "{}", event.summary)?;
            for date in &event.dates {
                writeln!(stdout, "  {}", date.format("%Y-%m-%d %a %H:%M %Z"))?;
            }
            if event.limited {
                writeln!(stdout, "  ...")?;
            }
        }
        return Ok(Outcome::Listed { events });
    }

    let path = cli.output_path();
    fs::write(&path, serialize(&ical)).map_err(AppError::file(&path))?;
    tracing::info!(path = %path.display(), events, "Calendar written");

    Ok(Outcome::Written { path, events })
}

/// ## Summary
/// Writes one line per failed record, naming its term, summary and the
/// offending value.
///
/// ## Errors
/// Propagates write failures.
pub fn report_record_errors(errors: &[RecordError], out: &mut impl Write) -> std::io::Result<()> {
    for err in errors {
        writeln!(out, "error: {err}")?;
    }
    Ok(())
}
