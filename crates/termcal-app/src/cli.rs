use std::path::PathBuf;

use clap::Parser;

/// Default number of occurrences listed per event by `--list`.
pub const DEFAULT_LIST_LIMIT: u16 = 50;

/// Convert a YAML term schedule into an iCalendar file.
#[derive(Debug, Clone, Parser)]
#[command(name = "termcal", version, about)]
pub struct Cli {
    /// YAML file that describes the schedule.
    pub schedule: PathBuf,

    /// Output iCalendar file. Defaults to the schedule path with an `.ics` extension.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// IANA timezone for all events, overriding the document and configuration.
    #[arg(long, value_name = "TZ")]
    pub timezone: Option<String>,

    /// Configuration file (TOML). Defaults to `termcal.toml` if present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print each event's occurrences instead of writing a file.
    #[arg(long)]
    pub list: bool,

    /// Maximum occurrences printed per event with `--list`.
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT, requires = "list")]
    pub limit: u16,
}

impl Cli {
    /// Where the calendar is written.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| self.schedule.with_extension("ics"))
    }
}
