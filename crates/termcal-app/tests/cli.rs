use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use clap::Parser;
use termcal_app::cli::Cli;
use termcal_app::error::AppError;
use termcal_app::run::{Outcome, report_record_errors, run};
use termcal_core::config::{CalendarConfig, LoggingConfig, Settings};
use termcal_service::ServiceError;

const SCHEDULE: &str = "\
year: 2024
mailto: student@example.com
first:
  - summary: Algebra
    description: Room 101
    weekday: MO
    period: 1
second:
  - summary: Seminar
    description: ''
    weekday: TH
    time: '13:00'
";

fn settings() -> Settings {
    Settings {
        calendar: CalendarConfig {
            timezone: "Asia/Tokyo".to_string(),
            prodid: "-//termcal//test//EN".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
    }
}

fn cli(args: &[&str], schedule: &Path) -> Cli {
    let mut argv = vec!["termcal".to_string(), schedule.display().to_string()];
    argv.extend(args.iter().map(ToString::to_string));
    Cli::parse_from(argv)
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test_log::test]
fn writes_calendar_next_to_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = dir.path().join("2024.yaml");
    fs::write(&schedule, SCHEDULE).unwrap();

    let mut stdout = Vec::new();
    let outcome = run(&cli(&[], &schedule), &settings(), now(), &mut stdout).unwrap();

    let expected = dir.path().join("2024.ics");
    assert_eq!(
        outcome,
        Outcome::Written {
            path: expected.clone(),
            events: 2
        }
    );
    assert!(stdout.is_empty());

    let ics = fs::read_to_string(expected).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.contains("PRODID:-//termcal//test//EN\r\n"));
    assert!(ics.contains("ATTENDEE:MAILTO:student@example.com\r\n"));
    assert!(ics.contains("DTSTART;TZID=Asia/Tokyo:20240401T093000\r\n"));
    assert!(ics.contains("DTSTART;TZID=Asia/Tokyo:20240901T130000\r\n"));
    assert!(ics.contains("RRULE:FREQ=WEEKLY;UNTIL=20250331T145959Z;BYDAY=TH\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
}

#[test_log::test]
fn explicit_output_and_timezone() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = dir.path().join("2024.yaml");
    fs::write(&schedule, SCHEDULE).unwrap();
    let out = dir.path().join("custom.ics");
    let out_arg = out.display().to_string();

    let args = ["-o", out_arg.as_str(), "--timezone", "Europe/Berlin"];
    run(&cli(&args, &schedule), &settings(), now(), &mut Vec::new()).unwrap();

    assert!(!dir.path().join("2024.ics").exists());
    let ics = fs::read_to_string(out).unwrap();
    assert!(ics.contains("DTSTART;TZID=Europe/Berlin:20240401T093000\r\n"));
    assert!(ics.contains("BEGIN:VTIMEZONE\r\nTZID:Europe/Berlin\r\n"));
    assert!(ics.contains("BEGIN:DAYLIGHT\r\nDTSTART:20240331T020000\r\n"));
    assert!(ics.contains("BEGIN:STANDARD\r\nDTSTART:20241027T030000\r\n"));
}

#[test_log::test]
fn list_prints_occurrences_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = dir.path().join("2024.yaml");
    fs::write(&schedule, SCHEDULE).unwrap();

    let mut stdout = Vec::new();
    let outcome = run(
        &cli(&["--list", "--limit", "2"], &schedule),
        &settings(),
        now(),
        &mut stdout,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Listed { events: 2 });
    assert!(!dir.path().join("2024.ics").exists());

    let listing = String::from_utf8(stdout).unwrap();
    assert!(listing.contains(
        "Algebra\n  2024-04-01 Mon 09:30 JST\n  2024-04-08 Mon 09:30 JST\n  ...\n"
    ));
}

#[test_log::test]
fn failing_records_are_reported_and_nothing_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = dir.path().join("bad.yaml");
    fs::write(
        &schedule,
        "\
year: 2024
first:
  - summary: Ghost
    description: ''
    weekday: MO
    period: 9
  - summary: Floating
    description: ''
    weekday: TU
",
    )
    .unwrap();

    let err = run(&cli(&[], &schedule), &settings(), now(), &mut Vec::new()).unwrap_err();
    assert!(!dir.path().join("bad.ics").exists());

    let AppError::ServiceError(ServiceError::InvalidRecords(errors)) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(errors.len(), 2);

    let mut report = Vec::new();
    report_record_errors(errors, &mut report).unwrap();
    let report = String::from_utf8(report).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Ghost"));
    assert!(lines[0].contains('9'));
    assert!(lines[1].contains("Floating"));
}

#[test_log::test]
fn missing_schedule_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = dir.path().join("absent.yaml");

    let err = run(&cli(&[], &schedule), &settings(), now(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, AppError::FileError { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}
