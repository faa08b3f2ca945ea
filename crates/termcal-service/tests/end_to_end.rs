//! Schedule YAML to iCalendar text.

use chrono::{TimeZone, Utc};
use termcal_rfc::rfc::ical::serialize;
use termcal_service::{CalendarAssembler, ScheduleDocument, ServiceError};

const SCHEDULE: &str = "\
year: 2024
mailto: lab@example.com
first:
  - summary: Algorithms
    description: Room 101, Building A
    weekday: MO
    period: 1
second:
  - summary: Seminar
    description: |
      Bring slides;
      one per person
    weekday: TH
    time: 13:30-15:00
";

fn assembler() -> CalendarAssembler {
    CalendarAssembler::new(
        "-//Test//Timetable//EN",
        "Asia/Tokyo",
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    )
}

fn unfolded_lines(text: &str) -> Vec<String> {
    text.replace("\r\n ", "")
        .split("\r\n")
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[test_log::test]
fn schedule_to_ics() {
    let doc = ScheduleDocument::from_yaml(SCHEDULE).unwrap();
    let ical = assembler().assemble(&doc).unwrap();
    let text = serialize(&ical);

    assert!(text.ends_with("END:VCALENDAR\r\n"));
    let lines = unfolded_lines(&text);

    assert_eq!(
        &lines[..4],
        &[
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "PRODID:-//Test//Timetable//EN",
            "ATTENDEE:MAILTO:lab@example.com",
        ]
    );
    assert_eq!(
        &lines[4..14],
        &[
            "BEGIN:VTIMEZONE",
            "TZID:Asia/Tokyo",
            "BEGIN:STANDARD",
            "DTSTART:20240331T090000",
            "TZOFFSETFROM:+0900",
            "TZOFFSETTO:+0900",
            "TZNAME:JST",
            "END:STANDARD",
            "END:VTIMEZONE",
            "BEGIN:VEVENT",
        ]
    );

    let algorithms: Vec<&str> = event_lines(&lines, "SUMMARY:Algorithms");
    assert!(algorithms[1].starts_with("UID:"));
    assert_eq!(
        &algorithms[2..],
        &[
            "DTSTAMP:20240301T120000Z",
            "DTSTART;TZID=Asia/Tokyo:20240401T093000",
            "DTEND;TZID=Asia/Tokyo:20240401T110000",
            "RRULE:FREQ=WEEKLY;UNTIL=20240731T145959Z;BYDAY=MO",
            "SUMMARY:Algorithms",
            "DESCRIPTION:Room 101\\, Building A",
            "END:VEVENT",
        ]
    );

    let seminar = event_lines(&lines, "SUMMARY:Seminar");
    assert!(seminar.contains(&"DTSTART;TZID=Asia/Tokyo:20240901T133000"));
    assert!(seminar.contains(&"DTEND;TZID=Asia/Tokyo:20240901T150000"));
    assert!(seminar.contains(&"RRULE:FREQ=WEEKLY;UNTIL=20250331T145959Z;BYDAY=TH"));
    assert!(seminar.contains(&"DESCRIPTION:Bring slides\\;\\none per person\\n"));
}

/// Lines of the VEVENT block containing `marker`, BEGIN and END included.
fn event_lines<'a>(lines: &'a [String], marker: &str) -> Vec<&'a str> {
    let mut block = Vec::new();
    let mut found = false;
    for line in lines {
        if line == "BEGIN:VEVENT" {
            block.clear();
        }
        block.push(line.as_str());
        if line == marker {
            found = true;
        }
        if line == "END:VEVENT" && found {
            return block;
        }
    }
    panic!("no event containing {marker}");
}

#[test]
fn output_is_reproducible() {
    let doc = ScheduleDocument::from_yaml(SCHEDULE).unwrap();
    let once = serialize(&assembler().assemble(&doc).unwrap());
    let twice = serialize(&assembler().assemble(&doc).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn bad_records_are_reported_together() {
    let doc = ScheduleDocument::from_yaml(
        "year: 2024\nfirst:\n  - summary: A\n    weekday: MO\n    period: 0\n  - summary: B\n    weekday: MO\n    time: soon\n",
    )
    .unwrap();

    match assembler().assemble(&doc) {
        Err(ServiceError::InvalidRecords(errors)) => {
            let summaries: Vec<_> = errors.iter().map(|e| e.summary.as_str()).collect();
            assert_eq!(summaries, ["A", "B"]);
            assert_eq!(errors[0].raw_value(), Some("0"));
            assert_eq!(errors[1].raw_value(), Some("soon"));
        }
        other => panic!("expected InvalidRecords, got {other:?}"),
    }
}
