//! Tokenizer shared by the clock, time and period rules.
//!
//! Schedule values are free-form: `"2-4"`, `"13:30 ~ 15:00"`, `"３限"`.
//! Only the numeric shape matters; separators are whatever is left over.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{CoreError, CoreResult, ParseFailure};

#[expect(clippy::unwrap_used, reason = "pattern is a compile-time constant")]
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

#[expect(clippy::unwrap_used, reason = "pattern is a compile-time constant")]
static CLOCK_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?::[0-9]+)?").unwrap());

/// Maps full-width digits and the full-width colon to ASCII.
#[must_use]
pub fn normalize(raw: &str) -> Cow<'_, str> {
    if raw.is_ascii() {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.chars()
            .map(|c| match c {
                '０'..='９' => char::from_u32(u32::from(c) - u32::from('０') + u32::from('0'))
                    .unwrap_or(c),
                '：' => ':',
                _ => c,
            })
            .collect(),
    )
}

/// Every maximal run of decimal digits, in order.
#[must_use]
pub fn digit_runs(raw: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(raw).map(|m| m.as_str()).collect()
}

/// Whether the first digit run carries a minus sign (`"-1"`, `"- 2"`) rather
/// than being preceded by nothing or a range separator (`"1-2"`).
#[must_use]
pub fn has_leading_minus(raw: &str) -> bool {
    DIGIT_RUN
        .find(raw)
        .is_some_and(|m| matches!(raw[..m.start()].trim(), "-" | "−" | "－"))
}

/// Every `digits(:digits)?` token, in order.
#[must_use]
pub fn clock_tokens(raw: &str) -> Vec<&str> {
    CLOCK_TOKEN.find_iter(raw).map(|m| m.as_str()).collect()
}

/// ## Summary
/// Parses a digit run as a base-10 integer.
///
/// ## Errors
/// Returns `ParseError` if the run does not fit in a `u32`.
pub fn parse_number(run: &str, raw: &str) -> CoreResult<u32> {
    run.parse::<u32>()
        .map_err(|_err| CoreError::parse(raw, ParseFailure::NumberTooLarge(run.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_ignore_separators() {
        assert_eq!(digit_runs("2-4"), vec!["2", "4"]);
        assert_eq!(digit_runs("2 ~ 4"), vec!["2", "4"]);
        assert_eq!(digit_runs("13:30"), vec!["13", "30"]);
        assert!(digit_runs("none").is_empty());
    }

    #[test]
    fn clock_tokens_keep_minutes_attached() {
        assert_eq!(clock_tokens("13:30-15:00"), vec!["13:30", "15:00"]);
        assert_eq!(clock_tokens("9 to 10:15"), vec!["9", "10:15"]);
        assert_eq!(clock_tokens("9:"), vec!["9"]);
    }

    #[test]
    fn leading_minus_is_not_a_separator() {
        assert!(has_leading_minus("-1"));
        assert!(has_leading_minus(" - 2-4"));
        assert!(has_leading_minus("－３"));
        assert!(!has_leading_minus("1-2"));
        assert!(!has_leading_minus("1"));
        assert!(!has_leading_minus("period -"));
        assert!(!has_leading_minus("x-1"));
    }

    #[test]
    fn normalize_full_width() {
        assert_eq!(normalize("１３：３０"), "13:30");
        assert_eq!(normalize("３限"), "3限");
        assert!(matches!(normalize("2-4"), Cow::Borrowed(_)));
    }

    #[test]
    fn parse_number_overflow() {
        assert_eq!(parse_number("42", "42"), Ok(42));
        let err = parse_number("99999999999", "99999999999").unwrap_err();
        assert!(matches!(
            err,
            CoreError::ParseError {
                reason: ParseFailure::NumberTooLarge(_),
                ..
            }
        ));
    }
}
