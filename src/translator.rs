//! Turns the text of an add-command into a [`Task`].
//!
//! Dates are `D/M/Y` with one or two digit day and month and a two or four
//! digit year (two digits meaning 20xx). Times are four digit military time
//! (`HHMM`). Both are found anywhere in the trailing text of a command, in
//! any order, and both are optional.

use chrono::{NaiveDate, NaiveTime};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TaskError;
use crate::models::{Task, TaskDateTime, TaskSpan};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]{1,2}/[0-9]{1,2}/([0-9]{2}|[0-9]{4})\b").expect("valid date regex")
});

// The "not after a slash" half of the time rule is checked by hand in
// `find_time_token`, so the year of a date is never read as a time.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}\b").expect("valid time regex"));

/// Day limits per month. February is always 29.
const DAYS_EACH_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const NAMES_EACH_MONTH: [&str; 12] = [
    "January", "Februrary", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const DEADLINE_SEPARATOR: &str = "/by";
const EVENT_SEPARATOR: &str = "/at";
const RANGE_SEPARATOR: &str = "to";

/// Builds a todo from `todo <description>`.
pub fn translate_todo(input: &str) -> Result<Task, TaskError> {
    let description = strip_command(input, "todo");
    check_description(description)?;
    Ok(Task::todo(description))
}

/// Builds a deadline from `deadline <description> /by [<date>] [<time>]`.
pub fn translate_deadline(input: &str) -> Result<Task, TaskError> {
    let rest = strip_command(input, "deadline");
    if rest.is_empty() || !rest.contains(DEADLINE_SEPARATOR) {
        return Err(TaskError::IncompleteCommand("deadline".into()));
    }

    let (description, when) = split_once_or_all(rest, DEADLINE_SEPARATOR);
    let description = description.trim();
    check_description(description)?;

    let by = match when {
        Some(when) => extract_date_time(when)?,
        None => TaskDateTime::default(),
    };
    Ok(Task::deadline(description, by))
}

/// Builds an event from `event <description> /at [<date>] [<time>] [to [<date>] [<time>]]`.
///
/// Without a usable `to` everything after `/at` is the start and the end is
/// left empty. With several `to`s only the first two pieces are read.
pub fn translate_event(input: &str) -> Result<Task, TaskError> {
    let rest = strip_command(input, "event");
    if rest.is_empty() || !rest.contains(EVENT_SEPARATOR) {
        return Err(TaskError::IncompleteCommand("event".into()));
    }

    let (description, when) = split_once_or_all(rest, EVENT_SEPARATOR);
    let description = description.trim();
    check_description(description)?;

    let mut span = TaskSpan::default();
    if let Some(when) = when {
        let has_end = when.contains(RANGE_SEPARATOR) && !when.ends_with(RANGE_SEPARATOR);
        // The end is the piece between the first and second `to`.
        let mut parts = when.split(RANGE_SEPARATOR);
        match (parts.next(), parts.next()) {
            (Some(start), Some(end)) if has_end => {
                span.start = extract_date_time(start)?;
                span.end = extract_date_time(end)?;
            }
            _ => span.start = extract_date_time(when)?,
        }
    }
    Ok(Task::event(description, span))
}

/// Pulls the first date and the first time out of `text`.
pub fn extract_date_time(text: &str) -> Result<TaskDateTime, TaskError> {
    Ok(TaskDateTime::new(extract_date(text)?, extract_time(text)?))
}

/// Finds the first `D/M/Y` token in `text` and validates it.
///
/// Returns `Ok(None)` when there is no date token at all.
pub fn extract_date(text: &str) -> Result<Option<NaiveDate>, TaskError> {
    let Some(token) = DATE_PATTERN.find(text) else {
        return Ok(None);
    };

    let mut parts = token.as_str().split('/');
    let mut next_number = || parts.next().and_then(|p| p.parse::<u32>().ok()).unwrap_or(0);
    let day = next_number();
    let month = next_number();
    let mut year = next_number() as i32;

    check_date(day, month)?;
    if year < 100 {
        year += 2000;
    }

    debug!("date token `{}` -> {}-{}-{}", token.as_str(), year, month, day);
    // 29/2 passes the table but may still not exist in the given year.
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| TaskError::DayTooBig(month_name(month).into()))
}

/// Finds the first `HHMM` token in `text` and validates it.
///
/// Returns `Ok(None)` when there is no time token at all.
pub fn extract_time(text: &str) -> Result<Option<NaiveTime>, TaskError> {
    let Some(token) = find_time_token(text) else {
        return Ok(None);
    };

    let hour: u32 = token[..2].parse().map_err(|_| TaskError::HourOutOfBounds)?;
    let minute: u32 = token[2..].parse().map_err(|_| TaskError::MinuteOutOfBounds)?;
    check_time(hour, minute)?;

    debug!("time token `{}` -> {:02}:{:02}", token, hour, minute);
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(Some)
        .ok_or(TaskError::HourOutOfBounds)
}

/// Rejects a day/month pair that the fixed month table does not allow.
pub fn check_date(day: u32, month: u32) -> Result<(), TaskError> {
    if day == 0 {
        return Err(TaskError::DayZero);
    }
    if month == 0 {
        return Err(TaskError::MonthZero);
    }
    if month > 12 {
        return Err(TaskError::MonthTooBig);
    }
    if day > DAYS_EACH_MONTH[(month - 1) as usize] {
        return Err(TaskError::DayTooBig(month_name(month).into()));
    }
    Ok(())
}

/// Rejects an hour outside 0..=23 or a minute outside 0..=59.
pub fn check_time(hour: u32, minute: u32) -> Result<(), TaskError> {
    if hour > 23 {
        return Err(TaskError::HourOutOfBounds);
    }
    if minute > 59 {
        return Err(TaskError::MinuteOutOfBounds);
    }
    Ok(())
}

fn month_name(month: u32) -> &'static str {
    NAMES_EACH_MONTH[(month.clamp(1, 12) - 1) as usize]
}

fn check_description(description: &str) -> Result<(), TaskError> {
    if description.is_empty() {
        return Err(TaskError::NoDescription);
    }
    Ok(())
}

/// Drops the command keyword and surrounding whitespace.
fn strip_command<'a>(input: &'a str, keyword: &str) -> &'a str {
    input.get(keyword.len()..).unwrap_or_default().trim()
}

fn split_once_or_all<'a>(text: &'a str, separator: &str) -> (&'a str, Option<&'a str>) {
    match text.split_once(separator) {
        Some((head, tail)) => (head, Some(tail)),
        None => (text, None),
    }
}

/// First four-digit run ending on a word boundary that does not directly
/// follow a `/`.
fn find_time_token(text: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(m) = TIME_PATTERN.find_at(text, from) {
        if text[..m.start()].ends_with('/') {
            from = m.start() + 1;
            continue;
        }
        return Some(m.as_str());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_date_widths() {
        assert_eq!(extract_date("2/12/23").unwrap(), date(2023, 12, 2));
        assert_eq!(extract_date("02/12/2023").unwrap(), date(2023, 12, 2));
        assert_eq!(extract_date("on 1/05/2024 please").unwrap(), date(2024, 5, 1));
        assert_eq!(extract_date("no date here").unwrap(), None);
    }

    #[test]
    fn test_date_needs_word_boundaries() {
        assert_eq!(extract_date("1/1/202").unwrap(), None);
        assert_eq!(extract_date("123/1/20").unwrap(), None);
        assert_eq!(extract_date("1/1/20x").unwrap(), None);
    }

    #[test]
    fn test_first_date_wins() {
        assert_eq!(extract_date("3/4/21 and 5/6/22").unwrap(), date(2021, 4, 3));
    }

    #[test]
    fn test_time_token() {
        assert_eq!(extract_time("at 1800").unwrap(), time(18, 0));
        assert_eq!(extract_time("0000").unwrap(), time(0, 0));
        assert_eq!(extract_time("18:00").unwrap(), None);
        assert_eq!(extract_time("180").unwrap(), None);
    }

    #[test]
    fn test_year_is_not_a_time() {
        assert_eq!(extract_time("1/1/2020").unwrap(), None);
        assert_eq!(extract_time("1/1/2020 0930").unwrap(), time(9, 30));
        assert_eq!(extract_time("0930 1/1/2020").unwrap(), time(9, 30));
    }

    #[test]
    fn test_time_inside_longer_digit_run() {
        // Only a trailing boundary is required.
        assert_eq!(extract_time("12345").unwrap(), time(23, 45));
    }

    #[test]
    fn test_check_date() {
        assert_eq!(check_date(0, 1), Err(TaskError::DayZero));
        assert_eq!(check_date(1, 0), Err(TaskError::MonthZero));
        assert_eq!(check_date(1, 13), Err(TaskError::MonthTooBig));
        assert_eq!(check_date(32, 1), Err(TaskError::DayTooBig("January".into())));
        assert_eq!(check_date(31, 4), Err(TaskError::DayTooBig("April".into())));
        assert_eq!(check_date(31, 12), Ok(()));
    }

    #[test]
    fn test_february_is_always_29() {
        assert_eq!(check_date(29, 2), Ok(()));
        assert_eq!(check_date(30, 2), Err(TaskError::DayTooBig("Februrary".into())));
        assert_eq!(extract_date("29/2/24").unwrap(), date(2024, 2, 29));
        // Allowed by the table, but 2023 has no 29 February.
        assert_eq!(extract_date("29/2/23"), Err(TaskError::DayTooBig("Februrary".into())));
    }

    #[test]
    fn test_check_time() {
        assert_eq!(check_time(24, 0), Err(TaskError::HourOutOfBounds));
        assert_eq!(check_time(12, 60), Err(TaskError::MinuteOutOfBounds));
        assert_eq!(check_time(23, 59), Ok(()));
        assert_eq!(extract_time("2400"), Err(TaskError::HourOutOfBounds));
        assert_eq!(extract_time("1260"), Err(TaskError::MinuteOutOfBounds));
    }

    #[test]
    fn test_strip_command_short_input() {
        assert_eq!(strip_command("tod", "todo"), "");
        assert_eq!(strip_command("todo   x  ", "todo"), "x");
    }
}
