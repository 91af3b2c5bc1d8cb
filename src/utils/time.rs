//! Time utilities: parsing HH:MM, shift durations, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse a wall-clock time. Accepts "HH:MM" and the "HH:MM:SS" shape
/// returned by SQL `time` columns (seconds are dropped).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Minutes since midnight, or `None` when the string is not a time of day.
pub fn parse_time_to_minutes(t: &str) -> Option<i64> {
    parse_time(t).map(|nt| i64::from(nt.hour()) * 60 + i64::from(nt.minute()))
}

/// Gross shift length in minutes. A clock-out earlier than the clock-in
/// is an overnight shift, so the result always lies in `[0, 1440)`.
pub fn shift_minutes(clock_in: &str, clock_out: &str) -> Option<i64> {
    let start = parse_time_to_minutes(clock_in)?;
    let mut end = parse_time_to_minutes(clock_out)?;

    if end < start {
        end += MINUTES_PER_DAY;
    }

    Some(end - start)
}

/// Paid minutes: gross shift minus break, never below zero.
pub fn worked_minutes(clock_in: &str, clock_out: &str, break_minutes: u32) -> Option<i64> {
    let gross = shift_minutes(clock_in, clock_out)?;
    Some((gross - i64::from(break_minutes)).max(0))
}

/// Normalize a user-supplied time to "HH:MM", rejecting anything unparsable.
pub fn normalize_time(input: &str) -> AppResult<String> {
    parse_time(input)
        .map(|t| t.format("%H:%M").to_string())
        .ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_time(s)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(parse_time_to_minutes("00:00"), Some(0));
        assert_eq!(parse_time_to_minutes("07:30"), Some(450));
        assert_eq!(parse_time_to_minutes("23:59"), Some(1439));
    }

    #[test]
    fn accepts_sql_time_with_seconds() {
        assert_eq!(parse_time_to_minutes("16:00:00"), Some(960));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_time_to_minutes(""), None);
        assert_eq!(parse_time_to_minutes("noon"), None);
        assert_eq!(parse_time_to_minutes("25:00"), None);
        assert_eq!(parse_time_to_minutes("12:75"), None);
    }

    #[test]
    fn same_day_shift() {
        assert_eq!(shift_minutes("08:00", "16:00"), Some(480));
    }

    #[test]
    fn overnight_shift_wraps() {
        // 360 + 1440 - 1320
        assert_eq!(shift_minutes("22:00", "06:00"), Some(480));
    }

    #[test]
    fn zero_length_shift() {
        assert_eq!(shift_minutes("09:15", "09:15"), Some(0));
    }

    #[test]
    fn break_longer_than_shift_clamps_to_zero() {
        assert_eq!(worked_minutes("10:00", "11:00", 90), Some(0));
        assert_eq!(worked_minutes("10:00", "11:00", 60), Some(0));
    }

    #[test]
    fn normalize_pads_single_digit_hour() {
        assert_eq!(normalize_time("7:05").unwrap(), "07:05");
        assert!(normalize_time("7h05").is_err());
    }
}
