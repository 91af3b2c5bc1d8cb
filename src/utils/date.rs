use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Every date from `start` to `end`, both included. Empty when `end < start`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Inclusive day count; `None` when the range is reversed.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    let n = (end - start).num_days();
    if n < 0 {
        None
    } else {
        u32::try_from(n + 1).ok()
    }
}
