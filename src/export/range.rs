use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a period filter into an inclusive date range.
///
/// Accepts:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(r.to_string());

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start.len() != end.len() {
        return Err(AppError::InvalidPeriod(format!(
            "{r}: start and end must use the same format"
        )));
    }

    let (first, _) = bounds(start).ok_or_else(invalid)?;
    let (_, last) = bounds(end).ok_or_else(invalid)?;

    if last < first {
        return Err(AppError::InvalidPeriod(format!("{r}: end is before start")));
    }

    Ok((first, last))
}

/// First and last day covered by a single year, month or day token.
fn bounds(token: &str) -> Option<(NaiveDate, NaiveDate)> {
    match token.len() {
        4 => {
            let y: i32 = token.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d").ok()?;
            Some((first, last_day_of_month(first)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_tokens() {
        assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2025-06-18").unwrap(), (d("2025-06-18"), d("2025-06-18")));
    }

    #[test]
    fn ranges() {
        assert_eq!(
            parse_range("2025-06:2025-08").unwrap(),
            (d("2025-06-01"), d("2025-08-31"))
        );
        assert_eq!(
            parse_range("2025-06-01:2025-06-10").unwrap(),
            (d("2025-06-01"), d("2025-06-10"))
        );
        assert_eq!(parse_range("2024:2025").unwrap(), (d("2024-01-01"), d("2025-12-31")));
    }

    #[test]
    fn rejects_mixed_and_reversed() {
        assert!(parse_range("2025:2025-06").is_err());
        assert!(parse_range("2025-06:2025-01").is_err());
        assert!(parse_range("2025-13").is_err());
        assert!(parse_range("last week").is_err());
    }
}
