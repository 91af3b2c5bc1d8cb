use crate::utils::time::worked_minutes;
use rust_decimal::Decimal;

/// Paid hours for one shift: overnight-aware, break deducted, never negative.
/// `None` when either time cannot be parsed.
///
/// The value is not rounded; rounding happens when totals are formatted.
pub fn calculate_entry_hours(clock_in: &str, clock_out: &str, break_minutes: u32) -> Option<Decimal> {
    let minutes = worked_minutes(clock_in, clock_out, break_minutes)?;
    Some(Decimal::from(minutes) / Decimal::from(60))
}

/// Cost of `hours` worked on each of `days` days at `hourly_rate`.
/// `None` when the product does not fit in a `Decimal`.
pub fn calculate_entry_cost(hours: Decimal, days: u32, hourly_rate: Decimal) -> Option<Decimal> {
    hours.checked_mul(Decimal::from(days))?.checked_mul(hourly_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn day_shift_minus_break() {
        assert_eq!(calculate_entry_hours("08:00", "16:00", 60), Some(dec!(7)));
    }

    #[test]
    fn overnight_shift() {
        assert_eq!(calculate_entry_hours("22:00", "06:00", 30), Some(dec!(7.5)));
    }

    #[test]
    fn zero_duration_shift_is_zero() {
        for t in ["00:00", "07:00", "12:30", "23:59"] {
            assert_eq!(calculate_entry_hours(t, t, 0), Some(Decimal::ZERO));
        }
    }

    #[test]
    fn break_at_least_shift_is_exactly_zero() {
        assert_eq!(calculate_entry_hours("09:00", "10:00", 60), Some(Decimal::ZERO));
        assert_eq!(calculate_entry_hours("09:00", "10:00", 600), Some(Decimal::ZERO));
    }

    #[test]
    fn matches_minute_formula_same_day_and_overnight() {
        let cases = [
            ("06:45", "15:10", 20u32),
            ("13:00", "21:30", 0),
            ("19:00", "03:15", 45),
            ("23:30", "00:10", 5),
        ];
        for (cin, cout, brk) in cases {
            let i = crate::utils::time::parse_time_to_minutes(cin).unwrap();
            let mut o = crate::utils::time::parse_time_to_minutes(cout).unwrap();
            if o < i {
                o += 1440;
            }
            let expected = Decimal::from((o - i - i64::from(brk)).max(0)) / dec!(60);
            assert_eq!(calculate_entry_hours(cin, cout, brk), Some(expected));
        }
    }

    #[test]
    fn malformed_time_yields_none() {
        assert_eq!(calculate_entry_hours("8am", "16:00", 0), None);
        assert_eq!(calculate_entry_hours("08:00", "", 0), None);
    }

    #[test]
    fn cost_is_hours_times_days_times_rate() {
        assert_eq!(calculate_entry_cost(dec!(7), 5, dec!(20)), Some(dec!(700)));
        assert_eq!(calculate_entry_cost(dec!(7.5), 1, dec!(15)), Some(dec!(112.5)));
        assert_eq!(calculate_entry_cost(dec!(8), 0, dec!(30)), Some(Decimal::ZERO));
    }

    #[test]
    fn cost_overflow_is_none() {
        assert_eq!(calculate_entry_cost(dec!(8), u32::MAX, Decimal::MAX), None);
    }
}
