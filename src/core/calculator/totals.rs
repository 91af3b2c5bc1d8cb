use crate::core::calculator::entry::{calculate_entry_cost, calculate_entry_hours};
use crate::models::entry::TimesheetEntry;
use crate::models::totals::TimesheetTotals;
use crate::utils::formatting::format_amount;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Totals for a bulk entry: every entry is assumed to repeat identically on
/// each of the `number_of_days` days.
///
/// Entries without a worker id, clock-in or clock-out contribute nothing.
/// Entries whose times do not parse, or whose amounts overflow, are skipped
/// on their own and do not affect the rest of the batch. A negative rate
/// keeps the entry's hours but adds no cost.
///
/// `workers` is the number of entries passed in, not the number of distinct
/// worker ids.
pub fn calculate_bulk_timesheet_totals(
    entries: &[TimesheetEntry],
    number_of_days: u32,
) -> TimesheetTotals {
    let mut total_hours = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;

    for (idx, entry) in entries.iter().enumerate() {
        let Some((worker, clock_in, clock_out)) = entry.required_fields() else {
            debug!(entry = idx, "skipping entry with missing worker or clock times");
            continue;
        };

        let Some(hours) = calculate_entry_hours(clock_in, clock_out, entry.break_duration) else {
            warn!(worker, clock_in, clock_out, "skipping entry with unparsable time");
            continue;
        };

        let cost = if entry.hourly_rate.is_sign_negative() {
            warn!(worker, rate = %entry.hourly_rate, "negative rate, entry adds no cost");
            Some(Decimal::ZERO)
        } else {
            calculate_entry_cost(hours, number_of_days, entry.hourly_rate)
        };

        let sums = cost.and_then(|cost| {
            let hours = total_hours.checked_add(hours.checked_mul(Decimal::from(number_of_days))?)?;
            Some((hours, total_cost.checked_add(cost)?))
        });
        let Some((hours, cost)) = sums else {
            warn!(worker, rate = %entry.hourly_rate, days = number_of_days, "skipping entry whose amounts overflow");
            continue;
        };

        total_hours = hours;
        total_cost = cost;
    }

    TimesheetTotals {
        hours: format_amount(total_hours),
        cost: format_amount(total_cost),
        days: number_of_days,
        workers: entries.len(),
    }
}
