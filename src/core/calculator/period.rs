use crate::core::calculator::entry::calculate_entry_hours;
use crate::models::record::TimesheetRecord;
use crate::models::report::{PayrollLine, PeriodReport};
use crate::models::totals::TimesheetTotals;
use crate::utils::formatting::format_amount;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

/// Aggregate stored worker-day rows into per-worker payroll lines and period
/// totals. Unlike the bulk calculator, each row is exactly one day, `days`
/// counts distinct dates and `workers` counts distinct worker ids.
pub fn summarize_period(
    from: NaiveDate,
    to: NaiveDate,
    records: &[TimesheetRecord],
    worker_names: &HashMap<String, String>,
) -> PeriodReport {
    #[derive(Default)]
    struct Acc {
        dates: BTreeSet<NaiveDate>,
        hours: Decimal,
        gross: Decimal,
    }

    let mut per_worker: BTreeMap<&str, Acc> = BTreeMap::new();
    let mut all_dates = BTreeSet::new();
    let mut total_hours = Decimal::ZERO;
    let mut total_gross = Decimal::ZERO;

    for r in records.iter().filter(|r| r.date >= from && r.date <= to) {
        let Some(hours) = calculate_entry_hours(&r.clock_in, &r.clock_out, r.break_minutes) else {
            warn!(id = r.id, worker = %r.worker_id, "stored row has unparsable times, ignored");
            continue;
        };

        let (acc_hours, acc_gross) = per_worker
            .get(r.worker_id.as_str())
            .map(|a| (a.hours, a.gross))
            .unwrap_or_default();

        let sums = hours.checked_mul(r.hourly_rate).and_then(|gross| {
            Some((
                total_hours.checked_add(hours)?,
                total_gross.checked_add(gross)?,
                acc_hours.checked_add(hours)?,
                acc_gross.checked_add(gross)?,
            ))
        });
        let Some((period_hours, period_gross, worker_hours, worker_gross)) = sums else {
            warn!(id = r.id, worker = %r.worker_id, rate = %r.hourly_rate, "stored row overflows payroll sums, ignored");
            continue;
        };

        let acc = per_worker.entry(r.worker_id.as_str()).or_default();
        acc.dates.insert(r.date);
        acc.hours = worker_hours;
        acc.gross = worker_gross;
        total_hours = period_hours;
        total_gross = period_gross;
        all_dates.insert(r.date);
    }

    let lines: Vec<PayrollLine> = per_worker
        .into_iter()
        .map(|(id, acc)| PayrollLine {
            worker_id: id.to_string(),
            worker_name: worker_names.get(id).cloned().unwrap_or_default(),
            days: acc.dates.len() as u32,
            hours: acc.hours,
            gross: acc.gross,
        })
        .collect();

    let totals = TimesheetTotals {
        hours: format_amount(total_hours),
        cost: format_amount(total_gross),
        days: all_dates.len() as u32,
        workers: lines.len(),
    };

    PeriodReport {
        from,
        to,
        lines,
        totals,
    }
}
