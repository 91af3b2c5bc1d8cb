use crate::models::totals::TimesheetTotals;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Payroll figures for one worker over a period.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollLine {
    pub worker_id: String,
    pub worker_name: String,
    pub days: u32,
    pub hours: Decimal,
    pub gross: Decimal,
}

#[derive(Debug, Clone)]
pub struct PeriodReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub lines: Vec<PayrollLine>,
    pub totals: TimesheetTotals,
}
