use serde::Serialize;

/// Period totals. Hours and cost are already rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetTotals {
    pub hours: String,
    pub cost: String,
    pub days: u32,
    pub workers: usize,
}
