use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A persisted worker-day (`timesheets` table).
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetRecord {
    pub id: i64,
    pub worker_id: String,
    pub date: NaiveDate,
    pub clock_in: String,
    pub clock_out: String,
    pub break_minutes: u32,
    pub hourly_rate: Decimal, // rate snapshot at entry time
    pub task: Option<String>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

impl TimesheetRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Row data for an insert; id and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTimesheet {
    pub worker_id: String,
    pub date: NaiveDate,
    pub clock_in: String,
    pub clock_out: String,
    pub break_minutes: u32,
    pub hourly_rate: Decimal,
    pub task: Option<String>,
    pub notes: Option<String>,
}
