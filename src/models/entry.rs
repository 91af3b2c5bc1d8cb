use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One worker-day as supplied to the calculator. Built from user input (or a
/// stored row), consumed by the aggregator, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub worker_id: Option<String>,
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    #[serde(default)]
    pub break_duration: u32,
    #[serde(default)]
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TimesheetEntry {
    pub fn new(
        worker_id: &str,
        clock_in: &str,
        clock_out: &str,
        break_duration: u32,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            worker_id: Some(worker_id.to_string()),
            clock_in: Some(clock_in.to_string()),
            clock_out: Some(clock_out.to_string()),
            break_duration,
            hourly_rate,
            task: None,
            notes: None,
        }
    }

    /// The (worker, clock-in, clock-out) triple, or `None` when any of them
    /// is absent or blank.
    pub fn required_fields(&self) -> Option<(&str, &str, &str)> {
        let worker = present(&self.worker_id)?;
        let clock_in = present(&self.clock_in)?;
        let clock_out = present(&self.clock_out)?;
        Some((worker, clock_in, clock_out))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
