//! Timesheet hours and pay calculator. Every function here is pure.

pub mod defaults;
pub mod entry;
pub mod period;
pub mod totals;

pub use defaults::{TimesheetDefaults, WorkDaySettings, get_default_timesheet_values};
pub use entry::{calculate_entry_cost, calculate_entry_hours};
pub use period::summarize_period;
pub use totals::calculate_bulk_timesheet_totals;
