pub mod entry;
pub mod pay_period;
pub mod record;
pub mod report;
pub mod totals;
pub mod worker;
