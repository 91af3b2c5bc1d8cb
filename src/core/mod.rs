pub mod backup;
pub mod bulk;
pub mod calculator;
pub mod config;
pub mod del;
pub mod log;
pub mod report;
pub mod worker;
