pub mod backup;
pub mod bulk;
pub mod calc;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod worker;
