use crate::auth::Session;
use crate::db::log::ttlog;
use crate::db::queries::{insert_worker, list_workers, set_worker_active, update_worker_rate};
use crate::errors::{AppError, AppResult};
use crate::models::worker::Worker;
use crate::utils::colors::colorize_status;
use crate::utils::formatting::format_amount;
use crate::utils::table::{Column, Table};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Highest accepted hourly rate.
pub const MAX_HOURLY_RATE: u32 = 100_000;

/// Parse an hourly rate given on the command line. Must be a decimal such as
/// `27.50`, between zero and [`MAX_HOURLY_RATE`].
pub fn parse_rate(input: &str) -> AppResult<Decimal> {
    let rate = Decimal::from_str(input.trim()).map_err(|_| AppError::InvalidRate(input.to_string()))?;
    if rate.is_sign_negative() || rate > Decimal::from(MAX_HOURLY_RATE) {
        return Err(AppError::InvalidRate(input.to_string()));
    }
    Ok(rate)
}

pub struct WorkerLogic;

impl WorkerLogic {
    pub fn add(conn: &Connection, session: &Session, id: &str, name: &str, rate: Decimal) -> AppResult<Worker> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::UnknownWorker("worker id cannot be empty".into()));
        }

        let worker = insert_worker(conn, id, name.trim(), rate)?;
        ttlog(
            conn,
            "worker_add",
            id,
            &format!("{} at {}/h by {}", worker.name, rate, session.user_id),
        )?;
        Ok(worker)
    }

    pub fn set_rate(conn: &Connection, session: &Session, id: &str, rate: Decimal) -> AppResult<()> {
        update_worker_rate(conn, id, rate)?;
        ttlog(conn, "worker_rate", id, &format!("rate set to {} by {}", rate, session.user_id))
    }

    pub fn deactivate(conn: &Connection, session: &Session, id: &str) -> AppResult<()> {
        set_worker_active(conn, id, false)?;
        ttlog(conn, "worker_off", id, &format!("deactivated by {}", session.user_id))
    }

    pub fn print_list(conn: &Connection, include_inactive: bool) -> AppResult<usize> {
        let workers = list_workers(conn, include_inactive)?;

        let mut table = Table::new(vec![
            Column::left("ID", 12),
            Column::left("Name", 24),
            Column::right("Rate/h", 9),
            Column::left("Status", 8),
        ]);
        for w in &workers {
            table.add_row(vec![
                w.id.clone(),
                w.name.clone(),
                format_amount(w.hourly_rate),
                colorize_status(w.active),
            ]);
        }

        print!("{}", table.render());
        Ok(workers.len())
    }
}
