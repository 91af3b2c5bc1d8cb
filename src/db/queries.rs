use crate::errors::{AppError, AppResult};
use crate::models::record::{NewTimesheet, TimesheetRecord};
use crate::models::worker::Worker;
use chrono::{Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn decimal_column(row: &Row, name: &str) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(name)?;
    let idx = row.as_ref().column_index(name)?;
    Decimal::from_str(&raw).map_err(|_| conversion_error(idx, AppError::InvalidRate(raw.clone())))
}

// ---------------------------------------------------------------------------
// Workers
// ---------------------------------------------------------------------------

fn map_worker(row: &Row) -> rusqlite::Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        hourly_rate: decimal_column(row, "hourly_rate")?,
        active: row.get::<_, i64>("active")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_worker(conn: &Connection, id: &str, name: &str, rate: Decimal) -> AppResult<Worker> {
    if load_worker(conn, id)?.is_some() {
        return Err(AppError::DuplicateWorker(id.to_string()));
    }

    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO workers (id, name, hourly_rate, active, created_at)
         VALUES (?1, ?2, ?3, 1, ?4)",
        params![id, name, rate.to_string(), created_at],
    )?;

    Ok(Worker {
        id: id.to_string(),
        name: name.to_string(),
        hourly_rate: rate,
        active: true,
        created_at,
    })
}

pub fn load_worker(conn: &Connection, id: &str) -> AppResult<Option<Worker>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM workers WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_worker).optional()?)
}

pub fn list_workers(conn: &Connection, include_inactive: bool) -> AppResult<Vec<Worker>> {
    let sql = if include_inactive {
        "SELECT * FROM workers ORDER BY id ASC"
    } else {
        "SELECT * FROM workers WHERE active = 1 ORDER BY id ASC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_worker)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn worker_names(conn: &Connection) -> AppResult<HashMap<String, String>> {
    Ok(list_workers(conn, true)?
        .into_iter()
        .map(|w| (w.id, w.name))
        .collect())
}

pub fn update_worker_rate(conn: &Connection, id: &str, rate: Decimal) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE workers SET hourly_rate = ?1 WHERE id = ?2",
        params![rate.to_string(), id],
    )?;
    if n == 0 {
        return Err(AppError::UnknownWorker(id.to_string()));
    }
    Ok(())
}

pub fn set_worker_active(conn: &Connection, id: &str, active: bool) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE workers SET active = ?1 WHERE id = ?2",
        params![active as i64, id],
    )?;
    if n == 0 {
        return Err(AppError::UnknownWorker(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Timesheets
// ---------------------------------------------------------------------------

pub fn map_timesheet(row: &Row) -> rusqlite::Result<TimesheetRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    Ok(TimesheetRecord {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        date,
        clock_in: row.get("clock_in")?,
        clock_out: row.get("clock_out")?,
        break_minutes: row.get("break_minutes")?,
        hourly_rate: decimal_column(row, "hourly_rate")?,
        task: row.get("task")?,
        notes: row.get("notes")?,
        created_by: row.get("created_by")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert all rows. Run it inside a transaction (see `BulkLogic::apply`) so a
/// failing row leaves nothing behind.
pub fn insert_timesheets(
    conn: &Connection,
    rows: &[NewTimesheet],
    created_by: &str,
) -> AppResult<usize> {
    let created_at = Local::now().to_rfc3339();

    {
        let mut stmt = conn.prepare_cached(
            "INSERT INTO timesheets
                (worker_id, date, clock_in, clock_out, break_minutes, hourly_rate, task, notes, created_by, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;

        for r in rows {
            stmt.execute(params![
                r.worker_id,
                r.date.format("%Y-%m-%d").to_string(),
                r.clock_in,
                r.clock_out,
                r.break_minutes,
                r.hourly_rate.to_string(),
                r.task,
                r.notes,
                created_by,
                created_at,
            ])?;
        }
    }

    Ok(rows.len())
}

pub fn load_timesheets(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
    worker: Option<&str>,
) -> AppResult<Vec<TimesheetRecord>> {
    let from = from.format("%Y-%m-%d").to_string();
    let to = to.format("%Y-%m-%d").to_string();

    let mut stmt = conn.prepare_cached(
        "SELECT * FROM timesheets
         WHERE date BETWEEN ?1 AND ?2
           AND (?3 IS NULL OR worker_id = ?3)
         ORDER BY date ASC, worker_id ASC, clock_in ASC",
    )?;

    let rows = stmt.query_map(params![from, to, worker], map_timesheet)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn load_timesheet(conn: &Connection, id: i64) -> AppResult<Option<TimesheetRecord>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM timesheets WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_timesheet).optional()?)
}

pub fn delete_timesheet(conn: &Connection, id: i64) -> AppResult<TimesheetRecord> {
    let record = load_timesheet(conn, id)?.ok_or(AppError::UnknownTimesheet(id))?;
    conn.execute("DELETE FROM timesheets WHERE id = ?1", [id])?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn shift(worker: &str, date: &str) -> NewTimesheet {
        NewTimesheet {
            worker_id: worker.into(),
            date: d(date),
            clock_in: "07:00".into(),
            clock_out: "15:30".into(),
            break_minutes: 30,
            hourly_rate: dec!(27.50),
            task: Some("framing".into()),
            notes: None,
        }
    }

    #[test]
    fn worker_lifecycle() {
        let pool = DbPool::in_memory().unwrap();
        insert_worker(&pool.conn, "amy", "Amy Ng", dec!(30)).unwrap();
        assert!(matches!(
            insert_worker(&pool.conn, "amy", "Other", dec!(1)),
            Err(AppError::DuplicateWorker(_))
        ));

        update_worker_rate(&pool.conn, "amy", dec!(32.25)).unwrap();
        let amy = load_worker(&pool.conn, "amy").unwrap().unwrap();
        assert_eq!(amy.hourly_rate, dec!(32.25));
        assert!(amy.active);

        set_worker_active(&pool.conn, "amy", false).unwrap();
        assert!(list_workers(&pool.conn, false).unwrap().is_empty());
        assert_eq!(list_workers(&pool.conn, true).unwrap().len(), 1);

        assert!(matches!(
            update_worker_rate(&pool.conn, "nobody", dec!(1)),
            Err(AppError::UnknownWorker(_))
        ));
    }

    #[test]
    fn timesheets_round_trip_and_filter() {
        let pool = DbPool::in_memory().unwrap();
        insert_worker(&pool.conn, "amy", "Amy", dec!(30)).unwrap();
        insert_worker(&pool.conn, "bob", "Bob", dec!(25)).unwrap();

        let rows = vec![
            shift("amy", "2025-04-01"),
            shift("bob", "2025-04-01"),
            shift("amy", "2025-04-02"),
            shift("amy", "2025-05-01"),
        ];
        assert_eq!(insert_timesheets(&pool.conn, &rows, "foreman").unwrap(), 4);

        let april = load_timesheets(&pool.conn, d("2025-04-01"), d("2025-04-30"), None).unwrap();
        assert_eq!(april.len(), 3);
        assert_eq!(april[0].hourly_rate, dec!(27.50));
        assert_eq!(april[0].task.as_deref(), Some("framing"));
        assert_eq!(april[0].created_by, "foreman");

        let amy = load_timesheets(&pool.conn, d("2025-04-01"), d("2025-04-30"), Some("amy")).unwrap();
        assert_eq!(amy.len(), 2);

        let removed = delete_timesheet(&pool.conn, april[0].id).unwrap();
        assert_eq!(removed.worker_id, april[0].worker_id);
        assert!(matches!(
            delete_timesheet(&pool.conn, april[0].id),
            Err(AppError::UnknownTimesheet(_))
        ));
    }

    #[test]
    fn failed_batch_writes_nothing() {
        let mut pool = DbPool::in_memory().unwrap();
        insert_worker(&pool.conn, "amy", "Amy", dec!(30)).unwrap();

        // "ghost" violates the worker foreign key
        let rows = vec![shift("amy", "2025-04-01"), shift("ghost", "2025-04-01")];
        {
            let tx = pool.conn.transaction().unwrap();
            assert!(insert_timesheets(&tx, &rows, "foreman").is_err());
        }

        let all = load_timesheets(&pool.conn, d("2025-01-01"), d("2025-12-31"), None).unwrap();
        assert!(all.is_empty());
    }
}
