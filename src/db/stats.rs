use crate::db::migrate::{current_version, latest_version};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    Ok(pool.conn.query_row(&sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let version = current_version(&pool.conn)?;
    let expected = latest_version();
    let version_color = if version == expected { GREEN } else { YELLOW };
    println!(
        "{}• Schema:{} {}v{}{} (this build: v{})",
        CYAN, RESET, version_color, version, RESET, expected
    );

    if version < expected {
        println!();
        return Ok(());
    }

    println!("{}• Workers:{} {}{}{}", CYAN, RESET, GREEN, count(pool, "workers")?, RESET);
    println!(
        "{}• Timesheet rows:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        count(pool, "timesheets")?,
        RESET
    );

    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM timesheets", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let dash = || format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    println!();
    Ok(())
}
