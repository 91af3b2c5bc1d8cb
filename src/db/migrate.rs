//! Versioned schema migrations.
//!
//! Every migration has a number and a name. Applying one records a
//! `migration_applied` row in the `log` table with the name as target, so the
//! schema version is the highest number recorded there. Commands that touch
//! data call [`ensure_schema_current`] and stop on an outdated database rather
//! than probing for columns at runtime.

use crate::core::backup::pre_migration_snapshot;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::Connection;
use tracing::{debug, info};

pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "0001_create_workers",
        sql: r#"
        CREATE TABLE IF NOT EXISTS workers (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            hourly_rate  TEXT NOT NULL,
            active       INTEGER NOT NULL DEFAULT 1,
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "0002_create_timesheets",
        sql: r#"
        CREATE TABLE IF NOT EXISTS timesheets (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id     TEXT NOT NULL REFERENCES workers(id),
            date          TEXT NOT NULL,
            clock_in      TEXT NOT NULL,
            clock_out     TEXT NOT NULL,
            break_minutes INTEGER NOT NULL DEFAULT 0 CHECK(break_minutes >= 0),
            hourly_rate   TEXT NOT NULL,
            task          TEXT,
            created_by    TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_timesheets_date ON timesheets(date);
        CREATE INDEX IF NOT EXISTS idx_timesheets_worker_date ON timesheets(worker_id, date);
        "#,
    },
    Migration {
        version: 3,
        name: "0003_add_timesheet_notes",
        sql: "ALTER TABLE timesheets ADD COLUMN notes TEXT;",
    },
];

pub fn latest_version() -> u32 {
    MIGRATIONS.iter().map(|m| m.version).max().unwrap_or(0)
}

/// Ensure that the `log` table exists; it also holds the migration markers.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn log_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='log'",
        [],
        |row| row.get(0),
    )?;
    Ok(n > 0)
}

/// Highest migration number recorded as applied; 0 for a fresh file.
pub fn current_version(conn: &Connection) -> AppResult<u32> {
    if !log_table_exists(conn)? {
        return Ok(0);
    }

    let mut stmt =
        conn.prepare("SELECT target FROM log WHERE operation = 'migration_applied'")?;
    let applied = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut version = 0;
    for name in applied {
        let name = name?;
        if let Some(m) = MIGRATIONS.iter().find(|m| m.name == name) {
            version = version.max(m.version);
        }
    }
    Ok(version)
}

/// Error out unless the schema matches what this build expects.
pub fn ensure_schema_current(conn: &Connection) -> AppResult<()> {
    let current = current_version(conn)?;
    let expected = latest_version();

    if current < expected {
        return Err(AppError::SchemaOutdated { current, expected });
    }
    if current > expected {
        return Err(AppError::Migration(format!(
            "database schema version {current} is newer than this build ({expected})"
        )));
    }
    Ok(())
}

/// Apply every migration newer than the recorded version, each in its own
/// transaction. Returns the resulting version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<u32> {
    ensure_log_table(conn)?;

    let current = current_version(conn)?;
    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();

    if pending.is_empty() {
        debug!(version = current, "schema up to date");
        return Ok(current);
    }

    if current > 0 {
        warning(format!(
            "Upgrading schema from version {} to {}",
            current,
            latest_version()
        ));

        match conn.path().filter(|p| !p.is_empty()) {
            Some(path) => {
                let snapshot = pre_migration_snapshot(path, current)?;
                success(format!("Safety backup created: {}", snapshot.display()));
            }
            None => warning("Could not determine database path, safety backup skipped."),
        }
    }

    for m in pending {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.name, e)))?;
        ttlog(&tx, "migration_applied", m.name, &format!("Applied schema version {}", m.version))?;
        tx.commit()?;

        info!(migration = m.name, "migration applied");
        if current > 0 {
            success(format!("Migration applied: {}", m.name));
        }
    }

    current_version(conn)
}
