//! SQLite connection wrapper (one connection per CLI invocation).

use crate::db::migrate::ensure_schema_current;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open without checking the schema. Only `init` and `db` use this.
    pub fn new(path: &str) -> AppResult<Self> {
        debug!(path, "opening database");
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Open and refuse to continue unless every migration has been applied.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        ensure_schema_current(&pool.conn)?;
        Ok(pool)
    }

    #[cfg(test)]
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        crate::db::migrate::run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
