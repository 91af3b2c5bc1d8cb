use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database. All schema comes from the migration list.
pub fn init_db(conn: &Connection) -> AppResult<u32> {
    run_pending_migrations(conn)
}
