use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and file (unless `--test`), the SQLite
/// database, and applies every pending migration.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing crewledger…");
    info(format!("Database : {}", cfg.database));

    let pool = DbPool::new(&cfg.database)?;
    let version = init_db(&pool.conn)?;

    success(format!(
        "Database initialized at {} (schema v{})",
        cfg.database, version
    ));

    // Logging is best effort here: the schema is already in place.
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
