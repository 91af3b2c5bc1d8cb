use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let path = BackupLogic::backup(cfg, file, *compress, *force)?;
        success(format!("Backup created: {}", path.display()));

        // Recorded after the copy so the backup itself does not contain the row.
        let pool = DbPool::new(&cfg.database)?;
        if let Err(e) = ttlog(&pool.conn, "backup", &path.to_string_lossy(), "Database backup created") {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
