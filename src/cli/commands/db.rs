use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{ensure_schema_current, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info,
        vacuum,
    } = cmd
    {
        // No schema gate here: `--migrate` has to open outdated files.
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let version = run_pending_migrations(&pool.conn)?;
            println!("{}✔ Schema at version {}.{}\n", GREEN, version, RESET);
        }

        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity != "ok" {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
                return Err(AppError::Migration(format!("integrity check failed: {integrity}")));
            }
            println!("{}✔ Integrity check passed.{}", GREEN, RESET);

            ensure_schema_current(&pool.conn)?;
            println!("{}✔ Schema is current.{}\n", GREEN, RESET);
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
