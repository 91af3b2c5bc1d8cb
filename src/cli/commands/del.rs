use crate::auth::Authenticator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DelLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_timesheet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, auth: &dyn Authenticator) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let session = auth.authenticate()?;
        let pool = DbPool::open(&cfg.database)?;

        let record = load_timesheet(&pool.conn, *id)?.ok_or(AppError::UnknownTimesheet(*id))?;

        let prompt = format!(
            "Delete timesheet #{} ({} on {}, {}-{})? This action is irreversible.",
            record.id,
            record.worker_id,
            record.date_str(),
            record.clock_in,
            record.clock_out
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DelLogic::delete(&pool.conn, &session, *id)?;
        success(format!(
            "Timesheet #{} for {} on {} has been deleted.",
            removed.id,
            removed.worker_id,
            removed.date_str()
        ));
    }

    Ok(())
}
