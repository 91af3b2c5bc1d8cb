use crate::auth::Authenticator;
use crate::cli::parser::{Commands, WorkerAction};
use crate::config::Config;
use crate::core::worker::{WorkerLogic, parse_rate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config, auth: &dyn Authenticator) -> AppResult<()> {
    let Commands::Worker { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open(&cfg.database)?;

    match action {
        WorkerAction::Add { id, name, rate } => {
            let rate = parse_rate(rate)?;
            let session = auth.authenticate()?;
            let worker = WorkerLogic::add(&pool.conn, &session, id, name, rate)?;
            success(format!(
                "Worker '{}' ({}) added at {}/h.",
                worker.id,
                worker.name,
                format_amount(worker.hourly_rate)
            ));
        }
        WorkerAction::List { all } => {
            if WorkerLogic::print_list(&pool.conn, *all)? == 0 {
                info("No workers registered. Add one with `crewledger worker add`.");
            }
        }
        WorkerAction::Rate { id, rate } => {
            let rate = parse_rate(rate)?;
            let session = auth.authenticate()?;
            WorkerLogic::set_rate(&pool.conn, &session, id, rate)?;
            success(format!("Rate for '{}' set to {}/h.", id, format_amount(rate)));
        }
        WorkerAction::Deactivate { id } => {
            let session = auth.authenticate()?;
            WorkerLogic::deactivate(&pool.conn, &session, id)?;
            success(format!("Worker '{}' deactivated.", id));
        }
    }

    Ok(())
}
