use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let (from, to) = ReportLogic::resolve_period(period.as_deref(), cfg, today())?;
        if period.is_none() {
            info(format!("Current {} pay period", cfg.pay_period.as_str()));
        }
        let report = ReportLogic::build(&pool.conn, from, to)?;
        ReportLogic::print(&report, cfg);
    }
    Ok(())
}
