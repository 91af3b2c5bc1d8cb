use crate::auth::Authenticator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bulk::{BulkLogic, BulkOutcome, BulkRequest};
use crate::core::worker::parse_rate;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::colorize_total;
use crate::utils::date::require_date;
use crate::utils::formatting::format_amount;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config, auth: &dyn Authenticator) -> AppResult<()> {
    if let Commands::Bulk {
        workers,
        from,
        to,
        clock_in,
        clock_out,
        break_minutes,
        rate,
        task,
        notes,
        dry_run,
    } = cmd
    {
        let from = require_date(from)?;
        let to = match to {
            Some(t) => require_date(t)?,
            None => from,
        };

        let req = BulkRequest {
            workers: workers.clone(),
            from,
            to,
            clock_in: parse_optional_time(clock_in.as_ref())?,
            clock_out: parse_optional_time(clock_out.as_ref())?,
            break_minutes: *break_minutes,
            rate: rate.as_deref().map(parse_rate).transpose()?,
            task: task.clone(),
            notes: notes.clone(),
            dry_run: *dry_run,
        };

        // Dry runs are read-only and need no identity.
        let outcome = if req.dry_run {
            let pool = DbPool::open(&cfg.database)?;
            BulkLogic::preview(&pool.conn, cfg, &req)?
        } else {
            let session = auth.authenticate()?;
            let mut pool = DbPool::open(&cfg.database)?;
            BulkLogic::apply(&mut pool, cfg, &session, &req)?
        };

        print_outcome(&req, &outcome);
    }

    Ok(())
}

fn print_outcome(req: &BulkRequest, outcome: &BulkOutcome) {
    let times = &outcome.plan.times;
    header(format!(
        "{} → {} | {}-{} | break {} min",
        req.from, req.to, times.clock_in, times.clock_out, times.break_duration
    ));

    for e in &outcome.plan.entries {
        println!(
            "  {:<12} {:>9}/h",
            e.worker_id.as_deref().unwrap_or("-"),
            format_amount(e.hourly_rate)
        );
    }

    println!("Workers : {}", outcome.totals.workers);
    println!("Days    : {}", outcome.totals.days);
    println!("Hours   : {}", colorize_total(&outcome.totals.hours));
    println!("Cost    : {}", colorize_total(&outcome.totals.cost));

    if req.dry_run {
        info("Dry run: nothing was stored.");
    } else {
        success(format!("{} timesheet row(s) stored.", outcome.inserted));
    }
}
