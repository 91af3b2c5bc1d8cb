use crate::auth::Session;
use crate::config::Config;
use crate::core::calculator::defaults::resolve_entry_times;
use crate::core::calculator::{TimesheetDefaults, calculate_bulk_timesheet_totals};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_timesheets, load_worker};
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimesheetEntry;
use crate::models::record::NewTimesheet;
use crate::models::totals::TimesheetTotals;
use crate::ui::messages::warning;
use crate::utils::date::{dates_between, days_inclusive};
use crate::utils::time::normalize_time;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// One bulk operation: the same shift for every worker on every day
/// between `from` and `to`.
#[derive(Debug, Clone)]
pub struct BulkRequest {
    pub workers: Vec<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    pub break_minutes: Option<u32>,
    pub rate: Option<Decimal>,
    pub task: Option<String>,
    pub notes: Option<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct BulkPlan {
    pub entries: Vec<TimesheetEntry>,
    pub days: u32,
    pub times: TimesheetDefaults,
}

#[derive(Debug, Clone)]
pub struct BulkOutcome {
    pub plan: BulkPlan,
    pub totals: TimesheetTotals,
    pub inserted: usize,
}

pub struct BulkLogic;

impl BulkLogic {
    /// Resolve times, rates and the day count without writing anything.
    pub fn plan(conn: &Connection, cfg: &Config, req: &BulkRequest) -> AppResult<BulkPlan> {
        let days = days_inclusive(req.from, req.to).ok_or_else(|| {
            AppError::InvalidPeriod(format!("{} is before {}", req.to, req.from))
        })?;

        let resolved = resolve_entry_times(
            req.clock_in.clone(),
            req.clock_out.clone(),
            req.break_minutes,
            Some(&cfg.work_day),
        );
        // Company settings are hand-edited YAML; validate them like CLI input.
        let times = TimesheetDefaults {
            clock_in: normalize_time(&resolved.clock_in)?,
            clock_out: normalize_time(&resolved.clock_out)?,
            break_duration: resolved.break_duration,
        };

        if let Some(rate) = req.rate
            && rate.is_sign_negative()
        {
            return Err(AppError::InvalidRate(rate.to_string()));
        }

        let mut seen: Vec<&str> = Vec::new();
        let mut entries = Vec::new();

        for id in &req.workers {
            if seen.contains(&id.as_str()) {
                warning(format!("Worker '{}' listed more than once; using it once.", id));
                continue;
            }
            seen.push(id);

            let worker = load_worker(conn, id)?.ok_or_else(|| AppError::UnknownWorker(id.clone()))?;
            if !worker.active {
                return Err(AppError::InactiveWorker(id.clone()));
            }

            let mut entry = TimesheetEntry::new(
                &worker.id,
                &times.clock_in,
                &times.clock_out,
                times.break_duration,
                req.rate.unwrap_or(worker.hourly_rate),
            );
            entry.task = req.task.clone();
            entry.notes = req.notes.clone();
            entries.push(entry);
        }

        debug!(workers = entries.len(), days, "bulk plan resolved");
        Ok(BulkPlan {
            entries,
            days,
            times,
        })
    }

    /// Plan plus totals; nothing is written.
    pub fn preview(conn: &Connection, cfg: &Config, req: &BulkRequest) -> AppResult<BulkOutcome> {
        let plan = Self::plan(conn, cfg, req)?;
        let totals = calculate_bulk_timesheet_totals(&plan.entries, plan.days);
        Ok(BulkOutcome {
            plan,
            totals,
            inserted: 0,
        })
    }

    /// Compute totals and, unless this is a dry run, store one row per
    /// worker per day.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        session: &Session,
        req: &BulkRequest,
    ) -> AppResult<BulkOutcome> {
        let mut outcome = Self::preview(&pool.conn, cfg, req)?;
        if req.dry_run {
            return Ok(outcome);
        }

        let rows = Self::expand_rows(&outcome.plan, req.from, req.to);

        // Rows and their audit line are committed together.
        let tx = pool.conn.transaction()?;
        let inserted = insert_timesheets(&tx, &rows, &session.user_id)?;

        let target = format!("{}..{}", req.from, req.to);
        let message = format!(
            "{} row(s) for {} worker(s) by {}: {} h, {}",
            inserted,
            outcome.plan.entries.len(),
            session.user_id,
            outcome.totals.hours,
            outcome.totals.cost
        );
        ttlog(&tx, "bulk", &target, &message)?;
        tx.commit()?;
        info!(inserted, user = %session.user_id, company = %session.company_id, "bulk entry stored");

        outcome.inserted = inserted;
        Ok(outcome)
    }

    fn expand_rows(plan: &BulkPlan, from: NaiveDate, to: NaiveDate) -> Vec<NewTimesheet> {
        let dates = dates_between(from, to);
        let mut rows = Vec::with_capacity(dates.len() * plan.entries.len());

        for date in dates {
            for e in &plan.entries {
                rows.push(NewTimesheet {
                    worker_id: e.worker_id.clone().unwrap_or_default(),
                    date,
                    clock_in: plan.times.clock_in.clone(),
                    clock_out: plan.times.clock_out.clone(),
                    break_minutes: plan.times.break_duration,
                    hourly_rate: e.hourly_rate,
                    task: e.task.clone(),
                    notes: e.notes.clone(),
                });
            }
        }

        rows
    }
}
