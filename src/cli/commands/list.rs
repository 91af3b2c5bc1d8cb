use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{calculate_entry_cost, calculate_entry_hours};
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_timesheets;
use crate::errors::AppResult;
use crate::models::record::TimesheetRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_total};
use crate::utils::date::today;
use crate::utils::formatting::format_amount;
use crate::utils::table::{Column, Table};
use rust_decimal::Decimal;

const TASK_WIDTH: usize = 24;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, worker } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let (from, to) = ReportLogic::resolve_period(period.as_deref(), cfg, today())?;
        if period.is_none() {
            info(format!("Current {} pay period", cfg.pay_period.as_str()));
        }
        let records = load_timesheets(&pool.conn, from, to, worker.as_deref())?;

        header(format!("Timesheets {} → {}", from, to));

        if records.is_empty() {
            info("No timesheet entries in this period.");
            return Ok(());
        }

        print_records(&records);
    }

    Ok(())
}

fn print_records(records: &[TimesheetRecord]) {
    let mut table = Table::new(vec![
        Column::right("ID", 5),
        Column::left("Date", 10),
        Column::left("Worker", 12),
        Column::left("In", 5),
        Column::left("Out", 5),
        Column::right("Break", 5),
        Column::right("Hours", 7),
        Column::right("Cost", 10),
        Column::left("Task", TASK_WIDTH),
    ]);

    let mut total_hours = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;

    for r in records {
        let hours = calculate_entry_hours(&r.clock_in, &r.clock_out, r.break_minutes);
        let cost = hours.and_then(|h| calculate_entry_cost(h, 1, r.hourly_rate));
        if let (Some(h), Some(c)) = (hours, cost)
            && let (Some(th), Some(tc)) = (total_hours.checked_add(h), total_cost.checked_add(c))
        {
            total_hours = th;
            total_cost = tc;
        }

        let task = r.task.as_deref().unwrap_or("");
        let mut lines = textwrap::wrap(task, TASK_WIDTH).into_iter();
        let first = lines.next().map(|l| l.to_string()).unwrap_or_default();

        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            r.worker_id.clone(),
            r.clock_in.clone(),
            r.clock_out.clone(),
            r.break_minutes.to_string(),
            hours.map(format_amount).unwrap_or_else(|| "-".into()),
            cost.map(format_amount).unwrap_or_else(|| "-".into()),
            colorize_optional(&first),
        ]);

        for more in lines {
            let mut row = vec![String::new(); 8];
            row.push(more.to_string());
            table.add_row(row);
        }
    }

    print!("{}", table.render());
    println!(
        "Rows: {} | Hours: {} | Cost: {}",
        records.len(),
        colorize_total(&format_amount(total_hours)),
        colorize_total(&format_amount(total_cost))
    );
}
