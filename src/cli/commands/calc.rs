use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::defaults::resolve_entry_times;
use crate::core::calculator::{calculate_bulk_timesheet_totals, calculate_entry_hours};
use crate::core::worker::parse_rate;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimesheetEntry;
use crate::ui::messages::header;
use crate::utils::colors::colorize_total;
use crate::utils::formatting::{format_amount, mins2readable};
use crate::utils::time::{normalize_time, worked_minutes};

/// Handle `calc`: a one-off shift computation, nothing is stored.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        clock_in,
        clock_out,
        break_minutes,
        rate,
        days,
    } = cmd
    {
        let rate = parse_rate(rate)?;
        let times = resolve_entry_times(
            clock_in.clone(),
            clock_out.clone(),
            *break_minutes,
            Some(&cfg.work_day),
        );
        let clock_in = normalize_time(&times.clock_in)?;
        let clock_out = normalize_time(&times.clock_out)?;

        let per_day = calculate_entry_hours(&clock_in, &clock_out, times.break_duration)
            .ok_or_else(|| AppError::InvalidTime(format!("{clock_in}-{clock_out}")))?;

        let entry = TimesheetEntry::new("calc", &clock_in, &clock_out, times.break_duration, rate);
        let totals = calculate_bulk_timesheet_totals(&[entry], *days);

        header(format!(
            "Shift {}-{} with {} min break at {}/h",
            clock_in,
            clock_out,
            times.break_duration,
            format_amount(rate)
        ));
        let minutes = worked_minutes(&clock_in, &clock_out, times.break_duration).unwrap_or(0);
        println!(
            "Hours per day : {} ({})",
            format_amount(per_day),
            mins2readable(minutes, false, false)
        );
        println!("Days          : {}", totals.days);
        println!("Total hours   : {}", colorize_total(&totals.hours));
        println!("Total cost    : {}", colorize_total(&totals.cost));
    }

    Ok(())
}
