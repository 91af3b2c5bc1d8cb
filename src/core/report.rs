use crate::config::Config;
use crate::core::calculator::summarize_period;
use crate::db::queries::{load_timesheets, worker_names};
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::report::PeriodReport;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_total;
use crate::utils::formatting::format_amount;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct ReportLogic;

impl ReportLogic {
    /// Explicit `--period`, otherwise the configured pay period holding `today`.
    pub fn resolve_period(
        period: Option<&str>,
        cfg: &Config,
        today: NaiveDate,
    ) -> AppResult<(NaiveDate, NaiveDate)> {
        match period {
            Some(p) => parse_range(p),
            None => Ok(cfg.pay_period.containing(today, cfg.pay_period_start)),
        }
    }

    pub fn build(conn: &Connection, from: NaiveDate, to: NaiveDate) -> AppResult<PeriodReport> {
        let records = load_timesheets(conn, from, to, None)?;
        let names = worker_names(conn)?;
        Ok(summarize_period(from, to, &records, &names))
    }

    pub fn print(report: &PeriodReport, cfg: &Config) {
        let title = if cfg.company_name.is_empty() {
            format!("Payroll {} → {}", report.from, report.to)
        } else {
            format!("{} payroll {} → {}", cfg.company_name, report.from, report.to)
        };
        header(title);

        if report.lines.is_empty() {
            info("No timesheet entries in this period.");
            return;
        }

        let mut table = Table::new(vec![
            Column::left("Worker", 12),
            Column::left("Name", 22),
            Column::right("Days", 5),
            Column::right("Hours", 9),
            Column::right("Gross", 11),
        ]);

        for line in &report.lines {
            table.add_row(vec![
                line.worker_id.clone(),
                line.worker_name.clone(),
                line.days.to_string(),
                format_amount(line.hours),
                format_amount(line.gross),
            ]);
        }

        print!("{}", table.render());
        println!(
            "Total: {} h | {} | {} day(s) | {} worker(s)",
            colorize_total(&report.totals.hours),
            colorize_total(&report.totals.cost),
            report.totals.days,
            report.totals.workers
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pay_period::PayPeriod;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn explicit_period_wins() {
        let cfg = Config::default();
        let (from, to) = ReportLogic::resolve_period(Some("2025-02"), &cfg, d("2025-07-01")).unwrap();
        assert_eq!((from, to), (d("2025-02-01"), d("2025-02-28")));
    }

    #[test]
    fn defaults_to_current_pay_period() {
        let cfg = Config {
            pay_period: PayPeriod::Biweekly,
            pay_period_start: d("2025-01-06"),
            ..Config::default()
        };
        let (from, to) = ReportLogic::resolve_period(None, &cfg, d("2025-01-25")).unwrap();
        assert_eq!((from, to), (d("2025-01-20"), d("2025-02-02")));
    }
}
