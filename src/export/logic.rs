use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, report_to_rows};
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;
use tracing::debug;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the payroll report for `period` (default: current pay period).
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        period: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let (from, to) = ReportLogic::resolve_period(period, cfg, today())?;
        let report = ReportLogic::build(&pool.conn, from, to)?;
        let rows = report_to_rows(&report);

        if rows.is_empty() {
            warning(format!("No timesheet entries between {from} and {to}; writing an empty file."));
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &report.totals, &path)?,
        }

        debug!(format = format.as_str(), rows = rows.len(), path = %path.display(), "payroll export written");

        Ok(path)
    }
}
