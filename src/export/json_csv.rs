use crate::errors::AppResult;
use crate::export::{PayrollExport, notify_export_success};
use crate::models::totals::TimesheetTotals;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct JsonDocument<'a> {
    lines: &'a [PayrollExport],
    totals: &'a TimesheetTotals,
}

/// Export pretty-printed JSON: the per-worker lines plus period totals.
pub(crate) fn export_json(rows: &[PayrollExport], totals: &TimesheetTotals, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = JsonDocument { lines: rows, totals };
    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one row per worker (header from serde field names).
pub(crate) fn export_csv(rows: &[PayrollExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
