use crate::models::report::{PayrollLine, PeriodReport};
use crate::utils::formatting::format_amount;
use serde::Serialize;

/// Flat payroll row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PayrollExport {
    pub period_from: String,
    pub period_to: String,
    pub worker_id: String,
    pub worker_name: String,
    pub days: u32,
    pub hours: String,
    pub gross_pay: String,
}

impl PayrollExport {
    fn from_line(report: &PeriodReport, line: &PayrollLine) -> Self {
        Self {
            period_from: report.from.format("%Y-%m-%d").to_string(),
            period_to: report.to.format("%Y-%m-%d").to_string(),
            worker_id: line.worker_id.clone(),
            worker_name: line.worker_name.clone(),
            days: line.days,
            hours: format_amount(line.hours),
            gross_pay: format_amount(line.gross),
        }
    }
}

pub fn report_to_rows(report: &PeriodReport) -> Vec<PayrollExport> {
    report
        .lines
        .iter()
        .map(|l| PayrollExport::from_line(report, l))
        .collect()
}
