// src/export/json_csv.rs

use crate::core::calculator::GRID_LEGEND;
use crate::core::summary::{AttendanceRow, MonthlySummary, PayrollRow};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Serialize rows to CSV (header included thanks to serde).
fn to_csv<T: Serialize>(items: &[T]) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in items {
        wtr.serialize(item)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

pub fn daily_csv(rows: &[AttendanceRow]) -> AppResult<Vec<u8>> {
    to_csv(rows)
}

pub fn daily_json(rows: &[AttendanceRow]) -> AppResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(rows)?)
}

pub fn payroll_csv(rows: &[PayrollRow]) -> AppResult<Vec<u8>> {
    to_csv(rows)
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    month: String,
    total_days: u32,
    payroll: &'a [PayrollRow],
    grid: Vec<Vec<String>>,
    legend: &'static str,
}

pub fn summary_json(summary: &MonthlySummary) -> AppResult<Vec<u8>> {
    let doc = SummaryDocument {
        month: summary.month.prefix(),
        total_days: summary.total_days(),
        payroll: &summary.payroll,
        grid: summary.grid.to_table(),
        legend: GRID_LEGEND,
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}
