// src/export/logic.rs

use crate::config::Config;
use crate::core::summary::{MonthlySummary, attendance_rows};
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::load_roster;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_writable, resolve_output, write_output};
use crate::export::json_csv::{daily_csv, daily_json, payroll_csv, summary_json};
use crate::export::xlsx::{daily_workbook, summary_workbook};
use crate::export::{ExportFormat, ExportKind, notify_export_success};
use crate::models::{AttendanceHistory, Employee, Month};
use crate::store::open_repository;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_date;
use std::path::PathBuf;

/// A rendered export, ready to be written.
pub struct Rendered {
    pub default_name: String,
    pub label: String,
    pub bytes: Vec<u8>,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export attendance data.
    ///
    /// - `kind`: daily | past | summary
    /// - `period`: `YYYY-MM-DD` for daily/past, `YYYY-MM` for summary
    /// - `file`: output path; defaults to `Attendance_<date>`,
    ///   `Past_Attendance_<date>` or `Summary_<month>` in `export_dir`
    ///
    /// Returns the written path, or `None` when there was nothing to export
    /// (no roster, no saved record, no data for the month).
    pub fn export(
        cfg: &Config,
        kind: ExportKind,
        period: &str,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let pool = DbPool::open(&cfg.database)?;
        let roster = load_roster(&pool.conn)?;

        if roster.is_empty() {
            warning(AppError::EmptyRoster);
            return Ok(None);
        }

        let history = open_repository(cfg)?.load()?;

        let rendered = match Self::render(&roster, &history, cfg, kind, period, format) {
            Ok(r) => r,
            Err(e @ (AppError::NoDataForPeriod(_) | AppError::NoRecordForDate(_))) => {
                warning(e);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let path = resolve_output(file, &rendered.default_name, cfg.export_dir.as_deref());
        ensure_writable(&path, force)?;

        info(format!("Exporting to {}: {}", format.as_str().to_uppercase(), path.display()));
        write_output(&path, &rendered.bytes)?;
        notify_export_success(&rendered.label, &path);

        if let Err(e) = write_log(
            &pool.conn,
            "export",
            kind.as_str(),
            &format!("{} {} → {}", rendered.label, period, path.display()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(Some(path))
    }

    /// Build the file content without touching the filesystem.
    pub fn render(
        roster: &[Employee],
        history: &AttendanceHistory,
        cfg: &Config,
        kind: ExportKind,
        period: &str,
        format: ExportFormat,
    ) -> AppResult<Rendered> {
        let ext = format.as_str();

        match kind {
            ExportKind::Daily | ExportKind::Past => {
                let date = parse_date(period)
                    .ok_or_else(|| AppError::InvalidDate(period.to_string()))?;
                let key = date.format("%Y-%m-%d").to_string();
                let record = history.get(&key);

                let (sheet_name, default_name, label) = if kind == ExportKind::Daily {
                    (
                        "Daily Attendance".to_string(),
                        format!("Attendance_{key}.{ext}"),
                        "Daily attendance",
                    )
                } else {
                    if record.is_none() {
                        return Err(AppError::NoRecordForDate(key));
                    }
                    (
                        format!("Attendance_{key}"),
                        format!("Past_Attendance_{key}.{ext}"),
                        "Past attendance",
                    )
                };

                let rows = attendance_rows(roster, &key, record);
                let bytes = match format {
                    ExportFormat::Xlsx => daily_workbook(&rows, &sheet_name)?,
                    ExportFormat::Csv => daily_csv(&rows)?,
                    ExportFormat::Json => daily_json(&rows)?,
                };

                Ok(Rendered {
                    default_name,
                    label: label.to_string(),
                    bytes,
                })
            }
            ExportKind::Summary => {
                let month = Month::parse(period)?;
                let summary = MonthlySummary::build(roster, history, &month, &cfg.pay_policy())?;

                let bytes = match format {
                    ExportFormat::Xlsx => summary_workbook(&summary)?,
                    ExportFormat::Csv => payroll_csv(&summary.payroll)?,
                    ExportFormat::Json => summary_json(&summary)?,
                };

                Ok(Rendered {
                    default_name: format!("Summary_{}.{ext}", month.prefix()),
                    label: "Monthly summary".to_string(),
                    bytes,
                })
            }
        }
    }
}
