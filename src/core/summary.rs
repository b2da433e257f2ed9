//! Report rows built on top of the aggregation engine.
//!
//! These are the plain structures handed to the exporters and to the CLI
//! tables; no formatting decision lives here.

use crate::core::calculator::{
    DatasetStats, MonthlyLeaveCounts, PayPolicy, StatusGrid, compute_daily_status_grid,
    compute_dataset_stats, compute_monthly_leave_counts,
};
use crate::errors::AppResult;
use crate::models::{AttendanceHistory, AttendanceStatus, DailyRecord, Employee, Month, status_of};
use rust_decimal::Decimal;
use serde::Serialize;

/// One line of the daily / past attendance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttendanceRow {
    pub date: String,
    pub name: String,
    pub duty: String,
    pub attendance: AttendanceStatus,
}

/// One line of the monthly payroll sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayrollRow {
    pub name: String,
    pub duty: String,
    pub salary: Decimal,
    pub total_days: u32,
    #[serde(rename = "LWP")]
    pub lwp: u32,
    pub paid_days: u32,
    pub net_pay: Decimal,
}

/// Free-form line of the "Attendance Summary" sheet (4 text cells).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub date: String,
    pub name: String,
    pub duty: String,
    pub attendance: String,
}

impl SummaryLine {
    fn blank() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.name.as_str(),
            self.duty.as_str(),
            self.attendance.as_str(),
        ]
    }
}

/// A saved date with its head count (None when no roster is loaded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateOverview {
    pub date: String,
    pub stats: Option<DatasetStats>,
}

/// Everything the monthly export needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: Month,
    pub leave: MonthlyLeaveCounts,
    pub payroll: Vec<PayrollRow>,
    pub attendance: Vec<SummaryLine>,
    pub grid: StatusGrid,
}

impl MonthlySummary {
    /// Fails with `NoDataForPeriod` when the month has no saved date.
    pub fn build(
        roster: &[Employee],
        history: &AttendanceHistory,
        month: &Month,
        policy: &PayPolicy,
    ) -> AppResult<Self> {
        let leave = compute_monthly_leave_counts(roster, history, month)?;
        let payroll = payroll_rows(roster, &leave, policy);
        let attendance = attendance_summary(roster, history, month);
        let grid = compute_daily_status_grid(roster, history, month);

        Ok(Self {
            month: *month,
            leave,
            payroll,
            attendance,
            grid,
        })
    }

    pub fn total_days(&self) -> u32 {
        self.leave.total_days
    }
}

pub fn payroll_rows(
    roster: &[Employee],
    leave: &MonthlyLeaveCounts,
    policy: &PayPolicy,
) -> Vec<PayrollRow> {
    let total_days = leave.total_days;

    roster
        .iter()
        .map(|emp| {
            let lwp = leave.leave_of(&emp.id);
            PayrollRow {
                name: emp.name.clone(),
                duty: emp.duty.clone(),
                salary: emp.salary,
                total_days,
                lwp,
                paid_days: total_days.saturating_sub(lwp),
                net_pay: policy.net_pay(emp, Decimal::from(lwp), total_days),
            }
        })
        .collect()
}

/// Rows of the daily sheet; without a record everyone is Present.
pub fn attendance_rows(
    roster: &[Employee],
    date: &str,
    record: Option<&DailyRecord>,
) -> Vec<AttendanceRow> {
    let empty = DailyRecord::new();
    let record = record.unwrap_or(&empty);

    roster
        .iter()
        .map(|emp| AttendanceRow {
            date: date.to_string(),
            name: emp.name.clone(),
            duty: emp.duty.clone(),
            attendance: status_of(record, &emp.id),
        })
        .collect()
}

/// Header line, blank line, then for each saved date of the month a
/// `Date: ...` line, one line per employee and a blank separator.
pub fn attendance_summary(
    roster: &[Employee],
    history: &AttendanceHistory,
    month: &Month,
) -> Vec<SummaryLine> {
    let mut lines = vec![
        SummaryLine {
            date: "Date".into(),
            name: "Employee Name".into(),
            duty: "Place of Duty".into(),
            attendance: "Attendance Status".into(),
        },
        SummaryLine::blank(),
    ];

    for (date, record) in history.entries_in(month) {
        lines.push(SummaryLine {
            date: format!("Date: {date}"),
            ..SummaryLine::blank()
        });

        for emp in roster {
            lines.push(SummaryLine {
                date: String::new(),
                name: emp.name.clone(),
                duty: emp.duty.clone(),
                attendance: status_of(record, &emp.id).to_string(),
            });
        }

        lines.push(SummaryLine::blank());
    }

    lines
}

/// Saved dates, newest first.
pub fn history_overview(roster: &[Employee], history: &AttendanceHistory) -> Vec<DateOverview> {
    let mut out: Vec<DateOverview> = history
        .iter()
        .map(|(date, record)| DateOverview {
            date: date.clone(),
            stats: (!roster.is_empty()).then(|| compute_dataset_stats(roster, record)),
        })
        .collect();

    out.reverse();
    out
}
