// src/export/model.rs

use crate::core::summary::{AttendanceRow, PayrollRow};

/// Header of the daily / past attendance sheet.
pub(crate) const DAILY_HEADERS: [&str; 4] = ["Date", "Name", "Duty", "Attendance"];

/// Column widths of the daily sheet.
pub(crate) const DAILY_WIDTHS: [f64; 4] = [12.0, 20.0, 15.0, 15.0];

/// Column widths of the "Attendance Summary" sheet.
pub(crate) const SUMMARY_WIDTHS: [f64; 4] = [15.0, 25.0, 20.0, 18.0];

pub(crate) const PAYROLL_HEADERS: [&str; 7] = [
    "Name",
    "Duty",
    "Salary",
    "TotalDays",
    "LWP",
    "PaidDays",
    "NetPay",
];

pub(crate) fn attendance_to_row(r: &AttendanceRow) -> Vec<String> {
    vec![
        r.date.clone(),
        r.name.clone(),
        r.duty.clone(),
        r.attendance.to_string(),
    ]
}

pub(crate) fn payroll_to_row(r: &PayrollRow) -> Vec<String> {
    vec![
        r.name.clone(),
        r.duty.clone(),
        r.salary.normalize().to_string(),
        r.total_days.to_string(),
        r.lwp.to_string(),
        r.paid_days.to_string(),
        r.net_pay.normalize().to_string(),
    ]
}
