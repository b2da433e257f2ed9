//! Calendar-style monthly grid.
//!
//! One row per employee: four identity cells, a `(code, blank)` pair for
//! every day of the month, the present-day total and a blank signature cell.
//! Unrecorded weekdays count as present, unrecorded weekends are scheduled
//! off. This tally is independent from the LWP counts of `leave.rs`.

use crate::models::{AttendanceHistory, DailyRecord, Employee, EmployeeId, Month};
use crate::utils::date::{date_key, is_weekend};
use chrono::NaiveDate;

/// Legend printed under every grid.
pub const GRID_LEGEND: &str =
    "A=Active/Present, P=Present(alt), S=Sick/Scheduled-off, N=No-show, V=Vacation, H=Holiday";

/// Identity cells before the first day.
pub const IDENTITY_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub employee_id: EmployeeId,
    pub cells: Vec<String>,
    pub present_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusGrid {
    pub month: Month,
    pub days: u32,
    pub rows: Vec<GridRow>,
}

impl StatusGrid {
    /// Column titles matching the row layout.
    pub fn header(&self) -> Vec<String> {
        let mut h = vec![
            "No.".to_string(),
            "Name".to_string(),
            "Title".to_string(),
            "Department".to_string(),
        ];
        for day in 1..=self.days {
            h.push(day.to_string());
            h.push(String::new());
        }
        h.push("Total".to_string());
        h.push("Signature".to_string());
        h
    }

    pub fn row_len(&self) -> usize {
        IDENTITY_COLUMNS + 2 * self.days as usize + 2
    }

    pub fn to_table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.cells.clone()).collect()
    }
}

/// Code for one employee on one calendar day.
///
/// Returns the code and whether the day counts toward the present tally.
pub fn day_code(record: Option<&DailyRecord>, id: &EmployeeId, date: &NaiveDate) -> (char, bool) {
    if let Some(status) = record.and_then(|r| r.get(id)) {
        return (status.grid_code(), false);
    }

    if is_weekend(date) {
        ('S', false)
    } else {
        ('A', true)
    }
}

pub fn compute_daily_status_grid(
    roster: &[Employee],
    history: &AttendanceHistory,
    month: &Month,
) -> StatusGrid {
    let dates = month.dates();
    let records: Vec<Option<&DailyRecord>> =
        dates.iter().map(|d| history.get(&date_key(d))).collect();

    let rows = roster
        .iter()
        .enumerate()
        .map(|(index, emp)| {
            let mut cells = Vec::with_capacity(IDENTITY_COLUMNS + 2 * dates.len() + 2);
            cells.push((index + 1).to_string());
            cells.push(emp.name.clone());
            cells.push(String::new());
            cells.push(String::new());

            let mut present_days = 0;
            for (date, record) in dates.iter().zip(&records) {
                let (code, counts) = day_code(*record, &emp.id, date);
                if counts {
                    present_days += 1;
                }
                cells.push(code.to_string());
                cells.push(String::new());
            }

            cells.push(present_days.to_string());
            cells.push(String::new());

            GridRow {
                employee_id: emp.id.clone(),
                cells,
                present_days,
            }
        })
        .collect();

    StatusGrid {
        month: *month,
        days: dates.len() as u32,
        rows,
    }
}
