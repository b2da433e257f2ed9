use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceHistory, AttendanceStatus, Employee, EmployeeId, Month, status_of};
use std::collections::BTreeMap;

/// Leave-without-pay days per employee for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyLeaveCounts {
    pub month: Month,
    /// Only ids of the current roster appear here.
    pub counts: BTreeMap<EmployeeId, u32>,
    /// Number of saved dates in the month (not calendar days).
    pub total_days: u32,
}

impl MonthlyLeaveCounts {
    pub fn leave_of(&self, id: &EmployeeId) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }
}

/// Count the dates in `month` on which each employee was recorded as LWP.
///
/// Sick, Vacation and Holiday are not unpaid leave. A month without any
/// saved date yields `AppError::NoDataForPeriod`.
pub fn compute_monthly_leave_counts(
    roster: &[Employee],
    history: &AttendanceHistory,
    month: &Month,
) -> AppResult<MonthlyLeaveCounts> {
    let entries = history.entries_in(month);

    if entries.is_empty() {
        return Err(AppError::NoDataForPeriod(month.prefix()));
    }

    let mut counts: BTreeMap<EmployeeId, u32> =
        roster.iter().map(|e| (e.id.clone(), 0)).collect();

    for (_, record) in &entries {
        for emp in roster {
            if status_of(record, &emp.id) == AttendanceStatus::Lwp {
                *counts.entry(emp.id.clone()).or_insert(0) += 1;
            }
        }
    }

    Ok(MonthlyLeaveCounts {
        month: *month,
        counts,
        total_days: entries.len() as u32,
    })
}
