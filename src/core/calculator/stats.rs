use crate::models::{AttendanceStatus, DailyRecord, Employee, status_of};
use serde::Serialize;

/// Head count of one saved date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub total: usize,
    /// Recorded Present, or not recorded at all.
    pub present: usize,
    pub leave_without_pay: usize,
}

impl DatasetStats {
    /// Rounded percentage of present employees; 0 for an empty roster.
    pub fn attendance_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // round half up on integers
        ((self.present * 200 + self.total) / (self.total * 2)) as u32
    }
}

pub fn compute_dataset_stats(roster: &[Employee], record: &DailyRecord) -> DatasetStats {
    let mut present = 0;
    let mut leave_without_pay = 0;

    for emp in roster {
        match status_of(record, &emp.id) {
            AttendanceStatus::Present => present += 1,
            AttendanceStatus::Lwp => leave_without_pay += 1,
            _ => {}
        }
    }

    DatasetStats {
        total: roster.len(),
        present,
        leave_without_pay,
    }
}
