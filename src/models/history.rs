//! Attendance history: date key (`YYYY-MM-DD`) → per-employee status.
//!
//! The JSON shape is the flat `attendanceRecords` object
//! (`{"2024-02-05": {"17": "LWP"}}`), so `serde_json` can read
//! and write it directly.

use crate::models::employee::EmployeeId;
use crate::models::month::Month;
use crate::models::status::AttendanceStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statuses recorded for one calendar date. Missing employees are Present.
pub type DailyRecord = BTreeMap<EmployeeId, AttendanceStatus>;

/// Status of `id` in `record`, with Present as the default for unrecorded ids.
pub fn status_of(record: &DailyRecord, id: &EmployeeId) -> AttendanceStatus {
    record.get(id).copied().unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceHistory {
    days: BTreeMap<String, DailyRecord>,
}

impl AttendanceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn get(&self, date: &str) -> Option<&DailyRecord> {
        self.days.get(date)
    }

    pub fn contains(&self, date: &str) -> bool {
        self.days.contains_key(date)
    }

    /// Save a whole day; an existing record for the same date is replaced.
    pub fn insert(&mut self, date: impl Into<String>, record: DailyRecord) {
        self.days.insert(date.into(), record);
    }

    /// Ascending by date.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DailyRecord)> {
        self.days.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = &String> {
        self.days.keys()
    }

    /// Entries whose date key starts with the month prefix.
    pub fn entries_in(&self, month: &Month) -> Vec<(&String, &DailyRecord)> {
        let prefix = month.prefix();
        self.days
            .iter()
            .filter(|(date, _)| date.starts_with(&prefix))
            .collect()
    }

    /// Merge `other` into `self`; dates present in both take `other`'s record.
    pub fn merge(&mut self, other: AttendanceHistory) {
        self.days.extend(other.days);
    }
}

impl FromIterator<(String, DailyRecord)> for AttendanceHistory {
    fn from_iter<I: IntoIterator<Item = (String, DailyRecord)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
