//! Marking attendance and merging history, on top of an injected
//! `AttendanceRepository`.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceHistory, AttendanceStatus, DailyRecord, Employee, EmployeeId};
use crate::store::AttendanceRepository;
use crate::utils::date::{date_key, parse_date};

/// Parse one `ID=STATUS` argument.
pub fn parse_entry(raw: &str) -> AppResult<(EmployeeId, AttendanceStatus)> {
    let (id, status) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidEntry(raw.to_string()))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::InvalidEntry(raw.to_string()));
    }

    Ok((EmployeeId::new(id), status.parse()?))
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Apply `entries` to the record of `date` and save the whole day.
    ///
    /// Starts from the saved record (or an empty one with `reset`). Ids must
    /// belong to the roster. Returns the record as saved.
    pub fn mark(
        repo: &mut dyn AttendanceRepository,
        roster: &[Employee],
        date: &str,
        entries: &[(EmployeeId, AttendanceStatus)],
        reset: bool,
    ) -> AppResult<DailyRecord> {
        if roster.is_empty() {
            return Err(AppError::EmptyRoster);
        }

        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let key = date_key(&date);

        for (id, _) in entries {
            if !roster.iter().any(|e| &e.id == id) {
                return Err(AppError::UnknownEmployee(id.to_string()));
            }
        }

        let history = repo.load()?;
        let mut record = if reset {
            DailyRecord::new()
        } else {
            history.get(&key).cloned().unwrap_or_default()
        };

        for (id, status) in entries {
            record.insert(id.clone(), *status);
        }

        repo.save_day(&key, &record)?;
        Ok(record)
    }

    /// Merge `incoming` into the saved history; incoming dates win.
    ///
    /// Date keys that are not `YYYY-MM-DD` are rejected before anything is
    /// written. Returns the number of imported dates.
    pub fn import_history(
        repo: &mut dyn AttendanceRepository,
        incoming: AttendanceHistory,
    ) -> AppResult<usize> {
        if let Some(bad) = incoming.dates().find(|d| parse_date(d).is_none()) {
            return Err(AppError::InvalidDate(bad.clone()));
        }

        let count = incoming.len();
        let mut history = repo.load()?;
        history.merge(incoming);
        repo.save(&history)?;
        Ok(count)
    }
}
