use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attendance state of one employee on one date.
///
/// The serialized names are the literals stored by earlier versions of the
/// tool ("Present", "LWP", ...), so old history files load unchanged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AttendanceStatus {
    #[default]
    Present,
    /// Leave without pay.
    #[serde(rename = "LWP")]
    Lwp,
    Sick,
    Vacation,
    Holiday,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 5] = [
        AttendanceStatus::Present,
        AttendanceStatus::Lwp,
        AttendanceStatus::Sick,
        AttendanceStatus::Vacation,
        AttendanceStatus::Holiday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Lwp => "LWP",
            AttendanceStatus::Sick => "Sick",
            AttendanceStatus::Vacation => "Vacation",
            AttendanceStatus::Holiday => "Holiday",
        }
    }

    /// Single-letter code used by the monthly calendar grid.
    pub fn grid_code(&self) -> char {
        match self {
            AttendanceStatus::Present => 'A',
            AttendanceStatus::Lwp => 'N',
            AttendanceStatus::Sick => 'S',
            AttendanceStatus::Vacation => 'V',
            AttendanceStatus::Holiday => 'H',
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    /// Helper: accept user input in any case ("lwp", "present", "P", ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim();
        match c.to_ascii_uppercase().as_str() {
            "P" | "A" => Some(AttendanceStatus::Present),
            "N" => Some(AttendanceStatus::Lwp),
            "S" => Some(AttendanceStatus::Sick),
            "V" => Some(AttendanceStatus::Vacation),
            "H" => Some(AttendanceStatus::Holiday),
            _ => Self::ALL
                .into_iter()
                .find(|st| st.as_str().eq_ignore_ascii_case(c)),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

/// Status filter of the per-date viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AttendanceStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: AttendanceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}
