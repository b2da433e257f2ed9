/// ANSI color helper utilities for terminal output.
use crate::models::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Present → green, LWP → red, the planned absences get their own tint.
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::Lwp => RED,
        AttendanceStatus::Sick => YELLOW,
        AttendanceStatus::Vacation => CYAN,
        AttendanceStatus::Holiday => MAGENTA,
    }
}

pub fn colorize_status(status: AttendanceStatus) -> String {
    format!("{}{}{RESET}", color_for_status(status), status)
}

/// Attendance rate color:
/// \>= 90 → green
/// \>= 75 → yellow
/// below → red
pub fn color_for_rate(rate: u32) -> &'static str {
    if rate >= 90 {
        GREEN
    } else if rate >= 75 {
        YELLOW
    } else {
        RED
    }
}
