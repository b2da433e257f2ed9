pub mod employee;
pub mod history;
pub mod month;
pub mod status;

pub use employee::{Employee, EmployeeId};
pub use history::{AttendanceHistory, DailyRecord, status_of};
pub use month::Month;
pub use status::{AttendanceStatus, StatusFilter};
