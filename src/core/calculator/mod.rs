//! Aggregation engine.
//!
//! Every function here is pure: it borrows the roster and the history
//! snapshot supplied by the caller and never writes anything back.

pub mod grid;
pub mod leave;
pub mod payroll;
pub mod stats;

pub use grid::{GRID_LEGEND, GridRow, StatusGrid, compute_daily_status_grid};
pub use leave::{MonthlyLeaveCounts, compute_monthly_leave_counts};
pub use payroll::{PayPolicy, compute_net_pay};
pub use stats::{DatasetStats, compute_dataset_stats};
