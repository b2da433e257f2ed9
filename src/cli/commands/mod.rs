pub mod config;
pub mod export;
pub mod grid;
pub mod history;
pub mod import;
pub mod init;
pub mod log;
pub mod mark;
pub mod payroll;
pub mod roster;
pub mod show;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_roster;
use crate::errors::AppResult;
use crate::models::Employee;

/// Open the configured database and read the roster.
pub(crate) fn open_roster(cfg: &Config) -> AppResult<(DbPool, Vec<Employee>)> {
    let pool = DbPool::open(&cfg.database)?;
    let roster = load_roster(&pool.conn)?;
    Ok((pool, roster))
}
