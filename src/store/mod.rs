//! Attendance history persistence.
//!
//! The engine never touches storage: commands load a snapshot through an
//! `AttendanceRepository`, hand it to the calculators, and save mutations
//! back explicitly.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

use crate::config::{Config, StorageBackend};
use crate::db::{DbPool, SqliteRepository};
use crate::errors::AppResult;
use crate::models::{AttendanceHistory, DailyRecord};

pub trait AttendanceRepository {
    fn load(&mut self) -> AppResult<AttendanceHistory>;

    /// Replace the persisted history with `history`.
    fn save(&mut self, history: &AttendanceHistory) -> AppResult<()>;

    /// Save one day, overwriting any record already stored for `date`.
    fn save_day(&mut self, date: &str, record: &DailyRecord) -> AppResult<()> {
        let mut history = self.load()?;
        history.insert(date, record.clone());
        self.save(&history)
    }
}

/// Repository selected by `storage` in the configuration.
pub fn open_repository(cfg: &Config) -> AppResult<Box<dyn AttendanceRepository>> {
    Ok(match cfg.storage {
        StorageBackend::Sqlite => Box::new(SqliteRepository::new(DbPool::open(&cfg.database)?)),
        StorageBackend::Json => Box::new(JsonFileRepository::new(&cfg.history_file)),
    })
}
