use crate::errors::AppResult;
use crate::models::AttendanceHistory;
use crate::store::AttendanceRepository;
use std::fs;
use std::path::{Path, PathBuf};

/// History kept in one flat `attendanceRecords` JSON document.
/// A missing file is an empty history.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Read a history document from disk.
pub fn read_history(path: &Path) -> AppResult<AttendanceHistory> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() || content.trim() == "null" {
        return Ok(AttendanceHistory::new());
    }
    Ok(serde_json::from_str(&content)?)
}

pub fn write_history(path: &Path, history: &AttendanceHistory) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(history)?;
    fs::write(path, json)?;
    Ok(())
}

impl AttendanceRepository for JsonFileRepository {
    fn load(&mut self) -> AppResult<AttendanceHistory> {
        if !self.path.exists() {
            return Ok(AttendanceHistory::new());
        }
        read_history(&self.path)
    }

    fn save(&mut self, history: &AttendanceHistory) -> AppResult<()> {
        write_history(&self.path, history)
    }
}
