use crate::errors::AppResult;
use crate::models::AttendanceHistory;
use crate::store::AttendanceRepository;

/// In-memory repository, used as a test double.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    history: AttendanceHistory,
    saves: usize,
}

impl MemoryRepository {
    pub fn new(history: AttendanceHistory) -> Self {
        Self { history, saves: 0 }
    }

    /// Number of `save` calls so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl AttendanceRepository for MemoryRepository {
    fn load(&mut self) -> AppResult<AttendanceHistory> {
        Ok(self.history.clone())
    }

    fn save(&mut self, history: &AttendanceHistory) -> AppResult<()> {
        self.history = history.clone();
        self.saves += 1;
        Ok(())
    }
}
