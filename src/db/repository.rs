//! SQLite-backed attendance history.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceHistory, AttendanceStatus, DailyRecord, EmployeeId};
use crate::store::AttendanceRepository;
use rusqlite::{Row, Transaction, params};

pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_status_row(row: &Row) -> rusqlite::Result<(String, EmployeeId, AttendanceStatus)> {
    let date: String = row.get(0)?;
    let id: String = row.get(1)?;
    let status_str: String = row.get(2)?;

    let status = AttendanceStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok((date, EmployeeId::new(id), status))
}

fn write_day(tx: &Transaction, date: &str, record: &DailyRecord) -> AppResult<()> {
    tx.execute(
        "INSERT OR IGNORE INTO attendance_days (date) VALUES (?1)",
        [date],
    )?;
    tx.execute("DELETE FROM attendance WHERE date = ?1", [date])?;

    let mut stmt = tx.prepare_cached(
        "INSERT INTO attendance (date, employee_id, status)
         VALUES (?1, ?2, ?3)",
    )?;
    for (id, status) in record {
        stmt.execute(params![date, id.as_str(), status.to_db_str()])?;
    }

    Ok(())
}

impl AttendanceRepository for SqliteRepository {
    fn load(&mut self) -> AppResult<AttendanceHistory> {
        let conn = &self.pool.conn;

        let mut history = AttendanceHistory::new();

        // 1) giorni salvati (anche senza marcature)
        let mut stmt = conn.prepare("SELECT date FROM attendance_days ORDER BY date ASC")?;
        let dates = stmt.query_map([], |row| row.get::<_, String>(0))?;
        for d in dates {
            history.insert(d?, DailyRecord::new());
        }

        // 2) stati espliciti
        let mut stmt = conn.prepare(
            "SELECT date, employee_id, status FROM attendance
             ORDER BY date ASC, employee_id ASC",
        )?;
        let rows = stmt.query_map([], map_status_row)?;

        let mut by_date: Vec<(String, DailyRecord)> = Vec::new();
        for r in rows {
            let (date, id, status) = r?;
            match by_date.last_mut() {
                Some((d, record)) if *d == date => {
                    record.insert(id, status);
                }
                _ => {
                    let mut record = DailyRecord::new();
                    record.insert(id, status);
                    by_date.push((date, record));
                }
            }
        }

        for (date, record) in by_date {
            history.insert(date, record);
        }

        Ok(history)
    }

    fn save(&mut self, history: &AttendanceHistory) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;

        tx.execute("DELETE FROM attendance", [])?;
        tx.execute("DELETE FROM attendance_days", [])?;
        for (date, record) in history.iter() {
            write_day(&tx, date, record)?;
        }

        tx.commit()?;
        Ok(())
    }

    fn save_day(&mut self, date: &str, record: &DailyRecord) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        write_day(&tx, date, record)?;
        tx.commit()?;
        Ok(())
    }
}
