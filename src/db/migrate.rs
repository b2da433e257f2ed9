use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Roster table. `position` keeps the spreadsheet order; ids are not
/// forced unique because fallback ids may collide with card numbers.
fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            position  INTEGER PRIMARY KEY,
            id        TEXT NOT NULL,
            name      TEXT NOT NULL DEFAULT '',
            duty      TEXT NOT NULL DEFAULT '',
            salary    TEXT NOT NULL DEFAULT '0'
        );

        CREATE INDEX IF NOT EXISTS idx_employees_id ON employees(id);
        "#,
    )?;
    Ok(())
}

fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            date         TEXT NOT NULL,
            employee_id  TEXT NOT NULL,
            status       TEXT NOT NULL
                CHECK(status IN ('Present','LWP','Sick','Vacation','Holiday')),
            PRIMARY KEY (date, employee_id)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Saved dates live in their own table, so a day where nobody was marked
/// (everyone Present) still counts as a recorded day. Databases created
/// before this table existed get it backfilled from `attendance`.
fn migrate_add_attendance_days(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_attendance_days";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_days (
            date TEXT PRIMARY KEY
        );

        INSERT OR IGNORE INTO attendance_days (date)
            SELECT DISTINCT date FROM attendance;
        "#,
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added attendance_days table')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'attendance_days' table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked every time a database is opened; all steps are idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_employees_table(conn)?;
    create_attendance_table(conn)?;
    migrate_add_attendance_days(conn)?;
    Ok(())
}
