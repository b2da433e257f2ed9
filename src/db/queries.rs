use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeId};
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Replace the whole roster with `employees` (re-import semantics).
pub fn replace_roster(pool: &mut DbPool, employees: &[Employee]) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    tx.execute("DELETE FROM employees", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO employees (position, id, name, duty, salary)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for (position, emp) in employees.iter().enumerate() {
            stmt.execute(params![
                position as i64,
                emp.id.as_str(),
                emp.name,
                emp.duty,
                emp.salary.to_string(),
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Roster in import order.
pub fn load_roster(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, duty, salary FROM employees
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_employees(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?)
}

fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    let id: String = row.get("id")?;
    let salary_str: String = row.get("salary")?;

    let salary = Decimal::from_str(&salary_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSalary(salary_str.clone())),
        )
    })?;

    Ok(Employee {
        id: EmployeeId::new(id),
        name: row.get("name")?,
        duty: row.get("duty")?,
        salary,
    })
}
