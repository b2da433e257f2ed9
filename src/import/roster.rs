//! Roster import from a spreadsheet (first sheet) or a CSV file.
//!
//! Expected header columns (compared trimmed, case-insensitive):
//! `Card No`, `Employee Name`, `Place of Duty`, `Salary Amount (Rs,)`.
//! Missing cells become empty strings, an unreadable salary becomes 0 and a
//! row without card number gets its row index as id.

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeId};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use rust_decimal::Decimal;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

pub const COL_ID: &str = "Card No";
pub const COL_NAME: &str = "Employee Name";
pub const COL_DUTY: &str = "Place of Duty";
pub const COL_SALARY: &str = "Salary Amount (Rs,)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    /// xlsx / xlsm / xlsb / xls / ods
    Spreadsheet,
    Csv,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(RosterFormat::Spreadsheet),
            "csv" => Ok(RosterFormat::Csv),
            other => Err(AppError::Import(format!(
                "unsupported roster file type '{other}' (use xlsx, xls, ods or csv)"
            ))),
        }
    }
}

pub fn load_roster_file(path: &Path) -> AppResult<Vec<Employee>> {
    let format = RosterFormat::from_path(path)?;
    let bytes = fs::read(path)?;
    parse_roster(&bytes, format)
}

pub fn parse_roster(bytes: &[u8], format: RosterFormat) -> AppResult<Vec<Employee>> {
    match format {
        RosterFormat::Spreadsheet => parse_spreadsheet(bytes),
        RosterFormat::Csv => parse_csv(bytes),
    }
}

pub fn parse_spreadsheet(bytes: &[u8]) -> AppResult<Vec<Employee>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r?,
        None => return Ok(Vec::new()),
    };

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>());

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    Ok(rows_to_employees(&header, rows))
}

pub fn parse_csv(bytes: &[u8]) -> AppResult<Vec<Employee>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_string).collect::<Vec<String>>());
    }

    Ok(rows_to_employees(&header, rows.into_iter()))
}

fn column(header: &[String], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

fn rows_to_employees(header: &[String], rows: impl Iterator<Item = Vec<String>>) -> Vec<Employee> {
    let id_col = column(header, COL_ID);
    let name_col = column(header, COL_NAME);
    let duty_col = column(header, COL_DUTY);
    let salary_col = column(header, COL_SALARY);

    let cell = |row: &[String], col: Option<usize>| -> String {
        col.and_then(|c| row.get(c))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    rows.filter(|row| row.iter().any(|v| !v.trim().is_empty()))
        .enumerate()
        .map(|(index, row)| {
            let raw_id = cell(&row, id_col);
            let id = if raw_id.is_empty() || raw_id == "0" {
                EmployeeId::from_row_index(index)
            } else {
                EmployeeId::new(raw_id)
            };

            Employee::new(
                id,
                cell(&row, name_col),
                cell(&row, duty_col),
                parse_salary(&cell(&row, salary_col)),
            )
        })
        .collect()
}

/// Salary cell → amount; currency marks and thousands separators are
/// ignored, negative or unreadable amounts are 0.
pub fn parse_salary(raw: &str) -> Decimal {
    let Some(start) = raw.find(|c: char| c.is_ascii_digit()) else {
        return Decimal::ZERO;
    };
    let prefix = &raw[..start];
    if prefix.contains('-') {
        return Decimal::ZERO;
    }

    // "Rs. 15,000" → "15000", ".5" → "0.5"
    let mut cleaned = String::new();
    let leading_point = prefix
        .strip_suffix('.')
        .is_some_and(|p| !p.ends_with(char::is_alphabetic));
    if leading_point {
        cleaned.push_str("0.");
    }
    cleaned.extend(
        raw[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',' || *c == ' ')
            .filter(|c| c.is_ascii_digit() || *c == '.'),
    );

    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

fn cell_to_string(value: &Data) -> String {
    match value {
        Data::String(v) => v.to_string(),
        Data::Float(v) => {
            if v.fract() == 0.0 && v.abs() < 1e15 {
                format!("{}", *v as i64)
            } else {
                v.to_string()
            }
        }
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.as_f64().to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
