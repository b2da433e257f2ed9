#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::models::{AttendanceHistory, AttendanceStatus, DailyRecord, Employee, EmployeeId};
use rust_decimal::Decimal;
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Roster rows: (card no, name, place of duty, salary).
pub const ROSTER: [(u32, &str, &str, f64); 3] = [
    (17, "Asha Rao", "Gate", 20000.0),
    (21, "Vikram Sen", "Stores", 15000.0),
    (30, "Meena Iyer", "Office", 25.0),
];

/// Write the sample roster as an xlsx file with the expected headers.
pub fn write_roster_xlsx(path: &str) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let headers = ["Card No", "Employee Name", "Place of Duty", " Salary Amount (Rs,)"];
    for (col, h) in headers.iter().enumerate() {
        sheet.write(0, col as u16, *h).expect("write header");
    }
    for (i, (id, name, duty, salary)) in ROSTER.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write(row, 0, *id).expect("write id");
        sheet.write(row, 1, *name).expect("write name");
        sheet.write(row, 2, *duty).expect("write duty");
        sheet.write(row, 3, *salary).expect("write salary");
    }

    workbook.save(path).expect("save roster workbook");
}

/// Init the DB (test mode) and import the sample roster.
pub fn init_db_with_roster(name: &str) -> String {
    let db_path = setup_test_db(name);
    let roster = temp_out(&format!("{name}_roster"), "xlsx");
    write_roster_xlsx(&roster);

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "--test", "import", &roster])
        .assert()
        .success();

    db_path
}

/// `init_db_with_roster` plus two saved days in February 2024.
pub fn init_db_with_data(name: &str) -> String {
    let db_path = init_db_with_roster(name);

    rat()
        .args(["--db", &db_path, "--test", "mark", "2024-02-05", "17=LWP", "21=Sick"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "--test", "mark", "2024-02-06", "17=LWP"])
        .assert()
        .success();

    db_path
}

pub fn employee(id: &str, name: &str, salary: i64) -> Employee {
    Employee::new(id, name, "Gate", Decimal::from(salary))
}

/// Build a record from `(id, status)` pairs.
pub fn record(entries: &[(&str, AttendanceStatus)]) -> DailyRecord {
    entries
        .iter()
        .map(|(id, s)| (EmployeeId::new(*id), *s))
        .collect()
}

pub fn history(days: &[(&str, DailyRecord)]) -> AttendanceHistory {
    days.iter()
        .map(|(d, r)| (d.to_string(), r.clone()))
        .collect()
}
