mod common;
use common::{employee, history, record, temp_out};
use rattendance::core::attendance::{AttendanceLogic, parse_entry};
use rattendance::db::queries::{count_employees, load_roster, replace_roster};
use rattendance::db::{DbPool, SqliteRepository};
use rattendance::errors::AppError;
use rattendance::models::{
    AttendanceHistory, AttendanceStatus, AttendanceStatus::*, DailyRecord, EmployeeId, status_of,
};
use rattendance::store::{AttendanceRepository, JsonFileRepository, MemoryRepository};
use rust_decimal::Decimal;
use std::fs;

fn sqlite_repo() -> SqliteRepository {
    SqliteRepository::new(DbPool::open_in_memory().expect("in-memory db"))
}

#[test]
fn test_status_of_defaults_to_present() {
    let r = record(&[("17", Lwp)]);
    assert_eq!(status_of(&r, &EmployeeId::new("17")), Lwp);
    assert_eq!(status_of(&r, &EmployeeId::new("21")), Present);
    assert_eq!(status_of(&DailyRecord::new(), &EmployeeId::new("17")), Present);
}

#[test]
fn test_status_parsing() {
    assert_eq!("lwp".parse::<AttendanceStatus>().expect("lwp"), Lwp);
    assert_eq!("Present".parse::<AttendanceStatus>().expect("present"), Present);
    assert_eq!("N".parse::<AttendanceStatus>().expect("code"), Lwp);
    assert_eq!("v".parse::<AttendanceStatus>().expect("code"), Vacation);
    assert!(matches!(
        "late".parse::<AttendanceStatus>(),
        Err(AppError::InvalidStatus(_))
    ));
}

#[test]
fn test_history_json_layout() {
    let h = history(&[("2024-02-05", record(&[("17", Lwp), ("21", Sick)]))]);
    let json = serde_json::to_string(&h).expect("serialize");
    assert_eq!(json, r#"{"2024-02-05":{"17":"LWP","21":"Sick"}}"#);

    let back: AttendanceHistory =
        serde_json::from_str(r#"{"2024-02-06":{"30":"Holiday"}}"#).expect("deserialize");
    assert_eq!(back.get("2024-02-06").map(|r| r.len()), Some(1));
}

#[test]
fn test_sqlite_repository_round_trip() {
    let mut repo = sqlite_repo();
    assert!(repo.load().expect("load").is_empty());

    let h = history(&[
        ("2024-02-05", record(&[("17", Lwp), ("21", Sick)])),
        ("2024-02-06", DailyRecord::new()),
    ]);
    repo.save(&h).expect("save");

    let loaded = repo.load().expect("load");
    assert_eq!(loaded, h);
    // a day without entries is still a saved day
    assert!(loaded.contains("2024-02-06"));
}

#[test]
fn test_sqlite_save_day_overwrites_whole_day() {
    let mut repo = sqlite_repo();

    repo.save_day("2024-02-05", &record(&[("17", Lwp), ("21", Sick)]))
        .expect("first save");
    repo.save_day("2024-02-05", &record(&[("21", Vacation)]))
        .expect("second save");

    let loaded = repo.load().expect("load");
    let day = loaded.get("2024-02-05").expect("saved day");
    assert_eq!(day.len(), 1);
    assert_eq!(status_of(day, &EmployeeId::new("17")), Present);
    assert_eq!(status_of(day, &EmployeeId::new("21")), Vacation);
}

#[test]
fn test_json_repository_round_trip() {
    let path = temp_out("json_repository_round_trip", "json");
    let mut repo = JsonFileRepository::new(&path);

    // missing file → empty history
    assert!(repo.load().expect("load").is_empty());

    repo.save_day("2024-02-05", &record(&[("17", Lwp)]))
        .expect("save day");
    repo.save_day("2024-02-06", &DailyRecord::new())
        .expect("save day");

    let loaded = JsonFileRepository::new(&path).load().expect("reload");
    assert_eq!(loaded.len(), 2);

    let content = fs::read_to_string(&path).expect("read json");
    assert!(content.contains("\"2024-02-05\""));
    assert!(content.contains("\"LWP\""));
}

#[test]
fn test_roster_table_keeps_import_order() {
    let mut pool = DbPool::open_in_memory().expect("db");
    let roster = vec![
        employee("30", "Meena", 25),
        employee("17", "Asha", 20000),
        employee("0", "Fallback", 100),
    ];

    replace_roster(&mut pool, &roster).expect("replace");
    assert_eq!(count_employees(&pool.conn).expect("count"), 3);
    assert_eq!(load_roster(&pool.conn).expect("load"), roster);

    replace_roster(&mut pool, &roster[..1]).expect("replace again");
    let loaded = load_roster(&pool.conn).expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].salary, Decimal::from(25));
}

#[test]
fn test_parse_entry() {
    let (id, status) = parse_entry("17=LWP").expect("entry");
    assert_eq!(id, EmployeeId::new("17"));
    assert_eq!(status, Lwp);

    assert!(matches!(parse_entry("17"), Err(AppError::InvalidEntry(_))));
    assert!(matches!(parse_entry("=LWP"), Err(AppError::InvalidEntry(_))));
    assert!(matches!(parse_entry("17=late"), Err(AppError::InvalidStatus(_))));
}

#[test]
fn test_mark_merges_with_saved_record() {
    let roster = vec![employee("17", "Asha", 20000), employee("21", "Vikram", 15000)];
    let mut repo = MemoryRepository::new(history(&[("2024-02-05", record(&[("17", Lwp)]))]));

    let saved = AttendanceLogic::mark(
        &mut repo,
        &roster,
        "2024-02-05",
        &[(EmployeeId::new("21"), Sick)],
        false,
    )
    .expect("mark");

    assert_eq!(saved, record(&[("17", Lwp), ("21", Sick)]));
    assert_eq!(repo.saves(), 1);
    assert_eq!(repo.load().expect("load").get("2024-02-05"), Some(&saved));
}

#[test]
fn test_mark_reset_starts_from_empty_record() {
    let roster = vec![employee("17", "Asha", 20000)];
    let mut repo = MemoryRepository::new(history(&[("2024-02-05", record(&[("17", Lwp)]))]));

    let saved = AttendanceLogic::mark(&mut repo, &roster, "2024-02-05", &[], true).expect("mark");

    assert!(saved.is_empty());
    assert!(repo.load().expect("load").contains("2024-02-05"));
}

#[test]
fn test_mark_rejects_bad_input_without_saving() {
    let roster = vec![employee("17", "Asha", 20000)];
    let mut repo = MemoryRepository::default();

    let err = AttendanceLogic::mark(&mut repo, &roster, "2024-2-5", &[], false).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));

    let err = AttendanceLogic::mark(&mut repo, &roster, "2024- 2- 5", &[], false).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));

    let err = AttendanceLogic::mark(
        &mut repo,
        &roster,
        "2024-02-05",
        &[(EmployeeId::new("99"), Lwp)],
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::UnknownEmployee(ref id) if id == "99"));

    let err = AttendanceLogic::mark(&mut repo, &[], "2024-02-05", &[], false).unwrap_err();
    assert!(matches!(err, AppError::EmptyRoster));

    assert_eq!(repo.saves(), 0);
}

#[test]
fn test_import_history_merges_and_overwrites() {
    let mut repo = MemoryRepository::new(history(&[
        ("2024-02-05", record(&[("17", Lwp)])),
        ("2024-02-06", record(&[("17", Lwp)])),
    ]));

    let incoming = history(&[
        ("2024-02-06", record(&[("17", Holiday)])),
        ("2024-02-07", DailyRecord::new()),
    ]);
    let count = AttendanceLogic::import_history(&mut repo, incoming).expect("import");
    assert_eq!(count, 2);

    let h = repo.load().expect("load");
    assert_eq!(h.len(), 3);
    assert_eq!(h.get("2024-02-05"), Some(&record(&[("17", Lwp)])));
    assert_eq!(h.get("2024-02-06"), Some(&record(&[("17", Holiday)])));
}

#[test]
fn test_import_history_rejects_bad_dates() {
    let mut repo = MemoryRepository::default();
    let incoming = history(&[("05/02/2024", DailyRecord::new())]);

    let err = AttendanceLogic::import_history(&mut repo, incoming).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
    assert_eq!(repo.saves(), 0);
}
