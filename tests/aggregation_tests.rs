mod common;
use common::{employee, history, record};
use rattendance::core::calculator::{
    GRID_LEGEND, PayPolicy, compute_daily_status_grid, compute_dataset_stats,
    compute_monthly_leave_counts, compute_net_pay,
};
use rattendance::core::summary::MonthlySummary;
use rattendance::errors::AppError;
use rattendance::models::{AttendanceHistory, AttendanceStatus::*, DailyRecord, EmployeeId, Month};
use rust_decimal::Decimal;

fn feb_2024() -> Month {
    Month::parse("2024-02").expect("valid month")
}

#[test]
fn test_leave_counts_only_lwp() {
    let roster = vec![employee("17", "Asha", 20000), employee("21", "Vikram", 15000)];
    let h = history(&[
        ("2024-02-05", record(&[("17", Lwp), ("21", Sick)])),
        ("2024-02-06", record(&[("17", Lwp), ("21", Vacation)])),
        ("2024-02-07", record(&[("21", Holiday)])),
        ("2024-03-01", record(&[("17", Lwp), ("21", Lwp)])),
    ]);

    let counts = compute_monthly_leave_counts(&roster, &h, &feb_2024()).expect("data");

    assert_eq!(counts.total_days, 3);
    assert_eq!(counts.leave_of(&EmployeeId::new("17")), 2);
    assert_eq!(counts.leave_of(&EmployeeId::new("21")), 0);
}

#[test]
fn test_leave_counts_total_days_counts_saved_dates_only() {
    let roster = vec![employee("17", "Asha", 20000)];
    let h = history(&[
        ("2024-02-05", DailyRecord::new()),
        ("2024-02-20", DailyRecord::new()),
    ]);

    let counts = compute_monthly_leave_counts(&roster, &h, &feb_2024()).expect("data");
    assert_eq!(counts.total_days, 2);
    assert_eq!(counts.leave_of(&EmployeeId::new("17")), 0);
}

#[test]
fn test_leave_counts_no_data_for_month() {
    let roster = vec![employee("17", "Asha", 20000)];
    let h = history(&[("2024-03-01", record(&[("17", Lwp)]))]);

    let err = compute_monthly_leave_counts(&roster, &h, &feb_2024()).unwrap_err();
    assert!(matches!(err, AppError::NoDataForPeriod(ref m) if m == "2024-02"));

    let err = compute_monthly_leave_counts(&roster, &AttendanceHistory::new(), &feb_2024())
        .unwrap_err();
    assert!(matches!(err, AppError::NoDataForPeriod(_)));
}

#[test]
fn test_leave_counts_ignore_ids_outside_roster() {
    let roster = vec![employee("17", "Asha", 20000)];
    let h = history(&[("2024-02-05", record(&[("99", Lwp)]))]);

    let counts = compute_monthly_leave_counts(&roster, &h, &feb_2024()).expect("data");
    assert_eq!(counts.counts.len(), 1);
    assert!(!counts.counts.contains_key(&EmployeeId::new("99")));
}

#[test]
fn test_leave_counts_empty_roster() {
    let h = history(&[("2024-02-05", record(&[("17", Lwp)]))]);
    let counts = compute_monthly_leave_counts(&[], &h, &feb_2024()).expect("data");
    assert!(counts.counts.is_empty());
    assert_eq!(counts.total_days, 1);
}

#[test]
fn test_net_pay_without_leave_is_salary() {
    let emp = employee("17", "Asha", 20000);
    assert_eq!(compute_net_pay(&emp, Decimal::ZERO, 20), Decimal::from(20000));
}

#[test]
fn test_net_pay_within_allowance() {
    let emp = employee("17", "Asha", 20000);
    assert_eq!(compute_net_pay(&emp, Decimal::new(26, 1), 20), Decimal::from(20000));
    assert_eq!(compute_net_pay(&emp, Decimal::from(2), 20), Decimal::from(20000));
}

#[test]
fn test_net_pay_deducts_beyond_allowance() {
    // 20000 - 1000 * 2.4
    let emp = employee("17", "Asha", 20000);
    assert_eq!(compute_net_pay(&emp, Decimal::from(5), 20), Decimal::from(17600));

    // 15000 - 15000/7 * 1.4
    let emp = employee("21", "Vikram", 15000);
    assert_eq!(compute_net_pay(&emp, Decimal::from(4), 7), Decimal::from(12000));
}

#[test]
fn test_net_pay_rounds_half_away_from_zero() {
    // 25 - 2.5 * 5.4 = 11.5
    let emp = employee("30", "Meena", 25);
    assert_eq!(compute_net_pay(&emp, Decimal::from(8), 10), Decimal::from(12));
}

#[test]
fn test_net_pay_zero_total_days_keeps_salary() {
    let emp = employee("17", "Asha", 20000);
    assert_eq!(compute_net_pay(&emp, Decimal::from(10), 0), Decimal::from(20000));
}

#[test]
fn test_net_pay_never_negative_nor_above_salary() {
    let emp = employee("17", "Asha", 1000);
    let net = compute_net_pay(&emp, Decimal::from(10), 2);
    assert_eq!(net, Decimal::ZERO);

    for leave in 0..10 {
        let net = compute_net_pay(&emp, Decimal::from(leave), 5);
        assert!(net <= emp.salary);
    }
}

#[test]
fn test_custom_pay_policy() {
    let emp = employee("17", "Asha", 20000);
    let strict = PayPolicy::new(Decimal::ZERO);
    assert_eq!(strict.net_pay(&emp, Decimal::from(1), 20), Decimal::from(19000));
    assert_eq!(strict.unpaid_lwp(Decimal::from(3)), Decimal::from(3));
}

#[test]
fn test_grid_day_count_follows_month_length() {
    let roster = vec![employee("17", "Asha", 20000)];
    let h = AttendanceHistory::new();

    let leap = compute_daily_status_grid(&roster, &h, &feb_2024());
    assert_eq!(leap.days, 29);
    assert_eq!(leap.rows[0].cells.len(), 4 + 2 * 29 + 2);
    assert_eq!(leap.header().len(), leap.row_len());

    let non_leap = compute_daily_status_grid(&roster, &h, &Month::parse("2023-02").expect("month"));
    assert_eq!(non_leap.days, 28);
    assert_eq!(non_leap.rows[0].cells.len(), 4 + 2 * 28 + 2);

    let long = compute_daily_status_grid(&roster, &h, &Month::parse("2024-01").expect("month"));
    assert_eq!(long.days, 31);
}

/// Index of the code cell of `day` (1-based) in a grid row.
fn code_cell(day: usize) -> usize {
    4 + 2 * (day - 1)
}

#[test]
fn test_grid_codes_and_tally() {
    let roster = vec![employee("17", "Asha", 20000), employee("21", "Vikram", 15000)];
    let h = history(&[
        // Monday
        ("2024-02-05", record(&[("17", Lwp)])),
        // Saturday
        ("2024-02-10", record(&[("17", Present)])),
        // Wednesday
        ("2024-02-14", record(&[("17", Vacation), ("21", Holiday)])),
    ]);

    let grid = compute_daily_status_grid(&roster, &h, &feb_2024());
    let asha = &grid.rows[0].cells;
    let vikram = &grid.rows[1].cells;

    assert_eq!(asha[0], "1");
    assert_eq!(asha[1], "Asha");
    assert_eq!(asha[2], "");
    assert_eq!(asha[3], "");

    assert_eq!(asha[code_cell(5)], "N");
    assert_eq!(asha[code_cell(5) + 1], "");
    // explicit Present beats the weekend default
    assert_eq!(asha[code_cell(10)], "A");
    assert_eq!(asha[code_cell(14)], "V");
    assert_eq!(asha[code_cell(3)], "S");
    assert_eq!(asha[code_cell(1)], "A");

    assert_eq!(vikram[code_cell(5)], "A");
    assert_eq!(vikram[code_cell(10)], "S");
    assert_eq!(vikram[code_cell(14)], "H");

    // 21 weekdays; Asha has two recorded weekdays, Vikram one
    assert_eq!(grid.rows[0].present_days, 19);
    assert_eq!(grid.rows[1].present_days, 20);
    assert_eq!(asha[asha.len() - 2], "19");
    assert_eq!(asha[asha.len() - 1], "");
}

#[test]
fn test_grid_without_records_marks_weekends_off() {
    let roster = vec![employee("17", "Asha", 20000)];
    let grid = compute_daily_status_grid(&roster, &AttendanceHistory::new(), &feb_2024());

    let cells = &grid.rows[0].cells;
    for weekend in [3, 4, 10, 11, 17, 18, 24, 25] {
        assert_eq!(cells[code_cell(weekend)], "S", "day {weekend}");
    }
    assert_eq!(grid.rows[0].present_days, 21);
}

#[test]
fn test_grid_header_and_legend() {
    let grid = compute_daily_status_grid(&[], &AttendanceHistory::new(), &feb_2024());
    let header = grid.header();

    assert_eq!(&header[..5], &["No.", "Name", "Title", "Department", "1"]);
    assert_eq!(header[5], "");
    assert_eq!(header[header.len() - 2], "Total");
    assert_eq!(header[header.len() - 1], "Signature");
    assert!(grid.rows.is_empty());

    assert_eq!(
        GRID_LEGEND,
        "A=Active/Present, P=Present(alt), S=Sick/Scheduled-off, N=No-show, V=Vacation, H=Holiday"
    );
}

#[test]
fn test_dataset_stats_unrecorded_is_present() {
    let roster = vec![employee("17", "Asha", 20000), employee("21", "Vikram", 15000)];
    let stats = compute_dataset_stats(&roster, &DailyRecord::new());

    assert_eq!(stats.total, 2);
    assert_eq!(stats.present, 2);
    assert_eq!(stats.leave_without_pay, 0);
    assert_eq!(stats.attendance_rate(), 100);
}

#[test]
fn test_dataset_stats_mixed_statuses() {
    let roster = vec![
        employee("1", "A", 1),
        employee("2", "B", 1),
        employee("3", "C", 1),
    ];
    let stats = compute_dataset_stats(&roster, &record(&[("1", Lwp), ("3", Sick), ("9", Lwp)]));

    assert_eq!(stats.total, 3);
    assert_eq!(stats.present, 1);
    assert_eq!(stats.leave_without_pay, 1);
    assert_eq!(stats.attendance_rate(), 33);

    let stats = compute_dataset_stats(&roster, &record(&[("1", Lwp)]));
    assert_eq!(stats.attendance_rate(), 67);
}

#[test]
fn test_dataset_stats_empty_roster_rate_is_zero() {
    let stats = compute_dataset_stats(&[], &DailyRecord::new());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.attendance_rate(), 0);
}

#[test]
fn test_monthly_summary_is_deterministic() {
    let roster = vec![employee("17", "Asha", 20000), employee("21", "Vikram", 15000)];
    let h = history(&[
        ("2024-02-05", record(&[("17", Lwp)])),
        ("2024-02-06", record(&[("17", Lwp)])),
        ("2024-02-07", record(&[("17", Lwp), ("21", Sick)])),
        ("2024-02-08", DailyRecord::new()),
    ]);
    let policy = PayPolicy::default();

    let first = MonthlySummary::build(&roster, &h, &feb_2024(), &policy).expect("summary");
    let second = MonthlySummary::build(&roster, &h, &feb_2024(), &policy).expect("summary");
    assert_eq!(first, second);

    assert_eq!(first.total_days(), 4);
    let asha = &first.payroll[0];
    assert_eq!(asha.lwp, 3);
    assert_eq!(asha.paid_days, 1);
    // 20000 - 5000 * 0.4
    assert_eq!(asha.net_pay, Decimal::from(18000));
    assert_eq!(first.payroll[1].net_pay, Decimal::from(15000));

    // header, blank, then 4 dates × (title + 2 employees + blank)
    assert_eq!(first.attendance.len(), 2 + 4 * 4);
    assert_eq!(first.attendance[2].date, "Date: 2024-02-05");
    assert_eq!(first.attendance[3].attendance, "LWP");
    assert_eq!(first.attendance[4].attendance, "Present");
}

#[test]
fn test_monthly_summary_does_not_touch_history() {
    let roster = vec![employee("17", "Asha", 20000)];
    let h = history(&[("2024-02-05", record(&[("17", Lwp)]))]);
    let before = h.clone();

    MonthlySummary::build(&roster, &h, &feb_2024(), &PayPolicy::default()).expect("summary");
    assert_eq!(h, before);
}

#[test]
fn test_month_parsing() {
    let m = feb_2024();
    assert_eq!(m.to_string(), "2024-02");
    assert_eq!(m.label(), "February 2024");
    assert_eq!(m.dates().len(), 29);

    for bad in [
        "2024-2", "2024/02", "2024-13", "Feb 2024", "2024-02-01", "2024- 2", "+024-02", " 2024-2",
    ] {
        assert!(
            matches!(Month::parse(bad), Err(AppError::InvalidMonth(_))),
            "{bad}"
        );
    }
}

#[test]
fn test_date_parsing_is_strict() {
    use rattendance::utils::date::parse_date;

    assert!(parse_date("2024-02-05").is_some());
    assert!(parse_date("2024-02-29").is_some());

    for bad in [
        "2024- 2- 5",
        "2024-2-5",
        "+024-02-05",
        "2024/02/05",
        "2023-02-29",
        " 2024-02-5",
        "2024-02-05 ",
    ] {
        assert!(parse_date(bad).is_none(), "{bad}");
    }
}
