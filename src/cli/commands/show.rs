use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_dataset_stats;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, Employee, StatusFilter, status_of};
use crate::store::open_repository;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_rate, colorize_status};
use crate::utils::date::{date_key, parse_date};
use crate::utils::formatting::{percent, stats_line};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        date: date_str,
        filter,
    } = cmd
    {
        let d = parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let key = date_key(&d);

        let filter: StatusFilter = match filter {
            Some(f) => f.parse()?,
            None => StatusFilter::All,
        };

        let (_pool, roster) = open_roster(cfg)?;
        if roster.is_empty() {
            warning(AppError::EmptyRoster);
            return Ok(());
        }

        let history = open_repository(cfg)?.load()?;
        match history.get(&key) {
            Some(record) => print_record(&roster, &key, record, filter),
            None => warning(AppError::NoRecordForDate(key)),
        }
    }
    Ok(())
}

/// Stats line, attendance rate and the (filtered) employee table.
pub(crate) fn print_record(
    roster: &[Employee],
    date: &str,
    record: &DailyRecord,
    filter: StatusFilter,
) {
    let stats = compute_dataset_stats(roster, record);
    let rate = stats.attendance_rate();

    header(date);
    println!(
        "{}",
        stats_line(stats.total, stats.present, stats.leave_without_pay)
    );
    println!(
        "Attendance rate: {}{}{RESET}\n",
        color_for_rate(rate),
        percent(rate)
    );

    let mut table = Table::new(vec!["ID", "Name", "Place of Duty", "Status"]);
    for emp in roster {
        let status = status_of(record, &emp.id);
        if !filter.matches(status) {
            continue;
        }
        table.add_row(vec![
            emp.id.to_string(),
            emp.name.clone(),
            emp.duty.clone(),
            colorize_status(status),
        ]);
    }

    if table.rows.is_empty() {
        println!("No employees match the filter.");
    } else {
        print!("{}", table.render());
    }
}
