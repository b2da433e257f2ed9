use crate::cli::commands::open_roster;
use crate::cli::commands::show::print_record;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::{AttendanceLogic, parse_entry};
use crate::db::log::write_log;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceStatus, StatusFilter};
use crate::store::open_repository;
use crate::ui::messages::{success, warning};
use crate::utils::date::{date_key, parse_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        date,
        entries,
        reset,
    } = cmd
    {
        let key = parse_date(date)
            .map(|d| date_key(&d))
            .ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let parsed = entries
            .iter()
            .map(|e| parse_entry(e))
            .collect::<AppResult<Vec<_>>>()?;

        let (pool, roster) = open_roster(cfg)?;
        let mut repo = open_repository(cfg)?;

        let record = AttendanceLogic::mark(repo.as_mut(), &roster, &key, &parsed, *reset)?;

        let lwp = record
            .values()
            .filter(|s| **s == AttendanceStatus::Lwp)
            .count();
        success(format!("Attendance saved for {key}"));

        if let Err(e) = write_log(
            &pool.conn,
            "mark",
            &key,
            &format!("{} entries, {lwp} LWP", parsed.len()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        println!();
        print_record(&roster, &key, &record, StatusFilter::All);
    }
    Ok(())
}
