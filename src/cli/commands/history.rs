use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::core::summary::history_overview;
use crate::db::log::write_log;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::store::json_file::{read_history, write_history};
use crate::store::open_repository;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_rate};
use crate::utils::formatting::{percent, stats_line};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        import,
        export,
        force,
    } = cmd
    {
        let (pool, roster) = open_roster(cfg)?;
        let mut repo = open_repository(cfg)?;

        //
        // JSON import
        //
        if let Some(file) = import {
            let incoming = read_history(Path::new(file))?;
            let count = AttendanceLogic::import_history(repo.as_mut(), incoming)?;
            success(format!("Imported {count} attendance dates from {file}"));

            if let Err(e) = write_log(
                &pool.conn,
                "history_import",
                file,
                &format!("{count} dates"),
            ) {
                warning(format!("Failed to write internal log: {e}"));
            }
            return Ok(());
        }

        let history = repo.load()?;

        //
        // JSON export
        //
        if let Some(file) = export {
            let path = Path::new(file);
            ensure_writable(path, *force)?;
            write_history(path, &history)?;
            success(format!(
                "Exported {} attendance dates to {}",
                history.len(),
                path.display()
            ));
            return Ok(());
        }

        //
        // Listing
        //
        if history.is_empty() {
            info("No records yet.");
            return Ok(());
        }

        println!("📅 Saved attendance ({} dates):\n", history.len());
        for entry in history_overview(&roster, &history) {
            match entry.stats {
                Some(stats) => {
                    let rate = stats.attendance_rate();
                    println!(
                        "{}  {}  {}{}{RESET}",
                        entry.date,
                        stats_line(stats.total, stats.present, stats.leave_without_pay),
                        color_for_rate(rate),
                        percent(rate)
                    );
                }
                None => println!("{}", entry.date),
            }
        }
    }
    Ok(())
}
