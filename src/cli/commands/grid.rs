use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{GRID_LEGEND, compute_daily_status_grid};
use crate::errors::{AppError, AppResult};
use crate::models::Month;
use crate::store::open_repository;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { month } = cmd {
        let month = Month::parse(month)?;

        let (_pool, roster) = open_roster(cfg)?;
        if roster.is_empty() {
            warning(AppError::EmptyRoster);
            return Ok(());
        }

        let history = open_repository(cfg)?.load()?;
        let grid = compute_daily_status_grid(&roster, &history, &month);

        header(format!("Monthly Attendance: {}", month.label()));

        let mut table = Table::new(grid.header());
        for row in grid.to_table() {
            table.add_row(row);
        }
        print!("{}", table.render());
        println!("\nLegend: {GRID_LEGEND}");
    }
    Ok(())
}
