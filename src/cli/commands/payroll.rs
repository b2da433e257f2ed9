use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::MonthlySummary;
use crate::errors::{AppError, AppResult};
use crate::models::Month;
use crate::store::open_repository;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::money;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payroll { month } = cmd {
        let month = Month::parse(month)?;

        let (_pool, roster) = open_roster(cfg)?;
        if roster.is_empty() {
            warning(AppError::EmptyRoster);
            return Ok(());
        }

        let history = open_repository(cfg)?.load()?;

        let summary = match MonthlySummary::build(&roster, &history, &month, &cfg.pay_policy()) {
            Ok(s) => s,
            Err(AppError::NoDataForPeriod(_)) => {
                warning("No attendance data for this month.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        header(format!("Payroll {}", month.label()));
        println!(
            "Saved days: {} | Allowed LWP: {}\n",
            summary.total_days(),
            cfg.allowed_lwp.normalize()
        );

        let mut table = Table::new(vec![
            "Name",
            "Place of Duty",
            "Salary",
            "Total Days",
            "LWP",
            "Paid Days",
            "Net Pay",
        ]);
        for row in &summary.payroll {
            table.add_row(vec![
                row.name.clone(),
                row.duty.clone(),
                money(&row.salary, &cfg.currency_symbol),
                row.total_days.to_string(),
                row.lwp.to_string(),
                row.paid_days.to_string(),
                money(&row.net_pay, &cfg.currency_symbol),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
