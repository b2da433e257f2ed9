use crate::cli::commands::open_roster;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::formatting::money;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_pool, roster) = open_roster(cfg)?;

    if roster.is_empty() {
        warning("No employees loaded. Import a roster first.");
        return Ok(());
    }

    let mut table = Table::new(vec!["ID", "Name", "Place of Duty", "Salary"]);
    for emp in &roster {
        table.add_row(vec![
            emp.id.to_string(),
            emp.name.clone(),
            emp.duty.clone(),
            money(&emp.salary, &cfg.currency_symbol),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} employees", roster.len());
    Ok(())
}
