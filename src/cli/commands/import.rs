use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::replace_roster;
use crate::errors::AppResult;
use crate::import::load_roster_file;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = Path::new(file);
        let employees = load_roster_file(path)?;

        if employees.is_empty() {
            warning(format!("No employee rows found in {}.", path.display()));
            return Ok(());
        }

        let mut pool = DbPool::open(&cfg.database)?;
        replace_roster(&mut pool, &employees)?;

        success(format!(
            "Imported {} employees from {}",
            employees.len(),
            path.display()
        ));

        if let Err(e) = write_log(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("{} employees", employees.len()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
    Ok(())
}
