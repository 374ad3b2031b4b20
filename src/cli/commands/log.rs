use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::read_log;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print rows from the internal log table, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = open_pool(cfg)?;
        let rows = read_log(&pool.conn, 100)?;

        for (date, operation, target, message) in &rows {
            println!("{}  {:<10} {:<8} {}", date, operation, target, message);
        }
        info(format!("{} log row(s)", rows.len()));
    }
    Ok(())
}
