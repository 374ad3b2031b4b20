use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::RecordStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Delete a time entry by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { entry_id } = cmd {
        let mut pool = open_pool(cfg)?;
        pool.delete_time_entry(*entry_id)?;
        ttlog(&pool.conn, "delete", &entry_id.to_string(), "entry deleted")?;

        success(format!("Entry {} deleted", entry_id));
    }
    Ok(())
}
