use crate::cli::commands::{open_machine, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Restart the stopwatch from a past entry's project/task selection.
/// Refused while a timer is running; the user stops it explicitly first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Continue { entry_id, client } = cmd {
        let mut pool = open_pool(cfg)?;
        let entry = pool
            .get_time_entry(*entry_id)?
            .ok_or_else(|| AppError::NotFound(format!("time entry {}", entry_id)))?;

        let mut machine = open_machine(cfg);
        let client_id = client
            .clone()
            .unwrap_or_else(|| machine.session().selected_client_id.clone());

        machine.resume_from_entry(&entry, &client_id)?;

        success(format!(
            "Timer restarted from entry {} (project '{}')",
            entry.id, entry.project_id
        ));
    }
    Ok(())
}
