use crate::cli::commands::open_machine;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::TimerPhase;
use crate::ui::messages::success;
use crate::utils::format_hms;

/// Drop the current session without committing it.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut machine = open_machine(cfg);
    if machine.phase() == TimerPhase::Idle {
        return Err(AppError::Validation("no session to discard".to_string()));
    }

    let dropped = machine.session().elapsed_seconds;
    machine.clear()?;

    success(format!("Session discarded ({} uncommitted)", format_hms(dropped)));
    Ok(())
}
