use crate::cli::commands::open_machine;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::format_hms;

/// Pause the running stopwatch; elapsed time is frozen, not lost.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut machine = open_machine(cfg);
    machine.pause()?;

    success(format!(
        "Timer paused at {}",
        format_hms(machine.session().elapsed_seconds)
    ));
    Ok(())
}
