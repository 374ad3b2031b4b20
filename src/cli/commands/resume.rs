use crate::cli::commands::open_machine;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::format_hms;

/// Resume a paused stopwatch from its frozen elapsed time.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut machine = open_machine(cfg);
    machine.resume()?;

    success(format!(
        "Timer resumed from {}",
        format_hms(machine.session().elapsed_seconds)
    ));
    Ok(())
}
