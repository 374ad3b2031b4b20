use crate::cli::commands::open_machine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::TimerPhase;
use crate::ui::messages::info;
use crate::utils::format_hms;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Run the 1-second tick loop in the foreground: one tick per second,
/// each one re-persisting the full session to the cache slot.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { limit } = cmd {
        let mut machine = open_machine(cfg);
        if machine.phase() != TimerPhase::Running {
            return Err(AppError::Validation(
                "timer is not running; start it first".to_string(),
            ));
        }

        info("Ticking; Ctrl-C leaves the session cached and resumable.");

        let mut ticks = 0u64;
        loop {
            thread::sleep(Duration::from_secs(1));
            machine.tick()?;

            print!("\r  {}", format_hms(machine.session().elapsed_seconds));
            std::io::stdout().flush()?;

            ticks += 1;
            if let Some(max) = limit
                && ticks >= *max
            {
                println!();
                break;
            }
        }
    }
    Ok(())
}
