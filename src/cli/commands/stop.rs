use crate::cli::commands::{open_machine, open_pool};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::mins2readable;

/// Stop the stopwatch and commit it as a time entry.
/// On a store failure the session survives (paused); re-running `stop`
/// is the retry.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let mut machine = open_machine(cfg);

    match machine.stop(&mut pool, &cfg.user) {
        Ok(outcome) => {
            let verb = if outcome.updated { "updated" } else { "created" };
            ttlog(
                &pool.conn,
                "commit",
                &outcome.entry.id.to_string(),
                &format!("{} entry, duration {:.4} min", verb, outcome.entry.duration),
            )?;
            success(format!(
                "Entry {} {} for {} ({})",
                outcome.entry.id,
                verb,
                outcome.entry.date,
                mins2readable(outcome.entry.duration)
            ));
            Ok(())
        }
        Err(e) => {
            if !e.is_validation() {
                warning("The session was kept; run `tracklet stop` again to retry.");
            }
            Err(e)
        }
    }
}
