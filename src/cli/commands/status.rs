use crate::cli::commands::open_machine;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TimerPhase;
use crate::ui::messages::{info, warning};
use crate::utils::format_hms;

/// Show the stopwatch phase, elapsed time, and current selection.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let machine = open_machine(cfg);
    let session = machine.session();

    info(format!("Phase:   {}", machine.phase().as_str()));
    info(format!("Elapsed: {}", format_hms(session.elapsed_seconds)));

    if !session.selected_project_id.is_empty() {
        let task = if session.selected_task_id.is_empty() {
            String::new()
        } else {
            format!(" / task {}", session.selected_task_id)
        };
        info(format!(
            "On:      client {} / project {}{}",
            session.selected_client_id, session.selected_project_id, task
        ));
    }
    if let Some(start) = session.start_time {
        info(format!("Since:   {}", start.format("%Y-%m-%d %H:%M:%S")));
    }

    if machine.phase() == TimerPhase::Running && machine.rehydrated_running() {
        warning("Tracked session restored from cache; run `tracklet watch` to keep it ticking.");
    }
    Ok(())
}
