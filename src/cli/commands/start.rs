use crate::cli::commands::open_machine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Start the stopwatch against a client/project(/task) selection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        client,
        project,
        task,
        desc,
    } = cmd
    {
        let mut machine = open_machine(cfg);
        machine.start(
            client,
            project,
            task.as_deref().unwrap_or(""),
            desc.as_deref().unwrap_or(""),
        )?;

        success(format!(
            "Timer started for project '{}' (client '{}')",
            project, client
        ));
    }
    Ok(())
}
