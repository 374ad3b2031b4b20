use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::time::parse_user_ts;

/// Add a manual time entry; the range is validated and duration/date
/// derived before anything is written.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        project,
        task,
        from,
        to,
        desc,
    } = cmd
    {
        let start = parse_user_ts(from)?;
        let end = parse_user_ts(to)?;

        let mut pool = open_pool(cfg)?;
        let entry = EntryLogic::add(
            &mut pool,
            &cfg.user,
            project,
            task.as_deref(),
            desc.as_deref().unwrap_or(""),
            start,
            end,
        )?;

        let marker = if entry.crosses_day() { " (+1d)" } else { "" };
        success(format!(
            "Entry {} added for {}{} ({})",
            entry.id,
            entry.date,
            marker,
            mins2readable(entry.duration)
        ));
    }
    Ok(())
}
