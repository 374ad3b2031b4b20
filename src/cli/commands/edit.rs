use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::time::parse_user_ts;

/// Edit an entry's times or description. Duration and date bucket are
/// re-derived from the merged range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        entry_id,
        from,
        to,
        desc,
    } = cmd
    {
        let start = from.as_deref().map(parse_user_ts).transpose()?;
        let end = to.as_deref().map(parse_user_ts).transpose()?;

        let mut pool = open_pool(cfg)?;
        let entry = EntryLogic::edit(&mut pool, *entry_id, start, end, desc.as_deref())?;

        success(format!(
            "Entry {} updated: {} ({})",
            entry.id,
            entry.date,
            mins2readable(entry.duration)
        ));
    }
    Ok(())
}
