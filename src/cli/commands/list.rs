use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::reconcile;
use crate::db::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::mins2readable;

/// List time entries. Loading the list triggers a reconciliation pass,
/// so what gets printed is already self-healed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let filter = match date {
            Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?),
            None => None,
        };

        let mut pool = open_pool(cfg)?;
        let report = reconcile(&mut pool, &cfg.user)?;
        if report.rewritten > 0 {
            info(format!("Reconciled {} drifted duration(s)", report.rewritten));
        }

        let entries = pool.list_time_entries(&cfg.user)?;
        let mut shown = 0usize;

        println!(
            "{:>5}  {:<10}  {:<8} {:<8}  {:<12}  {:<9}  {}",
            "ID", "DATE", "START", "END", "PROJECT", "DURATION", "DESCRIPTION"
        );
        for e in &entries {
            if let Some(d) = filter
                && e.date != d
            {
                continue;
            }
            let end_marker = if e.crosses_day() { "+1d" } else { "" };
            println!(
                "{:>5}  {:<10}  {:<8} {:<5}{:<3}  {:<12}  {:<9}  {}",
                e.id,
                e.date,
                e.start_time.format("%H:%M:%S"),
                e.end_time.format("%H:%M"),
                end_marker,
                e.project_id,
                mins2readable(e.duration),
                e.description
            );
            shown += 1;
        }

        info(format!("{} entr{} listed", shown, if shown == 1 { "y" } else { "ies" }));
    }
    Ok(())
}
