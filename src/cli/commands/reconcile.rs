use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::reconcile::reconcile;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Run the duration reconciliation engine once and report the result.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let report = reconcile(&mut pool, &cfg.user)?;

    ttlog(
        &pool.conn,
        "reconcile",
        &cfg.user,
        &format!(
            "checked {}, rewritten {}, failed {}",
            report.checked, report.rewritten, report.failed
        ),
    )?;

    success(format!(
        "Reconciled {} entries: {} rewritten",
        report.checked, report.rewritten
    ));
    if report.failed > 0 {
        warning(format!(
            "{} rewrite(s) failed and will be retried on the next pass",
            report.failed
        ));
    }
    Ok(())
}
