//! Duration reconciliation engine.
//!
//! Durations are computed at commit/edit time; an edit that touches only
//! one of start/end, or plain floating-point rounding, can leave the
//! stored duration out of step with the timestamps. This pass recomputes
//! every entry's duration and rewrites the ones that drifted beyond the
//! epsilon. Repeated runs converge: once a duration is corrected the
//! delta drops under the epsilon and no further writes happen.

use crate::core::duration::{EPSILON_MINUTES, precise_duration_minutes};
use crate::db::store::{RecordStore, TimeEntryPatch};
use crate::errors::AppResult;
use crate::ui::messages;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReconcileReport {
    pub checked: usize,
    pub rewritten: usize,
    pub failed: usize,
}

/// Audit every entry of `user_id` and rewrite drifted durations.
///
/// A failed rewrite is skipped (warned, counted) and picked up again on
/// the next pass; it never blocks the remaining entries. Only the
/// initial list load is fatal.
pub fn reconcile(store: &mut dyn RecordStore, user_id: &str) -> AppResult<ReconcileReport> {
    let entries = store.list_time_entries(user_id)?;

    let mut report = ReconcileReport::default();
    for entry in entries {
        report.checked += 1;

        let calculated = precise_duration_minutes(entry.start_time, entry.end_time);
        let delta = (calculated - entry.duration).abs();
        if delta <= EPSILON_MINUTES {
            continue;
        }

        let patch = TimeEntryPatch {
            duration: Some(calculated),
            ..Default::default()
        };
        match store.update_time_entry(entry.id, &patch) {
            Ok(_) => report.rewritten += 1,
            Err(e) => {
                messages::warning(format!(
                    "entry {}: duration rewrite {:.4} -> {:.4} failed: {}",
                    entry.id, entry.duration, calculated, e
                ));
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
