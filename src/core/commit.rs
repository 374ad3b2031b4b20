//! Stop/commit resolver: turns a session into a persisted time entry.
//!
//! Dedup rule: one entry per (user, start_time). A second stop for the
//! same session updates the existing row instead of inserting, so a
//! retried stop or an autosave/stop race cannot produce duplicates.

use crate::core::day;
use crate::core::duration::precise_duration_minutes;
use crate::db::store::{NewTimeEntry, RecordStore, TimeEntryPatch};
use crate::errors::{AppError, AppResult};
use crate::models::{TimeEntry, TimerSession};
use chrono::Local;

/// Fallback description for entries committed without one.
pub const DEFAULT_DESCRIPTION: &str = "Timer session";

#[derive(Debug)]
pub struct CommitOutcome {
    pub entry: TimeEntry,
    /// True when the idempotency guard matched an existing row.
    pub updated: bool,
}

/// Close the session at `now` and create or update its time entry.
///
/// The session itself is never mutated here: on store failure the caller
/// still holds the full session and can retry the stop.
pub fn commit_session(
    store: &mut dyn RecordStore,
    session: &TimerSession,
    user_id: &str,
) -> AppResult<CommitOutcome> {
    let start = session
        .start_time
        .ok_or_else(|| AppError::Validation("no active session to commit".to_string()))?;

    let end = Local::now();
    day::validate_range(start, end)?;

    let duration = precise_duration_minutes(start, end);
    let bucket = day::normalize(start, end);

    if let Some(existing) = store.find_time_entry_by_start_time(user_id, start)? {
        // Keep the old description when the session carries none.
        let description = if session.description.is_empty() {
            existing.description.clone()
        } else {
            session.description.clone()
        };

        let patch = TimeEntryPatch {
            description: Some(description),
            end_time: Some(end),
            duration: Some(duration),
            date: Some(bucket.date),
            ..Default::default()
        };
        let entry = store.update_time_entry(existing.id, &patch)?;
        return Ok(CommitOutcome {
            entry,
            updated: true,
        });
    }

    let description = if session.description.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        session.description.clone()
    };

    let task_id = if session.selected_task_id.is_empty() {
        None
    } else {
        Some(session.selected_task_id.clone())
    };

    let entry = store.create_time_entry(&NewTimeEntry {
        user_id: user_id.to_string(),
        project_id: session.selected_project_id.clone(),
        task_id,
        description,
        start_time: start,
        end_time: end,
        duration,
        date: bucket.date,
    })?;

    Ok(CommitOutcome {
        entry,
        updated: false,
    })
}
